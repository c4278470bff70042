//! The account registry.

use crate::account::Account;
use crate::errors::CoreError;
use crate::types::{AccountId, Balance};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// Source of bank identities, so that handles from one bank are refused by every other.
static NEXT_BANK_ID: AtomicU64 = AtomicU64::new(0);

/// Owns every account and hands out [`AccountId`] handles to them.
///
/// Accounts are stored in creation order and are never removed, so a handle issued by a bank
/// stays valid for as long as the bank lives. Operations addressed through a handle act on the
/// same account that [`Bank::account`] returns. A clone keeps the identity of its source, so
/// handles work on both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Bank {
    #[serde(skip)]
    id: u64,
    accounts: Vec<Account>,
}

impl Default for Bank {
    fn default() -> Self {
        Self {
            id: NEXT_BANK_ID.fetch_add(1, Ordering::Relaxed),
            accounts: Vec::new(),
        }
    }
}

impl Bank {
    /// Creates a bank with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an account for `name` funded with `initial_deposit`.
    ///
    /// Holder names need not be unique. A negative initial deposit is rejected and leaves the
    /// registry unchanged; zero is allowed.
    pub fn create_account(
        &mut self,
        name: impl Into<String>,
        initial_deposit: Balance,
    ) -> Result<AccountId, CoreError> {
        let name = name.into();
        if initial_deposit < 0 {
            warn!(account = %name, initial_deposit, "rejected negative initial deposit");
            return Err(CoreError::InvalidArgument(format!(
                "Initial deposit cannot be negative, got {}",
                initial_deposit
            )));
        }

        let id = AccountId::new(self.id, self.accounts.len());
        info!(%id, account = %name, initial_deposit, "account created");
        self.accounts.push(Account::new(name, initial_deposit));
        Ok(id)
    }

    /// Looks up an account by handle.
    pub fn account(&self, id: AccountId) -> Result<&Account, CoreError> {
        self.position(id).map(|index| &self.accounts[index])
    }

    /// Looks up an account by handle for mutation.
    pub fn account_mut(&mut self, id: AccountId) -> Result<&mut Account, CoreError> {
        let index = self.position(id)?;
        Ok(&mut self.accounts[index])
    }

    /// All accounts in creation order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Iterates accounts together with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (AccountId, &Account)> {
        let bank = self.id;
        self.accounts
            .iter()
            .enumerate()
            .map(move |(index, account)| (AccountId::new(bank, index), account))
    }

    /// Accounts whose holder name equals `name`, in creation order.
    pub fn find_by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (AccountId, &'a Account)> + 'a {
        self.iter().filter(move |(_, account)| account.name() == name)
    }

    /// Number of accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the bank has no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Sum of all balances, saturating at [`Balance::MAX`].
    pub fn total_holdings(&self) -> Balance {
        self.accounts
            .iter()
            .fold(0, |total: Balance, account| total.saturating_add(account.balance()))
    }

    /// Returns the balance of the account behind `id`.
    pub fn check_balance(&self, id: AccountId) -> Result<Balance, CoreError> {
        self.account(id).map(Account::check_balance)
    }

    /// Deposits into the account behind `id`.
    pub fn deposit(&mut self, id: AccountId, amount: Balance) -> Result<(), CoreError> {
        self.account_mut(id)?.deposit(amount)
    }

    /// Withdraws from the account behind `id`.
    pub fn withdraw(&mut self, id: AccountId, amount: Balance) -> Result<(), CoreError> {
        self.account_mut(id)?.withdraw(amount)
    }

    /// Moves `amount` from `from` to `to` as one step.
    ///
    /// Both handles must belong to this bank. The amount must be positive and covered by the
    /// sender's balance. When `from` and `to` are the same account the balance is unchanged
    /// and its history gains a `Transfer` record followed by a `Received` record.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Balance,
    ) -> Result<(), CoreError> {
        let sender = self.position(from)?;
        let recipient = self.position(to)?;
        if sender == recipient {
            return self.accounts[sender].transfer_to_self(amount);
        }

        let (sender, recipient) = self.pair_mut(sender, recipient);
        sender.transfer(amount, recipient)?;
        debug!(%from, %to, amount, "bank transfer settled");
        Ok(())
    }

    /// Resolves a handle to a registry position, refusing handles issued by other banks.
    fn position(&self, id: AccountId) -> Result<usize, CoreError> {
        if id.bank() != self.id || id.index() >= self.accounts.len() {
            return Err(CoreError::AccountNotFound(id));
        }
        Ok(id.index())
    }

    /// Borrows two distinct, existing accounts mutably at the same time.
    fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Account, &mut Account) {
        if a < b {
            let (left, right) = self.accounts.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.accounts.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }
}
