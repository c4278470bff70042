//! Immutable records of balance-affecting events.

use crate::types::Balance;
use serde::Serialize;
use std::fmt;

/// The kind of event a [`Transaction`] records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionType {
    /// Funds added to the account by its holder.
    Deposit,
    /// Funds taken out of the account by its holder.
    Withdrawal,
    /// Funds sent to another account.
    Transfer,
    /// Funds received from another account.
    Received,
}

impl TransactionType {
    /// Returns the name used in reports and serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "Deposit",
            TransactionType::Withdrawal => "Withdrawal",
            TransactionType::Transfer => "Transfer",
            TransactionType::Received => "Received",
        }
    }

    /// Whether records of this kind add to the balance.
    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionType::Deposit | TransactionType::Received)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in an account's transaction history.
///
/// `to` is only set on [`TransactionType::Transfer`] records and `from` only on
/// [`TransactionType::Received`] records. The constructors are crate-private so that every
/// record in a history was produced by a successful operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    transaction_type: TransactionType,
    amount: Balance,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<String>,
}

impl Transaction {
    pub(crate) fn deposit(amount: Balance) -> Self {
        Self {
            transaction_type: TransactionType::Deposit,
            amount,
            to: None,
            from: None,
        }
    }

    pub(crate) fn withdrawal(amount: Balance) -> Self {
        Self {
            transaction_type: TransactionType::Withdrawal,
            amount,
            to: None,
            from: None,
        }
    }

    pub(crate) fn transfer(amount: Balance, to: impl Into<String>) -> Self {
        Self {
            transaction_type: TransactionType::Transfer,
            amount,
            to: Some(to.into()),
            from: None,
        }
    }

    pub(crate) fn received(amount: Balance, from: impl Into<String>) -> Self {
        Self {
            transaction_type: TransactionType::Received,
            amount,
            to: None,
            from: Some(from.into()),
        }
    }

    /// The kind of event.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// The magnitude moved, always positive.
    pub fn amount(&self) -> Balance {
        self.amount
    }

    /// Recipient name of a transfer.
    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    /// Sender name of a received transfer.
    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    /// The other party of a transfer, if any.
    pub fn counterparty(&self) -> Option<&str> {
        self.to().or_else(|| self.from())
    }

    /// The amount with the sign of its effect on the balance.
    pub fn signed_amount(&self) -> Balance {
        if self.transaction_type.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.to, &self.from) {
            (Some(to), _) => write!(f, "{} {} to {}", self.transaction_type, self.amount, to),
            (_, Some(from)) => write!(f, "{} {} from {}", self.transaction_type, self.amount, from),
            _ => write!(f, "{} {}", self.transaction_type, self.amount),
        }
    }
}
