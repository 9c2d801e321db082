//! Transaction model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransactionKind::Income => "Income",
                TransactionKind::Expense => "Expense",
            }
        )
    }
}

impl FromStr for TransactionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" | "in" => Ok(TransactionKind::Income),
            "expense" | "out" => Ok(TransactionKind::Expense),
            _ => Err(anyhow::anyhow!("Invalid transaction kind: {}", s)),
        }
    }
}

/// A single income or expense entry.
///
/// `amount` is always positive; the sign comes from `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(alias = "desc")]
    pub description: String,
    pub amount: Decimal,
    #[serde(alias = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    pub(crate) fn new(description: &str, amount: Decimal, kind: TransactionKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.trim().to_string(),
            amount,
            kind,
        }
    }

    /// Amount with the sign implied by the kind.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}
