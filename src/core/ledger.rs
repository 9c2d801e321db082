//! The transaction ledger and its aggregates.
//!
//! Every mutation is written through to the store before it returns. If the
//! write fails the in-memory change is rolled back, so the ledger and its
//! stored snapshot never diverge.

use super::error::{Result, TrackerError};
use super::persistence::TransactionStore;
use super::transaction::{Transaction, TransactionKind};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Independent, non-negative sums per transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl Totals {
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }

    /// Totals after adding `amount` of `kind`, or `None` if a sum would overflow.
    pub fn checked_add(&self, amount: Decimal, kind: TransactionKind) -> Option<Totals> {
        let mut next = *self;
        match kind {
            TransactionKind::Income => next.income = next.income.checked_add(amount)?,
            TransactionKind::Expense => next.expense = next.expense.checked_add(amount)?,
        }
        Some(next)
    }
}

pub struct Ledger<S: TransactionStore> {
    transactions: Vec<Transaction>,
    store: S,
}

impl<S: TransactionStore> Ledger<S> {
    /// Builds a ledger from whatever the store currently holds.
    pub async fn open(store: S) -> Self {
        let mut seen = HashSet::new();
        let mut running = Totals::default();
        let transactions: Vec<Transaction> = store
            .load()
            .await
            .into_iter()
            .filter(|t| {
                if t.amount <= Decimal::ZERO {
                    warn!(id = %t.id, amount = %t.amount, "Dropping non-positive amount from storage");
                    return false;
                }
                if seen.contains(&t.id) {
                    warn!(id = %t.id, "Dropping duplicate transaction id from storage");
                    return false;
                }
                let Some(next) = running.checked_add(t.amount, t.kind) else {
                    warn!(id = %t.id, amount = %t.amount, "Dropping amount that overflows totals");
                    return false;
                };
                running = next;
                seen.insert(t.id.clone());
                true
            })
            .collect();
        debug!(count = transactions.len(), "Ledger loaded");

        Self {
            transactions,
            store,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub async fn add(
        &mut self,
        description: &str,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Result<Transaction> {
        if amount <= Decimal::ZERO {
            return Err(TrackerError::InvalidAmount(amount));
        }
        if self.totals().checked_add(amount, kind).is_none() {
            return Err(TrackerError::AmountTooLarge(amount));
        }

        let transaction = Transaction::new(description, amount, kind);
        self.transactions.push(transaction.clone());
        if let Err(e) = self.persist().await {
            self.transactions.pop();
            return Err(e);
        }

        info!(id = %transaction.id, %kind, %amount, "Transaction added");
        Ok(transaction)
    }

    /// Replaces the description of `id`. Returns `Ok(false)` if no such transaction exists.
    pub async fn edit(&mut self, id: &str, new_description: &str) -> Result<bool> {
        let Some(index) = self.position(id) else {
            debug!(%id, "Edit target not found");
            return Ok(false);
        };

        let trimmed = new_description.trim();
        if trimmed.is_empty() {
            return Err(TrackerError::EmptyDescription);
        }

        let previous = std::mem::replace(
            &mut self.transactions[index].description,
            trimmed.to_string(),
        );
        if let Err(e) = self.persist().await {
            self.transactions[index].description = previous;
            return Err(e);
        }

        info!(%id, "Transaction description updated");
        Ok(true)
    }

    /// Removes `id` if present. Returns `Ok(false)` when there was nothing to remove.
    pub async fn remove(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.position(id) else {
            debug!(%id, "Remove target not found");
            return Ok(false);
        };

        let removed = self.transactions.remove(index);
        if let Err(e) = self.persist().await {
            self.transactions.insert(index, removed);
            return Err(e);
        }

        info!(%id, "Transaction removed");
        Ok(true)
    }

    pub fn balance(&self) -> Decimal {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    pub fn totals(&self) -> Totals {
        let sum_of = |kind: TransactionKind| -> Decimal {
            self.transactions
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum()
        };
        Totals {
            income: sum_of(TransactionKind::Income),
            expense: sum_of(TransactionKind::Expense),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }

    async fn persist(&self) -> Result<()> {
        self.store
            .save(&self.transactions)
            .await
            .map_err(TrackerError::Persistence)
    }
}
