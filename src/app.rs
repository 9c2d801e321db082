//! Command handlers, independent of any particular front end.

use crate::core::conversion::{self, Conversion, TargetCurrency};
use crate::core::error::Result;
use crate::core::{Ledger, QuoteProvider, RateSnapshot, Transaction, TransactionKind, TransactionStore};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct AddTransactionInput {
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
}

pub struct App<S: TransactionStore> {
    ledger: Ledger<S>,
    quotes: QuoteProvider,
}

impl<S: TransactionStore> App<S> {
    pub fn new(ledger: Ledger<S>, quotes: QuoteProvider) -> Self {
        Self { ledger, quotes }
    }

    /// Read access for views; aggregates are recomputed on every call.
    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    pub async fn on_add_transaction(&mut self, input: AddTransactionInput) -> Result<Transaction> {
        self.ledger
            .add(&input.description, input.amount, input.kind)
            .await
    }

    pub async fn on_edit_transaction(&mut self, id: &str, description: &str) -> Result<bool> {
        self.ledger.edit(id, description).await
    }

    pub async fn on_remove_transaction(&mut self, id: &str) -> Result<bool> {
        self.ledger.remove(id).await
    }

    pub async fn on_refresh_ticker(&self) -> Result<RateSnapshot> {
        self.quotes.fetch_rates().await
    }

    /// Checks the amount before touching the network, then converts at a fresh snapshot.
    pub async fn on_convert(&self, amount_brl: Decimal, target: TargetCurrency) -> Result<Conversion> {
        conversion::validate_amount(amount_brl)?;
        let snapshot = self.quotes.fetch_rates().await?;
        conversion::convert(amount_brl, target, Some(&snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TrackerError;
    use crate::core::quote::tests::{StaticCrypto, StaticFiat, fiat, provider};
    use crate::store::memory::MemoryStore;
    use rust_decimal_macros::dec;
    use std::sync::atomic::Ordering;

    async fn app(btc: Option<Decimal>) -> App<MemoryStore> {
        App::new(Ledger::open(MemoryStore::new()).await, provider(Some(fiat()), btc))
    }

    fn input(description: &str, amount: Decimal, kind: TransactionKind) -> AddTransactionInput {
        AddTransactionInput {
            description: description.to_string(),
            amount,
            kind,
        }
    }

    #[tokio::test]
    async fn test_transaction_handlers() {
        let mut app = app(Some(dec!(500000))).await;
        let salary = app
            .on_add_transaction(input("Salary", dec!(1000), TransactionKind::Income))
            .await
            .unwrap();
        app.on_add_transaction(input("Rent", dec!(300), TransactionKind::Expense))
            .await
            .unwrap();
        assert_eq!(app.ledger().balance(), dec!(700));

        assert!(app.on_edit_transaction(&salary.id, "Paycheck").await.unwrap());
        assert!(app.on_remove_transaction(&salary.id).await.unwrap());
        assert_eq!(app.ledger().balance(), dec!(-300));

        let rejected = app
            .on_add_transaction(input("Oops", dec!(0), TransactionKind::Income))
            .await;
        assert!(matches!(rejected, Err(TrackerError::InvalidAmount(_))));
        assert_eq!(app.ledger().len(), 1);
    }

    #[tokio::test]
    async fn test_convert_handler() {
        let app = app(Some(dec!(500000))).await;
        let usd = app.on_convert(dec!(100), TargetCurrency::Usd).await.unwrap();
        assert_eq!(usd.to_string(), "20.00");
        let btc = app.on_convert(dec!(100), TargetCurrency::Btc).await.unwrap();
        assert_eq!(btc.to_string(), "0.00020000");
    }

    #[tokio::test]
    async fn test_convert_handler_without_rates() {
        let app = app(None).await;
        let result = app.on_convert(dec!(100), TargetCurrency::Usd).await;
        assert!(matches!(result, Err(TrackerError::RatesUnavailable(_))));
        assert!(app.on_refresh_ticker().await.is_err());
    }

    #[tokio::test]
    async fn test_convert_rejects_amount_before_fetching() {
        let crypto = StaticCrypto::new(Some(dec!(500000)));
        let calls = std::sync::Arc::clone(&crypto.calls);
        let app = App::new(
            Ledger::open(MemoryStore::new()).await,
            QuoteProvider::new(Box::new(StaticFiat(Some(fiat()))), Box::new(crypto)),
        );

        let result = app.on_convert(dec!(-10), TargetCurrency::Eur).await;
        assert!(matches!(result, Err(TrackerError::InvalidAmount(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
