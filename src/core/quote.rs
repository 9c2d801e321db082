//! Exchange-rate snapshots and the quote sources that feed them

use super::error::TrackerError;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::try_join;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// USD and EUR quoted in BRL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiatQuotes {
    pub usd_brl: Decimal,
    pub eur_brl: Decimal,
}

#[async_trait]
pub trait FiatQuoteSource: Send + Sync {
    async fn fetch_fiat_quotes(&self) -> Result<FiatQuotes>;
}

#[async_trait]
pub trait CryptoQuoteSource: Send + Sync {
    /// Price of one bitcoin in BRL.
    async fn fetch_btc_brl(&self) -> Result<Decimal>;
}

/// An all-or-nothing bundle of rates fetched together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSnapshot {
    usd_brl: Decimal,
    eur_brl: Decimal,
    btc_brl: Decimal,
    fetched_at: DateTime<Utc>,
}

impl RateSnapshot {
    /// Fails with `RatesUnavailable` unless every rate is positive.
    pub fn new(
        usd_brl: Decimal,
        eur_brl: Decimal,
        btc_brl: Decimal,
        fetched_at: DateTime<Utc>,
    ) -> Result<Self, TrackerError> {
        for (name, rate) in [("USDBRL", usd_brl), ("EURBRL", eur_brl), ("BTCBRL", btc_brl)] {
            if rate <= Decimal::ZERO {
                return Err(TrackerError::RatesUnavailable(format!(
                    "non-positive {name} rate: {rate}"
                )));
            }
        }
        Ok(Self {
            usd_brl,
            eur_brl,
            btc_brl,
            fetched_at,
        })
    }

    pub fn usd_brl(&self) -> Decimal {
        self.usd_brl
    }

    pub fn eur_brl(&self) -> Decimal {
        self.eur_brl
    }

    pub fn btc_brl(&self) -> Decimal {
        self.btc_brl
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// Joins the fiat and crypto sources into a single snapshot.
pub struct QuoteProvider {
    fiat: Box<dyn FiatQuoteSource>,
    crypto: Box<dyn CryptoQuoteSource>,
    timeout: Option<Duration>,
}

impl QuoteProvider {
    pub fn new(fiat: Box<dyn FiatQuoteSource>, crypto: Box<dyn CryptoQuoteSource>) -> Self {
        Self {
            fiat,
            crypto,
            timeout: None,
        }
    }

    /// Upper bound for the joined fetch. Without it a hung source waits forever.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fetches a fresh snapshot. Both requests run concurrently; the first
    /// failure makes the whole snapshot unavailable.
    #[instrument(name = "FetchRates", skip(self))]
    pub async fn fetch_rates(&self) -> Result<RateSnapshot, TrackerError> {
        let joined = try_join(self.fiat.fetch_fiat_quotes(), self.crypto.fetch_btc_brl());
        let outcome = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, joined).await {
                Ok(outcome) => outcome,
                Err(_) => Err(anyhow::anyhow!("Quote request timed out after {limit:?}")),
            },
            None => joined.await,
        };

        let (fiat, btc_brl) = outcome.map_err(|e| {
            error!(error = %e, "Failed to fetch exchange rates");
            TrackerError::RatesUnavailable(e.to_string())
        })?;
        debug!(?fiat, %btc_brl, "Fetched exchange rates");

        RateSnapshot::new(fiat.usd_brl, fiat.eur_brl, btc_brl, Utc::now()).inspect_err(|e| {
            error!(error = %e, "Rejected exchange rates");
        })
    }
}
