//! BRL to USD/EUR/BTC conversion

use super::error::{Result, TrackerError};
use super::quote::RateSnapshot;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetCurrency {
    Usd,
    Eur,
    Btc,
}

impl TargetCurrency {
    /// Fractional digits shown for this unit.
    pub fn precision(&self) -> u32 {
        match self {
            TargetCurrency::Usd | TargetCurrency::Eur => 2,
            TargetCurrency::Btc => 8,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TargetCurrency::Usd => "US$",
            TargetCurrency::Eur => "€",
            TargetCurrency::Btc => "BTC",
        }
    }

    fn rate(&self, snapshot: &RateSnapshot) -> Decimal {
        match self {
            TargetCurrency::Usd => snapshot.usd_brl(),
            TargetCurrency::Eur => snapshot.eur_brl(),
            TargetCurrency::Btc => snapshot.btc_brl(),
        }
    }
}

impl Display for TargetCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TargetCurrency::Usd => "USD",
                TargetCurrency::Eur => "EUR",
                TargetCurrency::Btc => "BTC",
            }
        )
    }
}

impl FromStr for TargetCurrency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "usd" | "dolar" => Ok(TargetCurrency::Usd),
            "eur" | "euro" => Ok(TargetCurrency::Eur),
            "btc" | "bitcoin" => Ok(TargetCurrency::Btc),
            _ => Err(anyhow::anyhow!("Invalid target currency: {}", s)),
        }
    }
}

/// Result of a conversion. `amount` is the unrounded quotient; `Display`
/// renders it at the target's precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub amount: Decimal,
    pub target: TargetCurrency,
}

impl Conversion {
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(self.target.precision(), RoundingStrategy::MidpointAwayFromZero)
    }

    /// Formatted value prefixed with the currency symbol, e.g. `US$ 20.00`.
    pub fn with_symbol(&self) -> String {
        format!("{} {}", self.target.symbol(), self)
    }
}

impl Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let places = self.target.precision() as usize;
        write!(f, "{:.places$}", self.rounded())
    }
}

/// Fails with `InvalidAmount` before looking at the rates.
pub fn validate_amount(amount_brl: Decimal) -> Result<()> {
    if amount_brl <= Decimal::ZERO {
        return Err(TrackerError::InvalidAmount(amount_brl));
    }
    Ok(())
}

/// Converts `amount_brl` into `target`. `None` means the rates could not be fetched.
pub fn convert(
    amount_brl: Decimal,
    target: TargetCurrency,
    snapshot: Option<&RateSnapshot>,
) -> Result<Conversion> {
    validate_amount(amount_brl)?;
    let snapshot = snapshot.ok_or_else(|| {
        TrackerError::RatesUnavailable("no rate snapshot available".to_string())
    })?;

    let amount = amount_brl
        .checked_div(target.rate(snapshot))
        .ok_or(TrackerError::AmountTooLarge(amount_brl))?;
    Ok(Conversion { amount, target })
}
