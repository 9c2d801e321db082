use super::util::{get_json, http_client};
use crate::core::quote::CryptoQuoteSource;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::instrument;

const COIN_ID: &str = "bitcoin";
const VS_CURRENCY: &str = "brl";

#[derive(Debug, Deserialize)]
struct CoinPrice {
    brl: Decimal,
}

/// Bitcoin price in BRL from CoinGecko's `simple/price` endpoint.
pub struct CoinGeckoProvider {
    base_url: String,
    timeout: Option<Duration>,
}

impl CoinGeckoProvider {
    pub fn new(base_url: &str) -> Self {
        CoinGeckoProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl CryptoQuoteSource for CoinGeckoProvider {
    #[instrument(name = "CoinGeckoFetch", skip(self))]
    async fn fetch_btc_brl(&self) -> Result<Decimal> {
        let url = format!(
            "{}/api/v3/simple/price?ids={}&vs_currencies={}",
            self.base_url, COIN_ID, VS_CURRENCY
        );
        let client = http_client(self.timeout)?;
        let mut data: HashMap<String, CoinPrice> = get_json(&client, &url, "crypto").await?;

        data.remove(COIN_ID)
            .map(|price| price.brl)
            .ok_or_else(|| anyhow!("No price data found for coin: {}", COIN_ID))
    }
}
