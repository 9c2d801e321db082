use super::util::{get_json, http_client};
use crate::core::quote::{FiatQuoteSource, FiatQuotes};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

const PAIRS: &str = "USD-BRL,EUR-BRL";

#[derive(Debug, Deserialize)]
struct PairQuote {
    bid: Decimal,
}

#[derive(Debug, Deserialize)]
struct LastQuotesResponse {
    #[serde(rename = "USDBRL")]
    usd_brl: PairQuote,
    #[serde(rename = "EURBRL")]
    eur_brl: PairQuote,
}

/// Fiat pair quotes (USD/BRL, EUR/BRL) from the AwesomeAPI `last` endpoint.
pub struct AwesomeApiProvider {
    base_url: String,
    timeout: Option<Duration>,
}

impl AwesomeApiProvider {
    pub fn new(base_url: &str) -> Self {
        AwesomeApiProvider {
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
impl FiatQuoteSource for AwesomeApiProvider {
    #[instrument(name = "AwesomeApiFetch", skip(self))]
    async fn fetch_fiat_quotes(&self) -> Result<FiatQuotes> {
        let url = format!("{}/last/{}", self.base_url, PAIRS);
        let client = http_client(self.timeout)?;
        let data: LastQuotesResponse = get_json(&client, &url, "fiat").await?;

        Ok(FiatQuotes {
            usd_brl: data.usd_brl.bid,
            eur_brl: data.eur_brl.bid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LAST_PATH: &str = "/last/USD-BRL,EUR-BRL";

    async fn create_mock_server(status: u16, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(LAST_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_fiat_fetch() {
        let mock_response = r#"{
            "USDBRL": {
                "code": "USD",
                "codein": "BRL",
                "name": "Dólar Americano/Real Brasileiro",
                "bid": "5.4321",
                "ask": "5.4330"
            },
            "EURBRL": {
                "code": "EUR",
                "codein": "BRL",
                "bid": "5.9876",
                "ask": "5.9900"
            }
        }"#;
        let mock_server = create_mock_server(200, mock_response).await;

        let provider = AwesomeApiProvider::new(&mock_server.uri());
        let quotes = provider.fetch_fiat_quotes().await.unwrap();
        assert_eq!(quotes.usd_brl, dec!(5.4321));
        assert_eq!(quotes.eur_brl, dec!(5.9876));
    }

    #[tokio::test]
    async fn test_missing_pair_is_error() {
        let mock_response = r#"{"USDBRL": {"bid": "5.4321"}}"#;
        let mock_server = create_mock_server(200, mock_response).await;

        let provider = AwesomeApiProvider::new(&mock_server.uri());
        let result = provider.fetch_fiat_quotes().await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON response for fiat quotes")
        );
    }

    #[tokio::test]
    async fn test_missing_bid_is_error() {
        let mock_response = r#"{"USDBRL": {"bid": "5.4"}, "EURBRL": {"ask": "6.0"}}"#;
        let mock_server = create_mock_server(200, mock_response).await;

        let provider = AwesomeApiProvider::new(&mock_server.uri());
        assert!(provider.fetch_fiat_quotes().await.is_err());
    }

    #[tokio::test]
    async fn test_fiat_api_error_response() {
        let mock_server = create_mock_server(500, "").await;

        let provider = AwesomeApiProvider::new(&mock_server.uri());
        let result = provider.fetch_fiat_quotes().await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 500 Internal Server Error for fiat quotes"
        );
    }

    #[tokio::test]
    async fn test_fiat_request_times_out() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LAST_PATH))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&mock_server)
            .await;

        let provider =
            AwesomeApiProvider::new(&mock_server.uri()).with_timeout(Duration::from_millis(50));
        let result = provider.fetch_fiat_quotes().await;
        assert!(result.unwrap_err().to_string().contains("Request error"));
    }
}
