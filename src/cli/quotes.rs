use super::ui;
use crate::app::App;
use crate::core::{RateSnapshot, TargetCurrency, TrackerError, TransactionStore};
use rust_decimal::Decimal;

/// Single-line ticker, e.g. `USD: R$ 5.43 | EUR: R$ 5.98 | BTC: R$ 351234.56`.
pub fn ticker_line(rates: &Result<RateSnapshot, TrackerError>) -> String {
    match rates {
        Ok(snapshot) => format!(
            "USD: R$ {} | EUR: R$ {} | BTC: R$ {}",
            snapshot.usd_brl(),
            snapshot.eur_brl(),
            snapshot.btc_brl()
        ),
        Err(_) => ui::style_text("Failed to load quotes.", ui::StyleType::Error),
    }
}

pub async fn run_ticker<S: TransactionStore>(app: &App<S>) {
    let pb = ui::new_spinner("Fetching quotes...");
    let rates = app.on_refresh_ticker().await;
    pb.finish_and_clear();

    println!("{}", ticker_line(&rates));
    if let Ok(snapshot) = &rates {
        let fetched_at = format!("as of {}", snapshot.fetched_at().format("%Y-%m-%d %H:%M:%S UTC"));
        println!("{}", ui::style_text(&fetched_at, ui::StyleType::Subtle));
    }
}

pub async fn run_convert<S: TransactionStore>(
    app: &App<S>,
    amount_brl: Decimal,
    target: TargetCurrency,
) {
    let pb = ui::new_spinner("Converting...");
    let result = app.on_convert(amount_brl, target).await;
    pb.finish_and_clear();

    match result {
        Ok(conversion) => println!(
            "{} = {}",
            ui::format_brl(amount_brl),
            ui::style_text(&conversion.with_symbol(), ui::StyleType::Positive)
        ),
        Err(TrackerError::InvalidAmount(_)) => println!(
            "{}",
            ui::style_text("Enter an amount in R$ greater than zero.", ui::StyleType::Error)
        ),
        Err(e) => println!(
            "{}",
            ui::style_text(&format!("Conversion failed: {e}"), ui::StyleType::Error)
        ),
    }
}
