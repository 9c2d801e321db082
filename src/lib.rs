pub mod app;
pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::app::{AddTransactionInput, App};
use crate::core::config::AppConfig;
use crate::core::{Ledger, QuoteProvider, TargetCurrency, TransactionKind};
use anyhow::Result;
use console::style;
use rust_decimal::Decimal;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum AppCommand {
    Add {
        description: String,
        amount: Decimal,
        kind: TransactionKind,
    },
    Edit {
        id: String,
        description: String,
    },
    Remove {
        id: String,
    },
    List,
    Ticker,
    Convert {
        amount: Decimal,
        target: TargetCurrency,
    },
}

pub fn quote_provider(config: &AppConfig) -> QuoteProvider {
    let timeout = config.request_timeout();
    let fiat = providers::AwesomeApiProvider::new(&config.providers.fiat.base_url)
        .with_timeout(timeout);
    let crypto = providers::CoinGeckoProvider::new(&config.providers.crypto.base_url)
        .with_timeout(timeout);
    QuoteProvider::new(Box::new(fiat), Box::new(crypto)).with_timeout(timeout)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Finance Tracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = store::open_disk_store(&config)?;
    let ledger = Ledger::open(store).await;
    let mut app = App::new(ledger, quote_provider(&config));

    match command {
        AppCommand::Add {
            description,
            amount,
            kind,
        } => {
            let transaction = app
                .on_add_transaction(AddTransactionInput {
                    description,
                    amount,
                    kind,
                })
                .await?;
            println!("Added {} ({})", style(&transaction.id).dim(), transaction.kind);
            cli::transactions::run(app.ledger());
        }
        AppCommand::Edit { id, description } => {
            if !app.on_edit_transaction(&id, &description).await? {
                println!("No transaction with id {id}");
            }
            cli::transactions::run(app.ledger());
        }
        AppCommand::Remove { id } => {
            if !app.on_remove_transaction(&id).await? {
                println!("No transaction with id {id}");
            }
            cli::transactions::run(app.ledger());
        }
        AppCommand::List => cli::transactions::run(app.ledger()),
        AppCommand::Ticker => cli::quotes::run_ticker(&app).await,
        AppCommand::Convert { amount, target } => {
            cli::quotes::run_convert(&app, amount, target).await
        }
    }

    Ok(())
}
