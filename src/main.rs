use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fintrack::core::log::init_logging;
use fintrack::core::{TargetCurrency, TransactionKind};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Record an income or expense
    Add {
        description: String,
        /// Amount in BRL
        #[arg(allow_hyphen_values = true)]
        amount: Decimal,
        /// income or expense
        #[arg(short, long, default_value = "expense")]
        kind: TransactionKind,
    },
    /// Change the description of a transaction
    Edit { id: String, description: String },
    /// Delete a transaction
    Remove { id: String },
    /// Show transactions, breakdown and balance
    List,
    /// Show current USD, EUR and BTC quotes in BRL
    Ticker,
    /// Convert an amount in BRL to USD, EUR or BTC
    Convert {
        #[arg(allow_hyphen_values = true)]
        amount: Decimal,
        /// usd, eur or btc
        #[arg(short, long, default_value = "usd")]
        to: TargetCurrency,
    },
}

impl From<Commands> for fintrack::AppCommand {
    fn from(cmd: Commands) -> fintrack::AppCommand {
        match cmd {
            Commands::Add {
                description,
                amount,
                kind,
            } => fintrack::AppCommand::Add {
                description,
                amount,
                kind,
            },
            Commands::Edit { id, description } => fintrack::AppCommand::Edit { id, description },
            Commands::Remove { id } => fintrack::AppCommand::Remove { id },
            Commands::List => fintrack::AppCommand::List,
            Commands::Ticker => fintrack::AppCommand::Ticker,
            Commands::Convert { amount, to } => fintrack::AppCommand::Convert { amount, target: to },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fintrack::cli::setup::setup(),
        Some(cmd) => fintrack::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
