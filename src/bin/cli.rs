use tugrik::{currency,
    Amount, DualStore, FileStore, Ledger, StorageBackend, Transaction};

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::{Serialize, Deserialize};

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
   /// Path to the TOML file describing the snapshot stores
   #[clap(value_parser)]
    config: PathBuf,

   /// Action to perform
   #[clap(subcommand)]
   action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Show the current account balance
    Balance,
    /// List the transfer history grouped by date
    History,
    /// Send money to a recipient
    Transfer(Transfer)
}

#[derive(Args, Debug)]
struct Transfer {
    /// Amount to send
    #[clap(short='a', long, value_parser)]
    amount: Amount,

    /// Name of the recipient
    #[clap(short='n', long, value_parser)]
    name: String,

    /// Account identifier of the recipient
    #[clap(short='t', long, value_parser)]
    account: String,

    /// Optional transfer description
    #[clap(short='d', long, value_parser, default_value_t = String::new())]
    description: String
}

#[derive(Debug, Serialize, Deserialize)]
struct StorageConfig {
    /// Directory of the primary store; omit to run on the fallback alone.
    primary: Option<PathBuf>,
    /// Directory of the always-present fallback store.
    fallback: PathBuf
}

#[derive(Debug, Serialize, Deserialize)]
struct AppConfig {
    storage: StorageConfig
}

impl AppConfig {
    fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = std::fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    fn open_store(&self) -> DualStore {
        let primary = self
            .storage
            .primary
            .as_ref()
            .map(|dir| Box::new(FileStore::new(dir)) as Box<dyn StorageBackend>);
        return DualStore::new(primary, Box::new(FileStore::new(&self.storage.fallback)));
    }
}

fn print_balance(ledger: &Ledger) {
    println!("{}: {}",
        "Balance".bold(),
        currency::format_mnt(ledger.balance()).green());
}

fn print_history(ledger: &Ledger) {
    if ledger.transactions().is_empty() {
        println!("No transactions yet");
        return;
    }
    for (date, entries) in ledger.history_by_date() {
        println!("{}", date.bold());
        for transaction in entries {
            println!("  {}", transaction);
        }
    }
}

fn print_receipt(recorded: &Transaction) {
    println!("{} {} to {} ({})",
        "Sent".green().bold(),
        currency::format_mnt(recorded.amount),
        recorded.recipient_name.bold(),
        recorded.recipient_account);
    println!("{}: {}", "Description".bold(), recorded.description);
    println!("{}: {}", "Remaining balance".bold(),
        currency::format_mnt(recorded.remaining_balance));
    println!("{}", recorded.timestamp);
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = AppConfig::read(&args.config)?;
    let store = config.open_store();
    let mut ledger = Ledger::bootstrap(&store);

    match args.action {
        Subcommands::Balance => {
            print_balance(&ledger);
        },
        Subcommands::History => {
            print_history(&ledger);
        },
        Subcommands::Transfer(transfer) => {
            let recorded = ledger
                .process_transfer(&store,
                    transfer.amount, &transfer.name, &transfer.account, &transfer.description)
                .map_err(|err| anyhow::anyhow!("transfer rejected: {}", err))?;
            print_receipt(&recorded);
        }
    }

    return Ok(());
}
