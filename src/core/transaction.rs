use chrono::{DateTime, FixedOffset};
use colored::Colorize;
use serde::{Serialize, Deserialize};

use crate::core::clock;
use crate::core::currency;

pub type Amount = f64;

/// Placeholder stored when a transfer is submitted without a description.
pub const NO_DESCRIPTION: &str = "No description";

/// One outgoing transfer, immutable once recorded.
///
/// Field names serialize in camelCase because the snapshot blob is shared
/// with the host application's own reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Creation time in milliseconds since the epoch. Unique and strictly
    /// increasing, so it doubles as the chronological sort key.
    pub id: i64,
    pub date: String,
    pub time: String,
    pub amount: Amount,
    pub recipient_name: String,
    pub recipient_account: String,
    #[serde(default = "default_description")]
    pub description: String,
    /// Account balance immediately after this transfer was applied.
    /// A historical record; never recomputed later.
    pub remaining_balance: Amount,
    /// Combined date and time, kept for display convenience.
    pub timestamp: String,
}

fn default_description() -> String {
    NO_DESCRIPTION.to_owned()
}

impl Transaction {
    /// Builds the record for an already-debited transfer. The recipient
    /// name is normalized to upper case and a blank description falls
    /// back to the placeholder.
    pub fn new(
        id: i64,
        amount: Amount,
        recipient_name: &str,
        recipient_account: &str,
        description: &str,
        remaining_balance: Amount,
        created_at: &DateTime<FixedOffset>,
    ) -> Transaction {
        let description = description.trim();
        return Transaction {
            id,
            date: clock::format_date(created_at),
            time: clock::format_time(created_at),
            amount,
            recipient_name: recipient_name.trim().to_uppercase(),
            recipient_account: recipient_account.trim().to_owned(),
            description: if description.is_empty() {
                NO_DESCRIPTION.to_owned()
            } else {
                description.to_owned()
            },
            remaining_balance,
            timestamp: clock::format_stamp(created_at),
        };
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -{} ({}); {}: {}",
            self.time,
            self.recipient_name.bold(),
            currency::format_mnt(self.amount),
            self.description,
            "Rem".bold(),
            currency::format_mnt(self.remaining_balance))
    }
}
