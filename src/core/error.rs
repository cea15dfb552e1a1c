use std::error;

use crate::core::currency;
use crate::core::transaction::Amount;

#[derive(Debug, Clone, PartialEq)]
pub enum TransferError {
    /// Occurs when the requested amount is zero, negative, or not a
    /// finite number.
    InvalidAmount(Amount),
    /// Occurs when the recipient name is blank after trimming.
    MissingRecipientName,
    /// Occurs when the recipient account is blank after trimming.
    MissingRecipientAccount,
    /// Occurs when the requested amount exceeds the available balance.
    InsufficientBalance {
        requested: Amount,
        available: Amount
    },
    /// Occurs when a transfer is attempted while another one is still
    /// being processed on a shared handle.
    TransferInFlight
}

pub type TransferResult<T> = Result<T, TransferError>;

impl std::fmt::Display for TransferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferError::InvalidAmount(amount) => {
                write!(f, "invalid amount: {}", amount)
            },
            TransferError::MissingRecipientName => {
                write!(f, "missing recipient name")
            },
            TransferError::MissingRecipientAccount => {
                write!(f, "missing recipient account")
            },
            TransferError::InsufficientBalance { requested, available } => {
                write!(f, "insufficient balance: requested {}, available {}",
                    currency::format_mnt(*requested), currency::format_mnt(*available))
            },
            TransferError::TransferInFlight => {
                write!(f, "another transfer is already in progress")
            }
        }
    }
}

impl error::Error for TransferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_balance_reports_both_figures() {
        let err = TransferError::InsufficientBalance {
            requested: 500000000.0,
            available: 399999000.0,
        };

        assert_eq!(
            err.to_string(),
            "insufficient balance: requested 500,000,000.00 MNT, available 399,999,000.00 MNT"
        );
    }
}
