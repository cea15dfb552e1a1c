use chrono::Local;
use log::warn;
use serde::Serialize;
use serde_json::Value;

use crate::backend::interface;
use crate::core::transaction::{Amount, Transaction};
use crate::core::Ledger;

/// Serialized form of the ledger as written to a backend. Serialization
/// borrows the live state; parsing is lenient and field-by-field, so a
/// damaged blob restores whatever is still well-formed.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotBlob<'a> {
    balance: Amount,
    transactions: &'a [Transaction],
    last_update: String,
}

/// What a parse recovered from a blob. Absent fields stay `None`/empty
/// and fall back to the seed defaults on restore.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub balance: Option<Amount>,
    pub transactions: Vec<Transaction>,
    pub last_update: Option<String>,
}

/// Serializes the ledger to a single self-contained blob, stamped with
/// the save time.
pub fn encode(ledger: &Ledger) -> interface::Result<String> {
    let blob = SnapshotBlob {
        balance: ledger.balance(),
        transactions: ledger.transactions(),
        last_update: Local::now().to_rfc3339(),
    };
    let raw = serde_json::to_string(&blob)?;
    return Ok(raw);
}

/// Parses a snapshot blob. Returns None when the blob is not a JSON
/// object at all; otherwise restores each field independently and skips
/// whatever is malformed.
pub fn parse(raw: &str) -> Option<Snapshot> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("snapshot blob is not valid JSON: {}", err);
            return None;
        }
    };
    if !value.is_object() {
        warn!("snapshot blob is not a JSON object");
        return None;
    }

    return Some(Snapshot {
        balance: coerce_balance(value.get("balance")),
        transactions: parse_transactions(value.get("transactions")),
        last_update: value
            .get("lastUpdate")
            .and_then(Value::as_str)
            .map(str::to_owned),
    });
}

/// Older blobs stored the balance either as a number or as a numeric
/// string; both are accepted. Anything else keeps the seed default.
fn coerce_balance(value: Option<&Value>) -> Option<Amount> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<Amount>().ok(),
        _ => None,
    }
}

fn parse_transactions(value: Option<&Value>) -> Vec<Transaction> {
    let entries = match value.and_then(Value::as_array) {
        Some(entries) => entries,
        None => return Vec::new(),
    };
    return entries
        .iter()
        .filter_map(|entry| match serde_json::from_value(entry.clone()) {
            Ok(transaction) => Some(transaction),
            Err(err) => {
                warn!("skipping malformed transaction record: {}", err);
                None
            }
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::{fixture, rstest};
    use serde_json::json;

    use crate::core::clock;
    use crate::core::transaction::NO_DESCRIPTION;
    use super::*;

    #[fixture]
    fn transaction() -> Transaction {
        let moment = clock::reference_offset()
            .with_ymd_and_hms(2026, 8, 4, 9, 5, 0)
            .unwrap();
        Transaction::new(1754269500000, 1000.0, "John Doe", "ACC123", "Lunch", 399999000.0, &moment)
    }

    #[fixture]
    fn transaction_json() -> serde_json::Value {
        json!({
            "id": 1754269500000i64,
            "date": "2026.08.04",
            "time": "09:05",
            "amount": 1000.0,
            "recipientName": "JOHN DOE",
            "recipientAccount": "ACC123",
            "description": "Lunch",
            "remainingBalance": 399999000.0,
            "timestamp": "2026/08/04 09:05"
        })
    }

    #[rstest]
    fn transaction_serializes_in_camel_case(
        transaction: Transaction,
        transaction_json: serde_json::Value,
    ) {
        let value = serde_json::to_value(&transaction).unwrap();
        assert_eq!(value, transaction_json);
    }

    #[rstest]
    fn transaction_deserializes(transaction: Transaction, transaction_json: serde_json::Value) {
        let parsed = serde_json::from_value::<Transaction>(transaction_json).unwrap();
        assert_eq!(parsed, transaction);
    }

    #[rstest]
    fn missing_description_deserializes_to_the_placeholder(
        mut transaction_json: serde_json::Value,
    ) {
        transaction_json
            .as_object_mut()
            .unwrap()
            .remove("description");

        let parsed = serde_json::from_value::<Transaction>(transaction_json).unwrap();
        assert_eq!(parsed.description, NO_DESCRIPTION);
    }

    #[rstest]
    fn encode_then_parse_round_trips(transaction: Transaction) {
        let ledger = Ledger::from_parts(399999000.0, vec![transaction.clone()]);

        let blob = encode(&ledger).unwrap();
        let snapshot = parse(&blob).unwrap();

        assert_eq!(snapshot.balance, Some(399999000.0));
        assert_eq!(snapshot.transactions, vec![transaction]);
        assert!(snapshot.last_update.is_some());
    }

    #[test]
    fn garbage_is_not_a_snapshot() {
        assert!(parse("definitely not json").is_none());
        assert!(parse("null").is_none());
        assert!(parse("42").is_none());
    }

    #[test]
    fn balance_alone_is_restored() {
        let snapshot = parse(r#"{"balance": 5.0}"#).unwrap();

        assert_eq!(snapshot.balance, Some(5.0));
        assert!(snapshot.transactions.is_empty());
        assert!(snapshot.last_update.is_none());
    }

    #[test]
    fn numeric_string_balance_is_coerced() {
        let snapshot = parse(r#"{"balance": "250.75"}"#).unwrap();
        assert_eq!(snapshot.balance, Some(250.75));
    }

    #[test]
    fn unusable_balance_keeps_the_default() {
        let snapshot = parse(r#"{"balance": null, "transactions": []}"#).unwrap();
        assert_eq!(snapshot.balance, None);

        let snapshot = parse(r#"{"balance": "not a number"}"#).unwrap();
        assert_eq!(snapshot.balance, None);
    }

    #[rstest]
    fn malformed_history_entries_are_skipped(transaction_json: serde_json::Value) {
        let blob = json!({
            "balance": 10.0,
            "transactions": [transaction_json, {"id": "nope"}]
        })
        .to_string();

        let snapshot = parse(&blob).unwrap();

        assert_eq!(snapshot.transactions.len(), 1);
        assert_eq!(snapshot.transactions[0].recipient_name, "JOHN DOE");
    }

    #[test]
    fn non_array_history_is_dropped() {
        let snapshot = parse(r#"{"balance": 10.0, "transactions": "oops"}"#).unwrap();
        assert!(snapshot.transactions.is_empty());
    }
}
