use std::sync::{Mutex, PoisonError};

use log::warn;

use crate::backend::{DualStore, Snapshot};
use crate::core::clock;
use crate::core::error::{TransferError, TransferResult};
use crate::core::transaction::{Amount, Transaction};

/// Opening balance seeded on first run, before any snapshot exists.
pub const OPENING_BALANCE: Amount = 400_000_000.00;

/// The in-memory authoritative account state: the current balance plus
/// the full outgoing-transfer history, newest first.
pub struct Ledger {
    balance: Amount,
    transactions: Vec<Transaction>
}

impl Ledger {
    /// Seed state used when no snapshot could be restored.
    pub fn new() -> Ledger {
        return Ledger { balance: OPENING_BALANCE, transactions: Vec::new() };
    }

    pub fn from_parts(balance: Amount, transactions: Vec<Transaction>) -> Ledger {
        return Ledger { balance, transactions };
    }

    /// Merges a restored snapshot over the seed defaults: fields the
    /// snapshot did not carry keep their first-run values.
    pub fn from_snapshot(snapshot: Snapshot) -> Ledger {
        return Ledger {
            balance: snapshot.balance.unwrap_or(OPENING_BALANCE),
            transactions: snapshot.transactions,
        };
    }

    /// Restores the persisted ledger, or seeds the defaults and writes an
    /// opening snapshot when no backend has usable data.
    pub fn bootstrap(store: &DualStore) -> Ledger {
        match store.load() {
            Some(ledger) => ledger,
            None => {
                let ledger = Ledger::new();
                if !store.save(&ledger) {
                    warn!("opening snapshot could not be persisted");
                }
                ledger
            }
        }
    }

    pub fn balance(&self) -> Amount {
        return self.balance;
    }

    /// Full history, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        return &self.transactions;
    }

    /// History grouped by calendar date for rendering. Groups appear in
    /// the order their date is first seen (most recent date first, since
    /// the history is newest-first); entries within a group keep
    /// insertion order.
    pub fn history_by_date(&self) -> Vec<(String, Vec<&Transaction>)> {
        let mut groups: Vec<(String, Vec<&Transaction>)> = Vec::new();
        for transaction in &self.transactions {
            match groups.iter_mut().find(|(date, _)| *date == transaction.date) {
                Some((_, entries)) => entries.push(transaction),
                None => groups.push((transaction.date.clone(), vec![transaction]))
            }
        }
        return groups;
    }

    /// Validates and applies one outgoing transfer: debit the balance,
    /// record the transaction at the front of the history, persist the
    /// snapshot. A failed save is logged and does not roll the debit
    /// back; the transfer stands on the strength of the in-memory state.
    pub fn process_transfer(
        &mut self,
        store: &DualStore,
        amount: Amount,
        recipient_name: &str,
        recipient_account: &str,
        description: &str,
    ) -> TransferResult<Transaction> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TransferError::InvalidAmount(amount));
        }
        if recipient_name.trim().is_empty() {
            return Err(TransferError::MissingRecipientName);
        }
        if recipient_account.trim().is_empty() {
            return Err(TransferError::MissingRecipientAccount);
        }
        if amount > self.balance {
            return Err(TransferError::InsufficientBalance {
                requested: amount,
                available: self.balance
            });
        }

        self.balance -= amount;

        let created_at = clock::now();
        let transaction = Transaction::new(
            self.next_transaction_id(created_at.timestamp_millis()),
            amount,
            recipient_name,
            recipient_account,
            description,
            self.balance,
            &created_at,
        );
        self.transactions.insert(0, transaction);

        if !store.save(self) {
            warn!("transfer recorded but the snapshot could not be persisted");
        }

        return Ok(self.transactions[0].clone());
    }

    /// Ids are creation timestamps in milliseconds; bumping past the
    /// newest recorded id keeps them strictly increasing even when two
    /// transfers land within the same millisecond.
    fn next_transaction_id(&self, now_millis: i64) -> i64 {
        match self.transactions.first() {
            Some(newest) if newest.id >= now_millis => newest.id + 1,
            _ => now_millis
        }
    }
}

impl Default for Ledger {
    fn default() -> Ledger {
        Ledger::new()
    }
}

/// Shared handle for hosts that drive transfers from re-entrant
/// callbacks. A second transfer attempted while one is still in flight
/// is rejected, not queued.
pub struct SharedLedger {
    inner: Mutex<Ledger>
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> SharedLedger {
        return SharedLedger { inner: Mutex::new(ledger) };
    }

    /// Runs the full validate-debit-record-persist sequence under the
    /// lock, so no concurrent transfer can observe a stale balance.
    pub fn transfer(
        &self,
        store: &DualStore,
        amount: Amount,
        recipient_name: &str,
        recipient_account: &str,
        description: &str,
    ) -> TransferResult<Transaction> {
        let mut ledger = self
            .inner
            .try_lock()
            .map_err(|_| TransferError::TransferInFlight)?;
        return ledger.process_transfer(store, amount, recipient_name, recipient_account, description);
    }

    /// Shared read access for rendering.
    pub fn read<R>(&self, render: impl FnOnce(&Ledger) -> R) -> R {
        let ledger = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        return render(&ledger);
    }
}
