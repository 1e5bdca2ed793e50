//! Transaction context handed to contract operations
//!
//! One context per invocation: the transaction identity for tracing,
//! the host's ledger state, and the reference data operations validate
//! against. Handlers reach the store only through here.

use std::time::Instant;

use uuid::Uuid;

use crate::ledger::LedgerState;
use crate::record::RangeTable;
use crate::store::{IdentityPolicy, RecordStore};

/// Capabilities one operation may use during one invocation
pub struct TransactionContext<'a> {
    txn_id: Uuid,
    ledger: &'a mut dyn LedgerState,
    table: &'a RangeTable,
    policy: IdentityPolicy,
    started_at: Instant,
}

impl<'a> TransactionContext<'a> {
    pub fn new(
        ledger: &'a mut dyn LedgerState,
        table: &'a RangeTable,
        policy: IdentityPolicy,
    ) -> Self {
        Self {
            txn_id: Uuid::new_v4(),
            ledger,
            table,
            policy,
            started_at: Instant::now(),
        }
    }

    /// Transaction id for tracing
    pub fn txn_id(&self) -> Uuid {
        self.txn_id
    }

    /// Elapsed time since the invocation began, in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.started_at.elapsed().as_millis()
    }

    /// The identity policy in force
    pub fn policy(&self) -> IdentityPolicy {
        self.policy
    }

    /// Record store over this transaction's ledger borrow
    pub fn store(&mut self) -> RecordStore<'_, dyn LedgerState + 'a> {
        RecordStore::new(&mut *self.ledger, self.table, self.policy)
    }
}
