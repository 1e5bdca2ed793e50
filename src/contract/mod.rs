//! Contract surface subsystem
//!
//! The inbound face of the crate: a flat set of operations registered
//! under wire names, invoked with positional string arguments by the
//! hosting execution environment. One invocation gets one transaction
//! context and returns one byte payload or one typed error.
//!
//! # Design Principles
//!
//! - Dispatch by registered name; no operation hierarchy
//! - Arguments parsed and rejected before any store access
//! - The host owns the ledger; the contract only borrows it per call
//! - Every invocation and its outcome is logged

mod context;
mod errors;
mod ops;
mod registry;

pub use context::TransactionContext;
pub use errors::{ContractError, ContractResult};
pub use registry::{OperationFn, OperationRegistry};

use crate::ledger::LedgerState;
use crate::observability::{log_event, log_event_at, Event, Severity};
use crate::record::RangeTable;
use crate::store::IdentityPolicy;

/// The deployable contract: operation registry, range table, identity
/// policy. Construct once, invoke many times.
pub struct ClimateContract {
    registry: OperationRegistry,
    table: RangeTable,
    policy: IdentityPolicy,
}

impl ClimateContract {
    /// Contract with the standard operations and the default
    /// content-hash identity policy
    pub fn new() -> Self {
        Self::with_policy(IdentityPolicy::default())
    }

    /// Contract with an explicit identity policy
    pub fn with_policy(policy: IdentityPolicy) -> Self {
        Self {
            registry: OperationRegistry::standard(),
            table: RangeTable::new(),
            policy,
        }
    }

    /// Registered operation names, sorted
    pub fn operations(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    /// The identity policy in force
    pub fn policy(&self) -> IdentityPolicy {
        self.policy
    }

    /// Invokes the operation registered under `operation` against the
    /// host's ledger state.
    ///
    /// # Errors
    ///
    /// `UnknownOperation` for an unregistered name; otherwise whatever
    /// the operation itself rejects with. The ledger is untouched on
    /// any error raised before the operation's write.
    pub fn invoke(
        &self,
        ledger: &mut dyn LedgerState,
        operation: &str,
        args: &[String],
    ) -> ContractResult<Vec<u8>> {
        let handler = match self.registry.get(operation) {
            Some(handler) => handler,
            None => {
                let err = ContractError::UnknownOperation(operation.to_string());
                log_event_at(
                    Severity::Warn,
                    Event::ContractReject,
                    &[("operation", operation), ("code", err.code())],
                );
                return Err(err);
            }
        };

        let mut ctx = TransactionContext::new(ledger, &self.table, self.policy);
        let txn = ctx.txn_id().to_string();
        log_event(
            Event::ContractInvoke,
            &[
                ("operation", operation),
                ("txn", &txn),
                ("args", &args.len().to_string()),
            ],
        );

        match handler(&mut ctx, args) {
            Ok(payload) => {
                log_event(
                    Event::ContractComplete,
                    &[
                        ("operation", operation),
                        ("txn", &txn),
                        ("elapsed_ms", &ctx.elapsed_ms().to_string()),
                        ("bytes", &payload.len().to_string()),
                    ],
                );
                Ok(payload)
            }
            Err(err) => {
                log_event_at(
                    Severity::Warn,
                    Event::ContractReject,
                    &[
                        ("operation", operation),
                        ("txn", &txn),
                        ("code", err.code()),
                        ("error", &err.to_string()),
                    ],
                );
                Err(err)
            }
        }
    }
}

impl Default for ClimateContract {
    fn default() -> Self {
        Self::new()
    }
}
