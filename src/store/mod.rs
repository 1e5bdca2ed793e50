//! Record store subsystem
//!
//! The write/read core between the contract surface and the host ledger.
//!
//! # Design Principles
//!
//! - Identity assigned by exactly one policy, applied consistently
//! - Duplicates rejected, never overwritten
//! - Validation before any write; failed operations write nothing
//! - Single reads parse strictly; bulk scans degrade per entry
//! - Records are never deleted

mod errors;
mod identity;
mod scan;
mod store;

pub use errors::{StoreError, StoreResult};
pub use identity::{content_hash_id, random_id, IdentityPolicy};
pub use scan::{RecordScan, ScanEntry};
pub use store::{RecordDraft, RecordStore};
