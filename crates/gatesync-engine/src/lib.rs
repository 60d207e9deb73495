//! Reconciliation and rate-limited dispatch engine for gatesync.
//!
//! The engine turns configured source lists into a desired rule set,
//! diffs it against the profile's remote state, and pushes the
//! difference through the NextDNS write API at a pace the service
//! tolerates. Re-running converges: a partially applied run is picked
//! up where it left off.

#![doc(html_root_url = "https://docs.rs/gatesync-engine/1.0.0")]

pub mod dispatch;
pub mod normalize;
pub mod reconcile;
pub mod run;
pub mod sources;

pub use dispatch::{Attempt, Dispatcher, Pacing};
pub use run::{SyncRunner, SyncSettings};
