//! Core types and errors for the gatesync NextDNS synchronizer.
//!
//! This crate provides the foundational types shared across the gatesync
//! workspace:
//!
//! - **Types**: Desired and remote rule representations, sync plans, and
//!   the wire shapes of NextDNS denylist/rewrite entries
//! - **Errors**: Comprehensive error handling with [`GateError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use gatesync_core::{Rule, SyncPlan, Result};
//!
//! fn report(plan: &SyncPlan) {
//!     println!("stale: {}", plan.stale.len());
//!     println!("missing: {}", plan.missing.len());
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/gatesync-core/1.0.0")]

mod error;
pub mod types;

pub use error::{GateError, Result};
pub use types::*;
