//! HTTP client for the NextDNS profile API.
//!
//! This crate provides the [`NextDnsClient`] used to read and write a
//! profile's denylist and rewrite entries.

#![doc(html_root_url = "https://docs.rs/gatesync-client/1.0.0")]

mod client;
pub mod api;

pub use client::{NextDnsClient, NextDnsClientBuilder};
pub use gatesync_core::{GateError, Result};
