//! Keep a NextDNS profile's denylist and rewrites in sync with
//! hosts-format source lists.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use gatesync::{NextDnsClient, SyncRunner, SyncSettings};
//!
//! #[tokio::main]
//! async fn main() -> gatesync::Result<()> {
//!     let client = NextDnsClient::new("your-api-key", "your-profile-id");
//!
//!     let settings = SyncSettings {
//!         block_sources: vec![
//!             "https://raw.githubusercontent.com/StevenBlack/hosts/master/hosts".into(),
//!         ],
//!         ..SyncSettings::default()
//!     };
//!
//!     let summary = SyncRunner::new(client, settings).run().await?;
//!     println!("writes issued: {}", summary.total_writes());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/gatesync/1.0.0")]

// Re-export core types
pub use gatesync_core::*;

// Re-export client
pub use gatesync_client::{NextDnsClient, NextDnsClientBuilder};

// Re-export the engine
pub use gatesync_engine as engine;
pub use gatesync_engine::{Dispatcher, Pacing, SyncRunner, SyncSettings};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
