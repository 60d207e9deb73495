//! API endpoint modules.

mod denylist;
mod rewrites;

pub use denylist::DenylistApi;
pub use rewrites::RewritesApi;
