mod denylist;
mod rewrites;
mod rules;
mod summary;

pub use denylist::*;
pub use rewrites::*;
pub use rules::*;
pub use summary::*;
