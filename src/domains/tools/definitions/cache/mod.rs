//! Cache tools.

pub mod purge;

pub use purge::{PurgeCacheParams, PurgeCacheTool};
