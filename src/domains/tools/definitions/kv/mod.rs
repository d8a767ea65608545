//! Workers KV tools.
//!
//! All KV endpoints live under an account. Each tool accepts an optional
//! `account_id` and falls back to the configured default.

pub mod delete;
pub mod keys;
pub mod namespaces;
pub mod read;
pub mod write;

pub use delete::{DeleteKvValueParams, DeleteKvValueTool};
pub use keys::{ListKvKeysParams, ListKvKeysTool};
pub use namespaces::{ListKvNamespacesParams, ListKvNamespacesTool};
pub use read::{ReadKvValueParams, ReadKvValueTool};
pub use write::{WriteKvValueParams, WriteKvValueTool};

/// Path of the namespaces collection of an account.
fn namespaces_path(account_id: &str) -> Vec<String> {
    ["accounts", account_id, "storage", "kv", "namespaces"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Path of a single value. The key is one segment, percent-encoded on the wire.
fn value_path(account_id: &str, namespace_id: &str, key: &str) -> Vec<String> {
    let mut path = namespaces_path(account_id);
    path.extend([namespace_id.to_string(), "values".to_string(), key.to_string()]);
    path
}
