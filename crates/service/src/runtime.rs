//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so binaries can prepare storage through
//! `service::runtime` without depending directly on `common`.

/// Create the parent directory of a file-backed SQLite database if needed.
pub async fn ensure_storage(database_url: &str) -> anyhow::Result<()> {
    common::env::ensure_database_dir(database_url).await
}
