//! Storage layer for atomic file operations.

mod atomic_toml;

pub use atomic_toml::{AtomicTomlError, AtomicTomlFile};

use transit_core::error::{Result, TransitError};

/// Runs a synchronous store operation on tokio's blocking pool.
///
/// File reads, fsync, rename and the exclusive lock all block, so async
/// repositories hand them off here instead of stalling the runtime.
pub(crate) async fn run_blocking<R, F>(task: F) -> Result<R>
where
    F: FnOnce() -> Result<R> + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| TransitError::internal(format!("Failed to join task: {}", e)))?
}
