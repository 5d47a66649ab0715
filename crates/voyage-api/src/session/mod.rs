//! Bearer token storage backends

use anyhow::Result;
use async_trait::async_trait;

pub mod file;
pub mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

/// Persisted storage for the session's bearer token
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Get the stored token, if any
    async fn token(&self) -> Result<Option<String>>;

    /// Replace the stored token
    async fn set_token(&self, token: &str) -> Result<()>;

    /// Forget the stored token
    async fn clear(&self) -> Result<()>;

    /// Get storage backend name
    fn name(&self) -> &'static str;
}
