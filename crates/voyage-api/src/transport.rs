//! Seam between the client and whatever performs HTTP

use anyhow::Result;
use async_trait::async_trait;

use crate::{ApiRequest, ApiResponse};

/// Sends one request and returns the raw response
///
/// Implementations report only transport failures as errors; any HTTP
/// status, including 4xx and 5xx, comes back as an [`ApiResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}
