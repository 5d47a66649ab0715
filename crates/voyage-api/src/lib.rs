//! Voyage API contract
//!
//! Typed models for the auth and itinerary endpoints, a [`Transport`] seam
//! for whatever performs HTTP, bearer token storage, and the dashboard state
//! built on top.
//!
//! A `401` from any endpoint clears the stored token and surfaces as
//! [`ApiError::Unauthorized`], which redirects to the login screen.

pub mod client;
pub mod dashboard;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod session;
pub mod transport;

pub use client::{ApiClient, ClientConfig, Navigation, DEFAULT_BASE_URL};
pub use dashboard::Dashboard;
pub use endpoint::{ApiRequest, ApiResponse, Endpoint, Method};
pub use error::ApiError;
pub use models::{AuthToken, Credentials, Destination, Itinerary, SignupForm, SignupRequest};
pub use session::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use transport::Transport;
