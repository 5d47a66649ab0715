//! API endpoints and the transport-neutral request/response shapes

use std::fmt;

use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        })
    }
}

/// Every call the front-end makes against the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Login,
    Signup,
    ListItineraries,
    DeleteItinerary(&'a str),
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Login | Endpoint::Signup => Method::Post,
            Endpoint::ListItineraries => Method::Get,
            Endpoint::DeleteItinerary(_) => Method::Delete,
        }
    }

    /// Path relative to the API base URL; ids are percent-encoded
    ///
    /// ```
    /// use voyage_api::Endpoint;
    ///
    /// assert_eq!(Endpoint::Login.path(), "/auth/login");
    /// assert_eq!(Endpoint::DeleteItinerary("a/b").path(), "/itineraries/a%2Fb");
    /// ```
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/auth/login".to_string(),
            Endpoint::Signup => "/auth/signup".to_string(),
            Endpoint::ListItineraries => "/itineraries".to_string(),
            Endpoint::DeleteItinerary(id) => format!("/itineraries/{}", urlencoding::encode(id)),
        }
    }

    /// Whether the bearer token is attached
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::Login | Endpoint::Signup)
    }

    /// Full URL under `base_url`, tolerating a trailing slash on the base
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// A request ready to hand to a [`Transport`](crate::Transport)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<JsonValue>,
}

impl ApiRequest {
    /// Value of the `Authorization` header, when a token is attached
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {}", token))
    }
}

/// Raw response as received by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
