//! Typed client over a [`Transport`] and a [`TokenStore`]

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::models::ErrorBody;
use crate::session::TokenStore;
use crate::{
    ApiError, ApiRequest, ApiResponse, AuthToken, Credentials, Endpoint, Itinerary, SignupForm,
    Transport,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

pub const LOGIN_FAILED: &str = "An error occurred while logging in";
pub const SIGNUP_FAILED: &str = "An error occurred while signing up";
pub const LOAD_FAILED: &str = "Failed to load itineraries";
pub const DELETE_FAILED: &str = "Failed to delete the itinerary";

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Screen the app moves to after an auth action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Navigation {
    Dashboard,
    Login,
}

impl Navigation {
    pub fn path(&self) -> &'static str {
        match self {
            Navigation::Dashboard => "/dashboard",
            Navigation::Login => "/login",
        }
    }
}

pub struct ApiClient<T, S> {
    transport: T,
    store: S,
    config: ClientConfig,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(transport: T, store: S) -> Self {
        Self::with_config(transport, store, ClientConfig::default())
    }

    pub fn with_config(transport: T, store: S, config: ClientConfig) -> Self {
        Self {
            transport,
            store,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Log in and keep the returned token
    pub async fn login(&self, credentials: &Credentials) -> Result<Navigation> {
        let body = serde_json::to_value(credentials)?;
        let response = self.execute(Endpoint::Login, Some(body)).await?;
        let auth: AuthToken = decode(&response)?;

        self.store.set_token(&auth.token).await.map_err(ApiError::Storage)?;
        debug!("Logged in as {}", credentials.email);

        Ok(Navigation::Dashboard)
    }

    /// Create an account; the confirmation is checked before anything is sent
    pub async fn signup(&self, form: &SignupForm) -> Result<Navigation> {
        let request = form.to_request()?;
        let body = serde_json::to_value(&request)?;
        let response = self.execute(Endpoint::Signup, Some(body)).await?;
        let auth: AuthToken = decode(&response)?;

        self.store.set_token(&auth.token).await.map_err(ApiError::Storage)?;
        debug!("Signed up {}", request.email);

        Ok(Navigation::Login)
    }

    pub async fn itineraries(&self) -> Result<Vec<Itinerary>> {
        let response = self.execute(Endpoint::ListItineraries, None).await?;
        decode(&response)
    }

    pub async fn delete_itinerary(&self, id: &str) -> Result<()> {
        self.execute(Endpoint::DeleteItinerary(id), None).await?;
        debug!("Deleted itinerary {}", id);
        Ok(())
    }

    pub async fn logout(&self) -> Result<Navigation> {
        self.store.clear().await.map_err(ApiError::Storage)?;
        Ok(Navigation::Login)
    }

    async fn execute(&self, endpoint: Endpoint<'_>, body: Option<JsonValue>) -> Result<ApiResponse> {
        let bearer = if endpoint.requires_auth() {
            self.store.token().await.map_err(ApiError::Storage)?
        } else {
            None
        };

        let request = ApiRequest {
            method: endpoint.method(),
            url: endpoint.url(&self.config.base_url),
            bearer,
            body,
        };
        debug!("{} {}", request.method, request.url);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(ApiError::Transport)?;

        if response.is_success() {
            return Ok(response);
        }

        // A 401 on login or signup means bad credentials, not an expired session
        if response.status == 401 && endpoint.requires_auth() {
            warn!("{} answered 401, clearing session", endpoint.path());
            self.store.clear().await.map_err(ApiError::Storage)?;
            return Err(ApiError::Unauthorized);
        }

        // Non-JSON error bodies still count as a rejection, just without a message
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.message);
        warn!("{} rejected with status {}", endpoint.path(), response.status);

        Err(ApiError::Rejected {
            status: response.status,
            message,
        })
    }
}

fn decode<D: DeserializeOwned>(response: &ApiResponse) -> Result<D> {
    Ok(serde_json::from_str(&response.body)?)
}
