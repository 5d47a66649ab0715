//! State behind the itinerary dashboard

use tracing::warn;

use crate::client::{DELETE_FAILED, LOAD_FAILED};
use crate::session::TokenStore;
use crate::{ApiClient, Itinerary, Navigation, Transport};

/// Itinerary list plus the single notice and redirect the screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub itineraries: Vec<Itinerary>,
    pub loading: bool,
    pub error: Option<String>,
    pub redirect: Option<Navigation>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            itineraries: Vec::new(),
            loading: true,
            error: None,
            redirect: None,
        }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the list; failures leave the previous list in place
    pub async fn refresh<T: Transport, S: TokenStore>(&mut self, client: &ApiClient<T, S>) {
        self.loading = true;

        match client.itineraries().await {
            Ok(itineraries) => {
                self.itineraries = itineraries;
                self.error = None;
                self.redirect = None;
            }
            Err(err) => {
                warn!("Loading itineraries failed: {}", err);
                self.error = Some(err.notice(LOAD_FAILED));
                self.redirect = err.redirect();
            }
        }

        self.loading = false;
    }

    /// Delete on the server, then locally. Returns whether it went through.
    pub async fn delete<T: Transport, S: TokenStore>(
        &mut self,
        client: &ApiClient<T, S>,
        id: &str,
    ) -> bool {
        match client.delete_itinerary(id).await {
            Ok(()) => {
                self.itineraries.retain(|itinerary| itinerary.id != id);
                true
            }
            Err(err) => {
                warn!("Deleting itinerary {} failed: {}", id, err);
                self.error = Some(err.notice(DELETE_FAILED));
                self.redirect = err.redirect();
                false
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Itinerary> {
        self.itineraries.iter().find(|itinerary| itinerary.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }

    /// Take the notice so it is shown once
    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }
}
