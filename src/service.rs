//! Fetching SWAPI resources into typed records.
//!
//! `SwapiService` wraps a [`Transport`] and exposes one async method per
//! resource kind. Each call is a stateless one-shot: build the URL, GET it,
//! decode the body, hand back `Some(record)` or `None`. Failures are logged
//! and collapsed into `None` so the caller only ever sees presence or absence.

use crate::error::SwapiError;
use crate::models::{Film, Person};
use crate::transport::Transport;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

const BASE_URL: &str = "https://swapi.co/api/";
const PERSON_PATH: &str = "people";

/// Client for the Star Wars API.
///
/// Holds no state beyond the transport and the base address, so it is cheap
/// to clone and concurrent calls never interfere with one another.
#[derive(Debug, Clone)]
pub struct SwapiService<T: Transport> {
    transport: T,
    base_url: String,
}

impl<T: Transport> SwapiService<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the base address, e.g. to point at a test server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get a reference to the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the person with the given id.
    ///
    /// Builds `{base}/people/{id}`, GETs it, and decodes the body. Returns
    /// `None` if the base address does not parse (no request is made in that
    /// case), if the request fails, or if the body does not match the
    /// [`Person`] shape. Completes exactly once per call.
    #[instrument(skip(self))]
    pub async fn fetch_person(&self, id: u32) -> Option<Person> {
        let url = match self.person_url(id) {
            Ok(url) => url,
            Err(e) => {
                error!(error = %e, "Could not build person URL");
                return None;
            }
        };

        info!(url = %url, "Fetching person");
        self.fetch_resource(url.as_str()).await
    }

    /// Fetch the film at the given resource URL.
    ///
    /// The URL is used as supplied, normally one of the entries in a
    /// previously fetched [`Person::films`] list. Failure semantics mirror
    /// [`Self::fetch_person`].
    #[instrument(skip(self))]
    pub async fn fetch_film(&self, url: &str) -> Option<Film> {
        info!(url = %url, "Fetching film");
        self.fetch_resource(url).await
    }

    fn person_url(&self, id: u32) -> Result<Url, SwapiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| SwapiError::InvalidBaseUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SwapiError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(&[PERSON_PATH, &id.to_string()]);
        Ok(url)
    }

    /// GET `url` and decode the body, collapsing any failure into `None`.
    async fn fetch_resource<R: DeserializeOwned>(&self, url: &str) -> Option<R> {
        let body = match self.transport.get_raw(url).await {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, url = %url, "Request failed");
                return None;
            }
        };

        debug!(body_len = body.len(), "Decoding response body");
        match serde_json::from_str::<R>(&body) {
            Ok(resource) => Some(resource),
            Err(e) => {
                error!(error = %SwapiError::Decode(e), url = %url, "Failed to decode response body");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;

    #[test]
    fn person_url_joins_base_path_and_id() {
        let (transport, _handle) = MockTransport::new();
        let service = SwapiService::new(transport);

        let url = service.person_url(1).unwrap();
        assert_eq!(url.as_str(), "https://swapi.co/api/people/1");
    }

    #[test]
    fn person_url_handles_base_without_trailing_slash() {
        let (transport, _handle) = MockTransport::new();
        let service = SwapiService::new(transport).with_base_url("https://example.test/api");

        let url = service.person_url(42).unwrap();
        assert_eq!(url.as_str(), "https://example.test/api/people/42");
    }

    #[test]
    fn person_url_rejects_malformed_base() {
        let (transport, _handle) = MockTransport::new();
        let service = SwapiService::new(transport).with_base_url("not a url");

        assert!(matches!(
            service.person_url(1),
            Err(SwapiError::InvalidBaseUrl(_))
        ));
    }
}
