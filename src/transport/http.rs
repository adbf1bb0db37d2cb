use crate::error::SwapiError;
use crate::transport::Transport;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Transport backed by a shared `reqwest::Client`.
///
/// One plain GET per call: no custom headers, no request body, no
/// authentication. Timeouts are whatever reqwest defaults to.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self))]
    async fn get_raw(&self, url: &str) -> Result<String, SwapiError> {
        debug!(url = %url, "Sending GET request");
        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = %e, "HTTP request failed");
            SwapiError::Transport(e.to_string())
        })?;

        let status = response.status();
        debug!(status = %status, "Received response");

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Server returned error status");
            return Err(SwapiError::Transport(format!("{}: {}", status, error_text)));
        }

        response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            SwapiError::Transport(e.to_string())
        })
    }

    fn clone_box(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }
}
