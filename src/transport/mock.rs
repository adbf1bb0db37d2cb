use crate::error::SwapiError;
use crate::transport::Transport;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A canned outcome for one `get_raw` call on the mock transport.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Deliver this string as the response body
    Success(String),
    /// Fail the call with a transport error carrying this message
    Failure(String),
}

/// Handle for controlling a `MockTransport` and inspecting the URLs it saw.
#[derive(Debug, Default)]
pub struct MockHandle {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<String>>,
}

impl MockHandle {
    /// Queue the next response the transport will deliver
    pub fn add_response(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// URLs requested so far, in call order
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of GET calls made against the transport
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Mock transport for testing that replays queued responses
#[derive(Debug, Clone)]
pub struct MockTransport {
    handle: Arc<MockHandle>,
}

impl MockTransport {
    /// Create a mock transport and the handle that controls it
    pub fn new() -> (Self, Arc<MockHandle>) {
        let handle = Arc::new(MockHandle::default());
        (
            Self {
                handle: handle.clone(),
            },
            handle,
        )
    }

    /// Create a mock transport with predefined responses
    pub fn with_responses(responses: Vec<MockResponse>) -> (Self, Arc<MockHandle>) {
        let (transport, handle) = Self::new();
        for response in responses {
            handle.add_response(response);
        }
        (transport, handle)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_raw(&self, url: &str) -> Result<String, SwapiError> {
        self.handle.requests.lock().unwrap().push(url.to_string());

        let next = self.handle.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Success(body)) => Ok(body),
            Some(MockResponse::Failure(message)) => Err(SwapiError::Transport(message)),
            None => Err(SwapiError::Transport(
                "mock transport has no queued response".to_string(),
            )),
        }
    }

    fn clone_box(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }
}
