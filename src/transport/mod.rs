pub mod http;
pub mod mock;

pub use http::*;
pub use mock::*;

use crate::error::SwapiError;
use async_trait::async_trait;
use std::fmt::Debug;

/// Low-level HTTP transport abstraction.
///
/// Implementors provide `get_raw`, which issues a single GET and returns the
/// raw response body. Decoding into typed records is performed by
/// `SwapiService`.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// The only method that implementations must provide
    async fn get_raw(&self, url: &str) -> Result<String, SwapiError>;

    /// Clone this transport into a boxed trait object
    fn clone_box(&self) -> Box<dyn Transport>;
}

// Implement Clone for Box<dyn Transport>
impl Clone for Box<dyn Transport> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// Implement Transport for Box<dyn Transport>
#[async_trait]
impl Transport for Box<dyn Transport> {
    async fn get_raw(&self, url: &str) -> Result<String, SwapiError> {
        self.as_ref().get_raw(url).await
    }

    fn clone_box(&self) -> Box<dyn Transport> {
        self.as_ref().clone_box()
    }
}
