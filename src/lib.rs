pub mod error;
pub mod models;
pub mod service;
pub mod transport;

// Convenient re-exports
pub use models::{Film, Person};
pub use service::SwapiService;
