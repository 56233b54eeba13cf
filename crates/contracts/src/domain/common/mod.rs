//! Common types and traits for all resources

pub mod envelope;
pub mod link;
pub mod payload;
pub mod record;
pub mod resource;

// Re-exports
pub use envelope::ApiEnvelope;
pub use link::SearchLink;
pub use record::{Record, RecordId};
pub use resource::Resource;
