//! Core type definitions using newtype patterns for type safety.

mod endpoint;
mod run_id;

pub use endpoint::{Endpoint, EndpointList};
pub use run_id::RunId;
