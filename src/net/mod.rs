//! Network layer: wire types and the REST API client.

pub mod api;
pub mod types;
