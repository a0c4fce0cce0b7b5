// Cube API Client Library
//
// This crate provides HTTP client functionality for communicating
// with a Cube REST API instance, and the resource constructor that
// hosting frameworks use to build it from configuration.

mod client;
mod errors;
pub mod resource;
mod response;

pub use client::CubeClient;
pub use cube_resource_core::{
    ConfigError, CubeResourceConfig, CubeSettings, NullLog, Payload, RequestMethod, ResourceLog,
    StringSource, TracingLog,
};
pub use errors::CubeError;
pub use resource::{cube_resource, RESOURCE_DESCRIPTION};
pub use response::ApiResponse;
