// Cube Resource - Core Library
//
// Request models, resource configuration and the injected log sink shared
// by the Cube API client.

pub mod config;
pub mod log;
pub mod models;

pub use config::*;
pub use log::*;
pub use models::*;
