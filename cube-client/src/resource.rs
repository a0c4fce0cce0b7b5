// Resource constructor for hosting frameworks
//
// A host adapts its own configuration object to `CubeResourceConfig` and
// passes its logger; the client it gets back is a plain value it owns.

use crate::client::CubeClient;
use crate::errors::CubeError;
use cube_resource_core::{CubeResourceConfig, CubeSettings, ResourceLog};
use std::sync::Arc;

pub const RESOURCE_DESCRIPTION: &str = "Resource to interact with your Cube Cloud instance";

/// Build a client from resource configuration
pub fn cube_resource(
    config: &CubeResourceConfig,
    log: Arc<dyn ResourceLog>,
) -> Result<CubeClient, CubeError> {
    let settings = config.resolve()?;
    from_settings(settings, log)
}

/// Build a client from already-resolved settings
pub fn from_settings(
    settings: CubeSettings,
    log: Arc<dyn ResourceLog>,
) -> Result<CubeClient, CubeError> {
    log.debug(&format!("Creating Cube resource for {}", settings.instance_url));
    CubeClient::new(settings.instance_url, settings.api_key, log)
}
