//! Controller construction from CLI arguments.

use anyhow::{Context, Result};

use usersync_core::{SyncConfig, SyncController};
use usersync_http::HttpRecordService;

use crate::cli::ApiArgs;

pub type CliController = SyncController<HttpRecordService>;

/// Resolve the API base and build a controller around the HTTP service.
pub fn controller(args: &ApiArgs) -> Result<CliController> {
    let config = SyncConfig::new(Some(&args.origin), Some(&args.api_path))
        .context("Invalid API location")?;
    tracing::info!(api = %config.api, "using users API");

    let service =
        HttpRecordService::from_config(&config).context("Failed to set up HTTP client")?;
    Ok(SyncController::new(service))
}
