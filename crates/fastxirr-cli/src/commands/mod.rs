//! CLI command implementations.

pub mod bracket;
pub mod npv;
pub mod solve;

// Re-export submodules for convenience
pub use bracket::BracketArgs;
pub use npv::NpvArgs;
pub use solve::SolveArgs;

use std::path::Path;

use fastxirr::XirrConfig;

use crate::error::CliResult;

/// Loads the solver configuration file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> CliResult<XirrConfig> {
    let Some(path) = path else {
        return Ok(XirrConfig::default());
    };
    let config = XirrConfig::from_file(path)?;
    tracing::debug!(path = %path.display(), "loaded solver configuration");
    Ok(config)
}
