//! Configuration loading: defaults, then an optional TOML file, then environment.

use super::merge_policy;
use super::NarrowConfig;
use crate::error::ApiError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix; nested keys are separated by `__`,
/// e.g. `NARROWCACHE__CACHE__CASE_SENSITIVE=false`.
pub const ENV_PREFIX: &str = "NARROWCACHE";

/// Loads [`NarrowConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults and environment overrides only.
    pub fn load() -> Result<NarrowConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        Self::finish(builder)
    }

    /// Load from defaults, the TOML file at `path`, then environment overrides.
    pub fn load_from_file(path: &Path) -> Result<NarrowConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        debug!(config_path = %path.display(), "Loading configuration file");

        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        Self::finish(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<NarrowConfig, ApiError> {
        let config: NarrowConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(messages.join("; "))
        })?;

        Ok(config)
    }
}
