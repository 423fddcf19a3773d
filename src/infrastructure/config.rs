//! Configuration loading with hierarchical merging.

use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;

use crate::domain::models::Config;

/// Default config file location, overridable with `--config`.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/drover/drover.yml";

/// Loads configuration with hierarchical merging.
///
/// Precedence (lowest to highest):
/// 1. Programmatic defaults
/// 2. YAML config file
/// 3. Environment variables (`DROVER_*`)
///
/// Command-line flags are applied on top by the caller.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("DROVER_").split("__"))
            .extract()
            .context("Failed to extract configuration")?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ConfigLoader::load("/nonexistent/drover.yml").unwrap();
        assert_eq!(config.scheduler.addr, "http://127.0.0.1:8081");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(
            file,
            "scheduler:\n  addr: https://scheduler.example.com:8443\n  username: ops"
        )
        .unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.scheduler.addr, "https://scheduler.example.com:8443");
        assert_eq!(config.scheduler.username.as_deref(), Some("ops"));
        // Untouched fields keep their defaults.
        assert_eq!(config.scheduler.request_timeout_secs, 30);
    }
}
