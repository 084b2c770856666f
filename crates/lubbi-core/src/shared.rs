//! Gateway configuration shared by the core and the add-ons.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Env var naming the TOML config file.
pub const ENV_CONFIG_PATH: &str = "LUBBI_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config/gateway.toml";

/// Global application configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Display name used in logs and `/api/health`.
    pub app_name: String,
    /// Interface to bind. The robot posts readings over the LAN, so the default is all interfaces.
    pub host: String,
    /// HTTP port for the gateway.
    pub port: u16,

    /// If true, unmatched routes are served from `site_dir`. (Config alias: `frontend_enabled`)
    /// No builder default here: a default key plus the alias would deserialize as a duplicate field.
    #[serde(default, alias = "frontend_enabled")]
    pub site_enabled: bool,
    /// Directory holding `index.html` and the site assets.
    #[serde(default = "default_site_dir")]
    pub site_dir: String,
}

fn default_site_dir() -> String {
    ".".to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: "LUBBI Gateway".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3011,
            site_enabled: false,
            site_dir: default_site_dir(),
        }
    }
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: `LUBBI__*` env vars > file named by
    /// `LUBBI_CONFIG` (or `config/gateway.toml`) > defaults.
    pub fn load() -> crate::Result<Self> {
        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Same as [`CoreConfig::load`] with an explicit file path. A missing file is not an error.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("LUBBI").separator("__"))
            .build()?;

        Ok(built.try_deserialize()?)
    }

    /// Socket address string for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn site_root(&self) -> PathBuf {
        PathBuf::from(&self.site_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.port, 3011);
        assert_eq!(config.host, "0.0.0.0");
        assert!(!config.site_enabled);
    }

    #[test]
    fn test_unparsable_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.toml");
        std::fs::write(&path, "port = \n").unwrap();

        let err = CoreConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_file_overrides_defaults_and_accepts_frontend_alias() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "app_name = \"Demo\"\nport = 4020\nfrontend_enabled = true\nsite_dir = \"public\""
        )
        .unwrap();

        let config = CoreConfig::load_from(&path).unwrap();
        assert_eq!(config.app_name, "Demo");
        assert_eq!(config.port, 4020);
        assert!(config.site_enabled);
        assert_eq!(config.site_root(), PathBuf::from("public"));
        assert_eq!(config.bind_addr(), "0.0.0.0:4020");
    }
}
