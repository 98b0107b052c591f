use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use urbanhouse_core::config::settings::load_toml;
use urbanhouse_core::Config;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    #[serde(flatten)]
    pub site: Config,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            site: Config::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

impl ServerConfig {
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::env::var_os("URBANHOUSE_CONFIG").map(PathBuf::from) {
            Some(path) => Self::from_file(&path)?,
            None => ServerConfig::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Reads `path` through the core TOML loader, so a missing or unreadable
    /// file surfaces as the matching `CoreError`.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        load_toml(path).with_context(|| format!("failed to load config {}", path.display()))
    }

    /// Applies `URBANHOUSE_*` overrides looked up through `var`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(addr) = var("URBANHOUSE_BIND_ADDR") {
            self.bind_addr = addr
                .parse()
                .with_context(|| format!("invalid URBANHOUSE_BIND_ADDR: {addr}"))?;
        }
        if let Some(path) = var("URBANHOUSE_LISTINGS") {
            self.site.listings.path = PathBuf::from(path);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;
    use urbanhouse_core::CoreError;

    #[test]
    fn defaults_without_file() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.site.listings.path, PathBuf::from("data/properties.json"));
        assert_eq!(config.site.carousel.autoplay_secs, 5);
    }

    #[test]
    fn site_sections_are_flattened() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("server.toml");
        std::fs::write(
            &path,
            r#"
bind_addr = "0.0.0.0:3000"

[listings]
featured_limit = 3

[carousel.breakpoints]
large = 1280
"#,
        )
        .unwrap();

        let config = ServerConfig::from_file(&path).unwrap();

        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.site.listings.featured_limit, 3);
        assert_eq!(config.site.carousel.breakpoints.large, 1280);
        assert_eq!(config.site.carousel.breakpoints.medium, 640);
    }

    #[test]
    fn from_file_uses_core_loader() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("server.toml");
        std::fs::write(&path, "bind_addr = \"127.0.0.1:4000\"\n[carousel]\nautoplay_secs = 0\n")
            .unwrap();

        let config = ServerConfig::from_file(&path).unwrap();
        assert_eq!(config.bind_addr.port(), 4000);
        assert!(config.site.carousel.autoplay_period().is_zero());
    }

    #[test]
    fn from_file_maps_core_errors() {
        let tmp = TempDir::new().unwrap();
        let err = ServerConfig::from_file(&tmp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::NotFound(_))
        ));

        let path = tmp.path().join("broken.toml");
        std::fs::write(&path, "bind_addr = [[[").unwrap();
        let err = ServerConfig::from_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::ConfigParse(_))
        ));
    }

    #[test]
    fn env_overrides_win() {
        let env: HashMap<&str, &str> = [
            ("URBANHOUSE_BIND_ADDR", "0.0.0.0:9000"),
            ("URBANHOUSE_LISTINGS", "/srv/listings.json"),
        ]
        .into_iter()
        .collect();

        let mut config = ServerConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.site.listings.path, PathBuf::from("/srv/listings.json"));
    }

    #[test]
    fn bad_bind_addr_is_an_error() {
        let mut config = ServerConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "URBANHOUSE_BIND_ADDR").then(|| "not-an-addr".to_string())
        });
        assert!(result.is_err());
    }
}
