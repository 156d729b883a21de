//! Process configuration, read once at startup from the environment.
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `PORT` | yes | |
//! | `URI` | yes | |
//! | `HOST` | no | `0.0.0.0` |
//! | `STATIC_DIR` | no | `public` |

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),

    #[error("URI scheme is not supported: {0}")]
    UnsupportedStore(String),
}

/// Which product store the process talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// `memory://` — process-local, nothing survives a restart.
    Memory,
    /// `postgres://…` or `postgresql://…`.
    Postgres { url: String },
}

impl StoreBackend {
    pub fn parse(uri: &str) -> Result<Self, ConfigError> {
        let scheme = uri.split_once("://").map(|(s, _)| s).unwrap_or_default();
        match scheme {
            "memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres {
                url: uri.to_string(),
            }),
            _ => Err(ConfigError::UnsupportedStore(uri.to_string())),
        }
    }

    /// Human-readable target for logs; never includes credentials.
    pub fn describe(&self) -> String {
        match self {
            Self::Memory => "memory://".to_string(),
            Self::Postgres { url } => {
                let (scheme, rest) = url.split_once("://").unwrap_or(("postgres", url.as_str()));
                let host = rest.rsplit_once('@').map(|(_, h)| h).unwrap_or(rest);
                format!("{scheme}://{host}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub static_dir: PathBuf,
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v: &String| !v.is_empty());

        let uri = get("URI").ok_or(ConfigError::Missing("URI"))?;
        let port = get("PORT").ok_or(ConfigError::Missing("PORT"))?;
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            store: StoreBackend::parse(&uri)?,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
        })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = CatalogConfig::from_lookup(lookup(&[("URI", "memory://"), ("PORT", "3000")]))
            .unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.store, StoreBackend::Memory);
        assert_eq!(cfg.static_dir, PathBuf::from("public"));
        assert_eq!(cfg.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn uri_and_port_are_required() {
        assert_eq!(
            CatalogConfig::from_lookup(lookup(&[("PORT", "3000")])),
            Err(ConfigError::Missing("URI"))
        );
        assert_eq!(
            CatalogConfig::from_lookup(lookup(&[("URI", "memory://"), ("PORT", "")])),
            Err(ConfigError::Missing("PORT"))
        );
        assert_eq!(
            ConfigError::Missing("URI").to_string(),
            "URI must be set"
        );
    }

    #[test]
    fn port_must_fit_u16() {
        assert_eq!(
            CatalogConfig::from_lookup(lookup(&[("URI", "memory://"), ("PORT", "70000")])),
            Err(ConfigError::InvalidPort("70000".to_string()))
        );
    }

    #[test]
    fn overrides_are_honoured() {
        let cfg = CatalogConfig::from_lookup(lookup(&[
            ("URI", "postgresql://app:secret@db:5432/catalog"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("STATIC_DIR", "/srv/www"),
        ]))
        .unwrap();
        assert_eq!(
            cfg.store,
            StoreBackend::Postgres {
                url: "postgresql://app:secret@db:5432/catalog".to_string()
            }
        );
        assert_eq!(cfg.socket_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.static_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn unknown_schemes_are_rejected() {
        assert!(matches!(
            StoreBackend::parse("mongodb://localhost/catalog"),
            Err(ConfigError::UnsupportedStore(_))
        ));
        assert!(matches!(
            StoreBackend::parse("catalog"),
            Err(ConfigError::UnsupportedStore(_))
        ));
    }

    #[test]
    fn describe_strips_credentials() {
        let backend = StoreBackend::parse("postgres://app:secret@db:5432/catalog").unwrap();
        assert_eq!(backend.describe(), "postgres://db:5432/catalog");
        assert_eq!(StoreBackend::Memory.describe(), "memory://");
    }
}
