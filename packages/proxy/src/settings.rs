//! Proxy settings: where the backend lives and which origins may call us.
//!
//! Sources, lowest to highest precedence:
//!
//! 1. Built-in defaults (`backend.url = "http://localhost:5000"`).
//! 2. `agromarfeed.toml` in the working directory (optional).
//! 3. `AGROMARFEED__*` environment variables, e.g. `AGROMARFEED__BACKEND__URL`.
//! 4. `NEXT_PUBLIC_BACKEND_URL`, then `BACKEND_URL`.
//!
//! A `.env` file is loaded first with `dotenvy`, so any of the variables above can
//! live there.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const SETTINGS_FILE: &str = "agromarfeed.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Backend {
    /// Origin of the backend, without a trailing slash.
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Cors {
    /// Origins allowed to call the proxy with credentials. Empty mirrors the
    /// request origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub backend: Backend,
    #[serde(default)]
    pub cors: Cors,
}

/// First non-blank value of `NEXT_PUBLIC_BACKEND_URL`, then `BACKEND_URL`.
fn backend_url_from_env() -> Option<String> {
    ["NEXT_PUBLIC_BACKEND_URL", "BACKEND_URL"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|url| url.trim().to_string())
        .find(|url| !url.is_empty())
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::build(Some(SETTINGS_FILE), backend_url_from_env())
    }

    /// Layer the sources. `file` is optional on disk; `backend_override` wins
    /// over everything.
    pub fn build(file: Option<&str>, backend_override: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("backend.url", DEFAULT_BACKEND_URL)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?;

        if let Some(file) = file {
            builder = builder.add_source(
                File::with_name(file)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let mut settings: Settings = builder
            .add_source(
                Environment::with_prefix("AGROMARFEED")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .set_override_option("backend.url", backend_override)?
            .build()?
            .try_deserialize()?;

        settings.backend.url = settings.backend.url.trim_end_matches('/').to_string();
        Ok(settings)
    }

    /// Settings pointing at `url`, nothing else configured.
    pub fn for_backend(url: impl Into<String>) -> Self {
        Self {
            backend: Backend {
                url: url.into().trim_end_matches('/').to_string(),
            },
            cors: Cors::default(),
        }
    }

    /// Absolute backend URL for `path` (which starts with `/`) and an optional raw
    /// query string.
    pub fn backend_url(&self, path: &str, query: Option<&str>) -> String {
        match query.filter(|q| !q.is_empty()) {
            Some(q) => format!("{}{}?{}", self.backend.url, path, q),
            None => format!("{}{}", self.backend.url, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let settings = Settings::build(None, None).unwrap();
        assert_eq!(settings.backend.url, DEFAULT_BACKEND_URL);
        assert!(settings.cors.allowed_origins.is_empty());
    }

    #[test]
    fn test_override_wins_and_is_trimmed() {
        let settings =
            Settings::build(None, Some("https://api.agromarfeed.example/".into())).unwrap();
        assert_eq!(settings.backend.url, "https://api.agromarfeed.example");
    }

    #[test]
    fn test_backend_url_joins_path_and_query() {
        let settings = Settings::for_backend("http://backend:5000/");
        assert_eq!(
            settings.backend_url("/api/products", Some("store_id=s1")),
            "http://backend:5000/api/products?store_id=s1"
        );
        assert_eq!(
            settings.backend_url("/api/products", Some("")),
            "http://backend:5000/api/products"
        );
        assert_eq!(
            settings.backend_url("/auth/me", None),
            "http://backend:5000/auth/me"
        );
    }
}
