//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::views::loader::LoaderKind;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
    #[error("invalid BASE_URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: &'static str },
}

// =============================================================================
// BASE PATH
// =============================================================================

/// URL prefix the application is mounted under. Always starts and ends with
/// `/`; the default is the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Parse a `BASE_URL` value. Missing leading or trailing slashes are
    /// added; `""` means the site root.
    ///
    /// # Errors
    ///
    /// Rejects values carrying a scheme, query string, fragment, or
    /// whitespace.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason| Err(ConfigError::InvalidBaseUrl { value: raw.to_owned(), reason });
        let trimmed = raw.trim_matches('/');

        if trimmed.contains("://") {
            return invalid("must be a path, not an absolute URL");
        }
        if trimmed.contains(['?', '#']) {
            return invalid("must not contain a query or fragment");
        }
        if trimmed.chars().any(char::is_whitespace) {
            return invalid("must not contain whitespace");
        }
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        Ok(Self(format!("/{trimmed}/")))
    }

    #[must_use]
    pub fn root() -> Self {
        Self("/".to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Map a request path onto the route path space. `None` when the request
    /// lies outside the base.
    #[must_use]
    pub fn strip<'a>(&self, request_path: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return Some(request_path);
        }
        let prefix = self.0.trim_end_matches('/');
        let rest = request_path.strip_prefix(prefix)?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }

    /// Public URL of a route path.
    #[must_use]
    pub fn href(&self, route_path: &str) -> String {
        format!("{}{}", self.0, route_path.trim_start_matches('/'))
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

// =============================================================================
// APP CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub base: BasePath,
    pub views_dir: Option<PathBuf>,
    pub assets_dir: PathBuf,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `BASE_URL`: default `/`
    /// - `VIEWS_DIR`: load tool views from `<dir>/<Component>.html`
    /// - `ASSETS_DIR`: static files served under `/assets`, default `assets`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            Err(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let base = match std::env::var("BASE_URL") {
            Ok(raw) => BasePath::parse(&raw)?,
            Err(_) => BasePath::root(),
        };
        let views_dir = std::env::var("VIEWS_DIR").ok().filter(|v| !v.is_empty()).map(PathBuf::from);
        let assets_dir = std::env::var("ASSETS_DIR")
            .ok()
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);

        Ok(Self { bind_addr, port, base, views_dir, assets_dir })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Where deferred tool views come from.
    #[must_use]
    pub fn loader_kind(&self) -> LoaderKind {
        match &self.views_dir {
            Some(dir) => LoaderKind::Dir(dir.clone()),
            None => LoaderKind::Builtin,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            base: BasePath::root(),
            views_dir: None,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
