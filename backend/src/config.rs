use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::path::PathBuf;

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
pub const DEFAULT_CONTACT_RATE_PER_MINUTE: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_addr: IpAddr,
    pub static_dir: PathBuf,
    /// When set, CORS only admits this origin.
    pub frontend_origin: Option<HeaderValue>,
    pub contact_rate_per_minute: NonZeroU32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            frontend_origin: None,
            contact_rate_per_minute: NonZeroU32::MIN.saturating_add(DEFAULT_CONTACT_RATE_PER_MINUTE - 1),
        }
    }
}

fn invalid(name: &'static str, expected: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        name,
        expected,
        value: value.to_string(),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(v) = get("PORT") {
            config.port = v
                .trim()
                .parse()
                .map_err(|_| invalid("PORT", "a port number", &v))?;
        }
        if let Some(v) = get("BIND_ADDR") {
            config.bind_addr = v
                .trim()
                .parse()
                .map_err(|_| invalid("BIND_ADDR", "an IP address", &v))?;
        }
        if let Some(v) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(v);
        }
        if let Some(v) = get("FRONTEND_URL") {
            let origin = v.trim().trim_end_matches('/');
            config.frontend_origin = Some(
                HeaderValue::from_str(origin)
                    .map_err(|_| invalid("FRONTEND_URL", "a valid origin", &v))?,
            );
        }
        if let Some(v) = get("CONTACT_RATE_PER_MINUTE") {
            config.contact_rate_per_minute = v
                .trim()
                .parse()
                .map_err(|_| invalid("CONTACT_RATE_PER_MINUTE", "a positive integer", &v))?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
        assert_eq!(config.static_dir, PathBuf::from("../frontend/dist"));
        assert_eq!(config.contact_rate_per_minute.get(), 5);
        assert!(config.frontend_origin.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "0.0.0.0"),
            ("STATIC_DIR", "/srv/site"),
            ("FRONTEND_URL", "https://mobylabs.com/"),
            ("CONTACT_RATE_PER_MINUTE", "12"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
        assert_eq!(
            config.frontend_origin,
            Some(HeaderValue::from_static("https://mobylabs.com"))
        );
        assert_eq!(config.contact_rate_per_minute.get(), 12);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("PORT", "  "), ("FRONTEND_URL", "")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.frontend_origin.is_none());
    }

    #[test]
    fn malformed_numbers_are_errors() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err, invalid("PORT", "a port number", "eighty"));

        let err = Config::from_lookup(lookup(&[("CONTACT_RATE_PER_MINUTE", "0")])).unwrap_err();
        assert!(err.to_string().starts_with("CONTACT_RATE_PER_MINUTE must be a positive integer"));

        assert!(Config::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).is_err());
    }
}
