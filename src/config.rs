use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://courseonline.db".to_string());
        let host = parse_var("HOST", "0.0.0.0")?;
        let port = parse_var("PORT", "8080")?;

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    parse_value(name, env::var(name).ok(), default)
}

fn parse_value<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<T, ConfigError> {
    let value = value.unwrap_or_else(|| default.to_string());
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addr_joins_host_and_port() {
        let config = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
        };
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_parse_value_reports_bad_value() {
        let err = parse_value::<u16>("PORT", Some("eighty".to_string()), "8080").unwrap_err();
        assert_eq!(err.to_string(), "PORT has an invalid value: eighty");
    }

    #[test]
    fn test_parse_value_uses_given_value() {
        let port = parse_value::<u16>("PORT", Some("3000".to_string()), "8080").unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_parse_value_falls_back_to_default() {
        let port = parse_value::<u16>("PORT", None, "8080").unwrap();
        assert_eq!(port, 8080);

        let host = parse_value::<IpAddr>("HOST", None, "0.0.0.0").unwrap();
        assert_eq!(host.to_string(), "0.0.0.0");
    }
}
