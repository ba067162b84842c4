//! Configuración de variables de entorno

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use super::database::DatabaseConfig;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub http_address: SocketAddr,
    pub http_timeout: Duration,
    pub database_url: String,
    pub database_max_connections: u32,
    pub log_level: tracing::Level,
    /// URL base del servicio de información; `None` solo con el mock activo
    pub car_info_url: Option<String>,
    pub car_info_mock: bool,
    pub car_info_concurrency: usize,
    pub cors_origins: Vec<String>,
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración desde cualquier fuente clave → valor
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_address = get("HTTP_ADDRESS")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("HTTP_ADDRESS must be a socket address")?;

        let http_timeout = Duration::from_secs(
            parse_or(get("HTTP_TIMEOUT_SECS"), 30).context("HTTP_TIMEOUT_SECS must be a number")?,
        );

        let database_url = get("DATABASE_URL").ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;
        let database_max_connections = parse_or(get("DATABASE_MAX_CONNECTIONS"), 10)
            .context("DATABASE_MAX_CONNECTIONS must be a number")?;

        let log_level = get("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .parse::<tracing::Level>()
            .map_err(|_| anyhow!("LOG_LEVEL must be one of trace, debug, info, warn, error"))?;

        let car_info_mock = parse_or(get("CAR_INFO_MOCK"), false)
            .context("CAR_INFO_MOCK must be true or false")?;
        let car_info_url = get("API_CAR_INFO");
        if car_info_url.is_none() && !car_info_mock {
            return Err(anyhow!("API_CAR_INFO must be set unless CAR_INFO_MOCK=true"));
        }

        let car_info_concurrency = parse_or(get("CAR_INFO_CONCURRENCY"), 4usize)
            .context("CAR_INFO_CONCURRENCY must be a number")?
            .max(1);

        let cors_origins = get("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            http_address,
            http_timeout,
            database_url,
            database_max_connections,
            log_level,
            car_info_url,
            car_info_mock,
            car_info_concurrency,
            cors_origins,
        })
    }

    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone(), self.database_max_connections)
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> Result<T, T::Err> {
    match value {
        Some(v) => v.trim().parse(),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<EnvironmentConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[
            ("DATABASE_URL", "postgres://localhost/cars"),
            ("API_CAR_INFO", "http://info.local/"),
        ])
        .unwrap();

        assert_eq!(cfg.http_address.port(), 8080);
        assert_eq!(cfg.http_timeout, Duration::from_secs(30));
        assert_eq!(cfg.database_max_connections, 10);
        assert_eq!(cfg.log_level, tracing::Level::INFO);
        assert_eq!(cfg.car_info_url.as_deref(), Some("http://info.local/"));
        assert!(!cfg.car_info_mock);
        assert_eq!(cfg.car_info_concurrency, 4);
        assert!(cfg.cors_origins.is_empty());
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("HTTP_ADDRESS", "127.0.0.1:3000"),
            ("HTTP_TIMEOUT_SECS", "5"),
            ("DATABASE_URL", "postgres://localhost/cars"),
            ("LOG_LEVEL", "debug"),
            ("CAR_INFO_MOCK", "true"),
            ("CAR_INFO_CONCURRENCY", "0"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ])
        .unwrap();

        assert_eq!(cfg.http_address.to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.http_timeout, Duration::from_secs(5));
        assert_eq!(cfg.log_level, tracing::Level::DEBUG);
        assert!(cfg.car_info_mock);
        assert_eq!(cfg.car_info_url, None);
        assert_eq!(cfg.car_info_concurrency, 1);
        assert_eq!(cfg.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_missing_required_values() {
        assert!(config(&[("API_CAR_INFO", "http://info.local")]).is_err());
        assert!(config(&[("DATABASE_URL", "postgres://localhost/cars")]).is_err());
        assert!(config(&[
            ("DATABASE_URL", "postgres://localhost/cars"),
            ("API_CAR_INFO", "http://info.local"),
            ("LOG_LEVEL", "loud"),
        ])
        .is_err());
    }
}
