// config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_DATA_SOURCE: &str = "data";
const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REGION: &str = "porto_alegre";
const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
const DEFAULT_COUNTRY_HINT: &str = ", Brasil";
const DEFAULT_GEOCODER_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Directory or http(s) base URL holding regions.json and properties.json.
    pub data_source: String,
    /// Per-request timeout when the data source is remote.
    pub catalog_timeout: Duration,
    pub default_region: String,
    // Address lookup
    pub geocoder_url: Url,
    pub geocoder_country_hint: String,
    pub geocoder_timeout: Duration,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; unset variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &'static str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr = parse_var(
            "BIND_ADDR",
            &var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            |s| s.parse::<SocketAddr>(),
        )?;

        let max_workers = match var("MAX_WORKERS") {
            Some(v) => {
                let n = parse_var("MAX_WORKERS", &v, |s| s.parse::<usize>())?;
                if n == 0 {
                    return Err(ConfigError::Invalid {
                        var: "MAX_WORKERS",
                        value: v,
                        reason: "must be at least 1".to_string(),
                    });
                }
                n
            }
            None => DEFAULT_MAX_WORKERS,
        };

        let geocoder_url = parse_var(
            "GEOCODER_URL",
            &var("GEOCODER_URL").unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_string()),
            Url::parse,
        )?;

        let catalog_timeout = timeout_var(
            "CATALOG_TIMEOUT_SECS",
            var("CATALOG_TIMEOUT_SECS"),
            DEFAULT_CATALOG_TIMEOUT_SECS,
        )?;
        let geocoder_timeout = timeout_var(
            "GEOCODER_TIMEOUT_SECS",
            var("GEOCODER_TIMEOUT_SECS"),
            DEFAULT_GEOCODER_TIMEOUT_SECS,
        )?;

        let log_level = match var("LOG_LEVEL") {
            Some(v) => parse_var("LOG_LEVEL", &v, |s| s.parse::<LevelFilter>())?,
            None => LevelFilter::INFO,
        };

        Ok(Config {
            bind_addr,
            max_workers,
            data_source: var("DATA_SOURCE").unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string()),
            catalog_timeout,
            default_region: var("DEFAULT_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            geocoder_url,
            // The hint is appended verbatim, so an empty value is allowed.
            geocoder_country_hint: lookup("GEOCODER_COUNTRY_HINT")
                .unwrap_or_else(|| DEFAULT_COUNTRY_HINT.to_string()),
            geocoder_timeout,
            log_level,
        })
    }
}

fn timeout_var(
    var: &'static str,
    value: Option<String>,
    default_secs: u64,
) -> Result<Duration, ConfigError> {
    let secs = match value {
        Some(v) => parse_var(var, &v, |s| s.parse::<u64>())?,
        None => default_secs,
    };
    if secs == 0 {
        return Err(ConfigError::Invalid {
            var,
            value: secs.to_string(),
            reason: "must be at least 1 second".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

fn parse_var<T, E, P>(var: &'static str, value: &str, parse: P) -> Result<T, ConfigError>
where
    P: FnOnce(&str) -> Result<T, E>,
    E: std::fmt::Display,
{
    parse(value.trim()).map_err(|e| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
