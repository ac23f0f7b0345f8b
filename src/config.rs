use std::{env, fmt::Display, str::FromStr, time::Duration};

use axum::http::HeaderValue;
use thiserror::Error;
use tracing::{info, warn};

const API_KEY_VARS: [&str; 2] = ["NEXT_PUBLIC_GOOGLE_MAPS_API_KEY", "GOOGLE_MAPS_API_KEY"];

#[derive(Debug, Error)]
#[error("Invalid {key} value '{value}': {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Places API key. Searches fail with a server error while unset.
    pub api_key: Option<String>,
    pub port: u16,
    /// Allowed CORS origin, `*` for any.
    pub frontend_origin: HeaderValue,
    pub maps_host: String,
    pub provider_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = API_KEY_VARS
            .into_iter()
            .find_map(|key| lookup(key).filter(|v| !v.is_empty()));

        let origin: String = try_load(&lookup, "FRONTEND_ORIGIN", "http://localhost:3000")?;
        let frontend_origin = HeaderValue::from_str(&origin).map_err(|e| ConfigError {
            key: "FRONTEND_ORIGIN",
            value: origin.clone(),
            reason: e.to_string(),
        })?;

        let maps_host: String =
            try_load(&lookup, "GOOGLE_MAPS_HOST", "https://maps.googleapis.com")?;
        let timeout_secs: u64 = try_load(&lookup, "PROVIDER_TIMEOUT_SECS", "10")?;

        Ok(Self {
            api_key,
            port: try_load(&lookup, "PORT", "8000")?,
            frontend_origin,
            maps_host: maps_host.trim_end_matches('/').to_string(),
            provider_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }
    })
}
