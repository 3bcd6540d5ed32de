//! Startup configuration: credential lookup, `.env` loading, and the fixed
//! 30-day query window.

use chrono::{DateTime, TimeDelta, Utc};
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::error::ConfigError;

pub const API_KEY_ENV: &str = "OPENAI_ADMIN_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_COST_REPORT_BASE_URL";
pub const API_KEY_PLACEHOLDER: &str = "your_openai_admin_key_here";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const LOOKBACK_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// Start of the query window as a UNIX timestamp.
    pub start_time: i64,
    pub out_dir: PathBuf,
}

impl Config {
    /// Build the run configuration from CLI args and an environment lookup.
    ///
    /// Command-line values win over the environment. Blank values and the
    /// placeholder key count as unset.
    pub fn resolve<F>(args: &Args, env_lookup: F, now: DateTime<Utc>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_key = args
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| env_lookup(API_KEY_ENV));
        let api_key = validate_api_key(raw_key.as_deref())?;

        let base_url = args
            .base_url
            .clone()
            .or_else(|| env_lookup(BASE_URL_ENV))
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Config {
            api_key,
            base_url,
            start_time: lookback_start(now),
            out_dir: args.out_dir.clone(),
        })
    }
}

fn validate_api_key(raw: Option<&str>) -> Result<String, ConfigError> {
    let key = raw.map(str::trim).unwrap_or_default();
    if key.is_empty() {
        return Err(ConfigError::MissingApiKey);
    }
    if key == API_KEY_PLACEHOLDER {
        return Err(ConfigError::PlaceholderApiKey);
    }
    Ok(key.to_string())
}

/// Timestamp `LOOKBACK_DAYS` before `now`.
pub fn lookback_start(now: DateTime<Utc>) -> i64 {
    (now - TimeDelta::days(LOOKBACK_DAYS)).timestamp()
}

/// Load `KEY=value` pairs into the process environment.
///
/// An explicit file must exist; the default `./.env` is optional. Variables
/// already set in the environment are left alone.
pub fn load_env_file(explicit: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let loaded = dotenvy::from_path(path)
                .map(|_| path.to_path_buf())
                .map_err(|e| anyhow::anyhow!("load env file {}: {e}", path.display()))?;
            Ok(Some(loaded))
        }
        None => match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(anyhow::anyhow!("load .env: {e}")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn args() -> Args {
        Args {
            out_dir: PathBuf::from("."),
            ..Args::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap()
    }

    #[test]
    fn reads_key_from_environment() {
        let config = Config::resolve(
            &args(),
            |name| (name == API_KEY_ENV).then(|| "sk-admin-env".to_string()),
            now(),
        )
        .unwrap();
        assert_eq!(config.api_key, "sk-admin-env");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.out_dir, PathBuf::from("."));
    }

    #[test]
    fn cli_key_overrides_environment() {
        let args = Args {
            api_key: Some("sk-admin-cli".to_string()),
            ..args()
        };
        let config = Config::resolve(&args, |_| Some("sk-admin-env".to_string()), now()).unwrap();
        assert_eq!(config.api_key, "sk-admin-cli");
    }

    #[test]
    fn placeholder_and_blank_keys_are_unset() {
        let err = Config::resolve(&args(), |_| Some(API_KEY_PLACEHOLDER.to_string()), now())
            .unwrap_err();
        assert_eq!(err, ConfigError::PlaceholderApiKey);

        let err = Config::resolve(&args(), |_| Some("   ".to_string()), now()).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);

        let err = Config::resolve(&args(), |_| None, now()).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn blank_cli_key_falls_back_to_environment() {
        let args = Args {
            api_key: Some(String::new()),
            ..args()
        };
        let config = Config::resolve(&args, |_| Some("sk-admin-env".to_string()), now()).unwrap();
        assert_eq!(config.api_key, "sk-admin-env");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let args = Args {
            base_url: Some("http://127.0.0.1:9000/v1/".to_string()),
            ..args()
        };
        let config = Config::resolve(&args, |_| Some("k".to_string()), now()).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000/v1");
    }

    #[test]
    fn base_url_can_come_from_environment() {
        let config = Config::resolve(
            &args(),
            |name| match name {
                API_KEY_ENV => Some("k".to_string()),
                BASE_URL_ENV => Some("http://localhost:8080/v1".to_string()),
                _ => None,
            },
            now(),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn window_starts_thirty_days_back() {
        let start = lookback_start(now());
        let expected = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap().timestamp();
        assert_eq!(start, expected);
        assert_eq!(now().timestamp() - start, 30 * 24 * 60 * 60);
    }
}
