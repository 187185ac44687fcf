//! Command-line and environment configuration.
//!
//! Flags win over environment variables, which win over a `.env` file in the
//! working directory.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use shortener_core::Locale;
use shortener_engine::{ClientSettings, Endpoint, EndpointError};
use thiserror::Error;

use super::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "shortener",
    version,
    about = "Terminal client for a URL shortening service"
)]
pub struct Args {
    /// Base URL of the shortening service.
    #[arg(long, env = "SHORTENER_API_ENDPOINT")]
    pub endpoint: String,

    /// UI language (`en` or `ko`).
    #[arg(long, env = "SHORTENER_LOCALE", default_value = "en", value_parser = parse_locale)]
    pub locale: Locale,

    /// Where the log file is written.
    #[arg(long, env = "SHORTENER_LOG_FILE", default_value = "./shortener.log")]
    pub log_file: PathBuf,

    #[arg(long, env = "SHORTENER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Disable the log file entirely.
    #[arg(long)]
    pub no_log: bool,

    #[arg(
        long,
        env = "SHORTENER_CONNECT_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub connect_timeout_secs: u64,

    /// Overall request timeout. Unset waits for the service indefinitely.
    #[arg(
        long,
        env = "SHORTENER_REQUEST_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint {value:?}: {source}")]
    Endpoint {
        value: String,
        #[source]
        source: EndpointError,
    },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: Endpoint,
    pub locale: Locale,
    pub client: ClientSettings,
    pub log: LogDestination,
}

impl AppConfig {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let endpoint = Endpoint::parse(&args.endpoint).map_err(|source| ConfigError::Endpoint {
            value: args.endpoint.clone(),
            source,
        })?;

        let log = if args.no_log {
            LogDestination::Disabled
        } else {
            let level = engine_logging::parse_level(&args.log_level)
                .ok_or_else(|| ConfigError::LogLevel(args.log_level.clone()))?;
            if level == LevelFilter::Off {
                LogDestination::Disabled
            } else {
                LogDestination::File {
                    path: args.log_file,
                    level,
                }
            }
        };

        Ok(Self {
            endpoint,
            locale: args.locale,
            client: ClientSettings {
                connect_timeout: Duration::from_secs(args.connect_timeout_secs),
                request_timeout: args.request_timeout_secs.map(Duration::from_secs),
            },
            log,
        })
    }
}

/// Reads `.env` (if any), then the environment and command line.
pub fn load() -> anyhow::Result<AppConfig> {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    Ok(AppConfig::from_args(args)?)
}

fn parse_locale(raw: &str) -> Result<Locale, String> {
    Locale::from_tag(raw).ok_or_else(|| format!("unsupported locale {raw:?} (expected en or ko)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Result<AppConfig, ConfigError> {
        let mut argv = vec!["shortener"];
        argv.extend_from_slice(extra);
        AppConfig::from_args(Args::try_parse_from(argv).expect("args parse"))
    }

    #[test]
    fn flags_build_config() {
        let config = parse(&[
            "--endpoint",
            "https://api.example.com/",
            "--locale",
            "ko",
            "--log-file",
            "/tmp/s.log",
            "--log-level",
            "debug",
            "--connect-timeout-secs",
            "3",
            "--request-timeout-secs",
            "20",
        ])
        .unwrap();

        assert_eq!(config.endpoint.to_string(), "https://api.example.com");
        assert_eq!(config.locale, Locale::Korean);
        assert_eq!(config.client.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.client.request_timeout, Some(Duration::from_secs(20)));
        assert_eq!(
            config.log,
            LogDestination::File {
                path: PathBuf::from("/tmp/s.log"),
                level: LevelFilter::Debug,
            }
        );
    }

    #[test]
    fn no_log_and_off_level_disable_logging() {
        let config = parse(&["--endpoint", "http://localhost:3000", "--no-log"]).unwrap();
        assert_eq!(config.log, LogDestination::Disabled);

        let config = parse(&["--endpoint", "http://localhost:3000", "--log-level", "off"]).unwrap();
        assert_eq!(config.log, LogDestination::Disabled);
    }

    #[test]
    fn invalid_endpoint_is_reported() {
        let err = parse(&["--endpoint", "localhost:3000/api"]).unwrap_err();
        assert!(matches!(err, ConfigError::Endpoint { .. }));
        assert!(err.to_string().contains("localhost:3000/api"));
    }

    #[test]
    fn unknown_log_level_is_reported() {
        let err = parse(&["--endpoint", "http://localhost", "--log-level", "loud"]).unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(level) if level == "loud"));
    }

    #[test]
    fn unsupported_locale_and_zero_timeout_are_rejected_by_parser() {
        assert!(Args::try_parse_from(["shortener", "--endpoint", "http://x", "--locale", "fr"]).is_err());
        assert!(Args::try_parse_from([
            "shortener",
            "--endpoint",
            "http://x",
            "--connect-timeout-secs",
            "0"
        ])
        .is_err());
    }
}
