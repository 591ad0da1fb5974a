//! Server settings read from the environment at startup.

use std::fmt::Display;
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines for local development.
    #[default]
    Pretty,
    /// One JSON object per event, for log shippers.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}', expected 'pretty' or 'json'")),
        }
    }
}

/// Settings for the admin API and public site server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins of the admin panel and public site allowed by CORS.
    pub cors_origins: Vec<String>,
    /// Requests running longer than this are answered with 408.
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
    /// Verification settings for admin bearer tokens.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Read settings from the environment.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `LOG_FORMAT`           | `pretty`                |
    /// | `JWT_SECRET`           | required                |
    ///
    /// # Panics
    ///
    /// Panics on a malformed value or a missing `JWT_SECRET`, so a
    /// misconfigured server never starts.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_env("PORT", 3000),
            cors_origins: split_origins(&env_or("CORS_ORIGINS", "http://localhost:5173")),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 30),
            log_format: parse_env("LOG_FORMAT", LogFormat::default()),
            jwt: JwtConfig::from_env(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{name} is invalid ({raw:?}): {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" JSON ".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert_eq!("".parse::<LogFormat>(), Ok(LogFormat::Pretty));
    }

    #[test]
    fn unknown_log_format_rejected() {
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert!(err.contains("xml"));
    }

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            split_origins("https://school.example, ,http://localhost:5173,"),
            ["https://school.example", "http://localhost:5173"]
        );
        assert!(split_origins("").is_empty());
    }
}
