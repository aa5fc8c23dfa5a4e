use std::{env, time::Duration};

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines, for local runs.
    Pretty,
    /// One JSON object per line, for CloudWatch.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the mechanics table (default: "MechanicTable")
    pub mechanic_table_name: String,
    /// Name of the users table (default: "Users")
    pub user_table_name: String,
    /// Log output format (default: pretty)
    pub log_format: LogFormat,
    /// Request timeout of the local server in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MECHANIC_TABLE_NAME` - Mechanics table (default: "MechanicTable")
    /// - `USER_TABLE_NAME` - Users table (default: "Users")
    /// - `LOG_FORMAT` - `pretty` or `json` (default: "pretty")
    /// - `REQUEST_TIMEOUT_SECONDS` - Local server request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            mechanic_table_name: env::var("MECHANIC_TABLE_NAME")
                .unwrap_or_else(|_| "MechanicTable".to_string()),
            user_table_name: env::var("USER_TABLE_NAME").unwrap_or_else(|_| "Users".to_string()),
            log_format: env::var("LOG_FORMAT")
                .ok()
                .and_then(|v| LogFormat::parse(&v))
                .unwrap_or(LogFormat::Pretty),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
