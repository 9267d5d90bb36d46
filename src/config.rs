use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Database connection URL. When absent, data endpoints answer with an error.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "MESSAGE_SERVICE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "MESSAGE_SERVICE_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Time to wait for the connection pool to close on shutdown
    #[arg(long, env = "MESSAGE_SERVICE_SHUTDOWN_TIMEOUT_SECS", default_value_t = 5)]
    pub shutdown_timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct DatabaseConfig {
    /// Maximum number of pooled database connections
    #[arg(long = "db-max-connections", env = "MESSAGE_SERVICE_DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Minimum number of idle database connections kept open
    #[arg(long = "db-min-connections", env = "MESSAGE_SERVICE_DB_MIN_CONNECTIONS", default_value_t = 1)]
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { max_connections: 10, min_connections: 1 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "MESSAGE_SERVICE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }

    /// The configured connection string, with an empty value treated as missing.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_listen_on_all_interfaces_port_5000() {
        let config = Config::try_parse_from(["message-service"]).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.telemetry.log_format, LogFormat::Text);
    }

    #[test]
    fn test_empty_database_url_is_absent() {
        let config = Config::try_parse_from(["message-service", "--database-url", "  "]).unwrap();
        assert_eq!(config.database_url(), None);

        let config =
            Config::try_parse_from(["message-service", "--database-url", "postgres://localhost/db"]).unwrap();
        assert_eq!(config.database_url(), Some("postgres://localhost/db"));
    }
}
