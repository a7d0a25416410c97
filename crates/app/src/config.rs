//! Application configuration

use std::{path::PathBuf, time::Duration};

use clap::{Args, ValueEnum};

use crate::catalog::CatalogConfig;

/// RocketShoes cart configuration
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Catalog service settings.
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Durable storage settings.
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

/// Catalog service settings.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Base URL of the stock/products API
    #[arg(long, env = "ROCKETSHOES_API_URL", default_value = "http://localhost:3333")]
    pub api_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "ROCKETSHOES_HTTP_TIMEOUT_SECS", default_value = "10")]
    pub http_timeout_secs: u64,
}

impl CatalogArgs {
    /// Client settings built from these arguments.
    #[must_use]
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.http_timeout_secs),
        }
    }
}

/// Durable storage settings.
#[derive(Debug, Args)]
pub struct StorageArgs {
    /// JSON file holding the persisted cart
    #[arg(
        long,
        env = "ROCKETSHOES_STORAGE_PATH",
        default_value = ".rocketshoes/storage.json"
    )]
    pub storage_path: PathBuf,
}

/// Logging output settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line output.
    Compact,

    /// Structured JSON lines.
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        config: AppConfig,
    }

    #[test]
    fn explicit_flags_override_defaults() -> TestResult {
        let cli = TestCli::try_parse_from([
            "rocketshoes",
            "--api-url",
            "http://catalog.test/",
            "--http-timeout-secs",
            "3",
            "--storage-path",
            "/tmp/cart.json",
            "--log-format",
            "json",
        ])?;

        let catalog = cli.config.catalog.catalog_config();

        assert_eq!(catalog.base_url, "http://catalog.test/");
        assert_eq!(catalog.timeout, Duration::from_secs(3));
        assert_eq!(cli.config.storage.storage_path, PathBuf::from("/tmp/cart.json"));
        assert_eq!(cli.config.logging.log_format, LogFormat::Json);

        Ok(())
    }
}
