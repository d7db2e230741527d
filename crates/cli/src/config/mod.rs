use chrono_tz::Tz;
use clap::Parser;
use serde::Deserialize;

use crate::{
    commands::Command,
    error::{AppError, Result},
};

const DEFAULT_CONFIG_PATH: &str = "config/finsight.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Bearer token for the backend. Empty means anonymous.
    pub token: String,
    pub timezone: String,
    pub level: String,
    /// Local JSON snapshot used instead of the backend.
    pub transactions_file: Option<String>,
    pub targets_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            token: String::new(),
            timezone: "Asia/Kolkata".to_string(),
            level: "info".to_string(),
            transactions_file: None,
            targets_file: None,
        }
    }
}

impl AppConfig {
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|err| AppError::InvalidInput(format!("timezone {}: {err}", self.timezone)))
    }

    pub fn token(&self) -> Option<&str> {
        let token = self.token.trim();
        (!token.is_empty()).then_some(token)
    }

    /// Snapshots are read from disk as soon as one file is configured.
    pub fn uses_files(&self) -> bool {
        self.transactions_file.is_some() || self.targets_file.is_some()
    }
}

#[derive(Debug, Parser)]
#[command(name = "finsight", disable_version_flag = true)]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:8000).
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Override timezone (IANA name).
    #[arg(long, global = true)]
    timezone: Option<String>,
    /// Override log level.
    #[arg(long, global = true)]
    level: Option<String>,
    /// Read transactions from a JSON file instead of the backend.
    #[arg(long, global = true)]
    transactions_file: Option<String>,
    /// Read targets from a JSON file instead of the backend.
    #[arg(long, global = true)]
    targets_file: Option<String>,
    #[command(subcommand)]
    command: Command,
}

/// Parses the command line and layers file, environment and flags.
///
/// The token is only read from the file or `FINSIGHT_TOKEN`, never from flags.
pub fn load() -> Result<(AppConfig, Command)> {
    let cli = Cli::parse();
    let settings = resolve(&cli)?;
    Ok((settings, cli.command))
}

fn resolve(cli: &Cli) -> Result<AppConfig> {
    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("FINSIGHT"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = &cli.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(timezone) = &cli.timezone {
        settings.timezone = timezone.clone();
    }
    if let Some(level) = &cli.level {
        settings.level = level.clone();
    }
    if let Some(path) = &cli.transactions_file {
        settings.transactions_file = Some(path.clone());
    }
    if let Some(path) = &cli.targets_file {
        settings.targets_file = Some(path.clone());
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use aggregator::{TransactionKind, TypeFilter};

    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "finsight",
            "--config",
            "does/not/exist",
            "summary",
            "--timezone",
            "UTC",
            "--transactions-file",
            "snapshot.json",
            "--type",
            "income",
        ])
        .unwrap();
        let settings = resolve(&cli).unwrap();
        assert_eq!(settings.timezone, "UTC");
        assert_eq!(settings.transactions_file.as_deref(), Some("snapshot.json"));
        assert!(settings.uses_files());
        assert_eq!(settings.tz().unwrap(), Tz::UTC);
        match cli.command {
            Command::Summary { kind, .. } => {
                assert_eq!(kind, TypeFilter::Only(TransactionKind::Income))
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn bad_timezone_is_reported() {
        let settings = AppConfig {
            timezone: "Mars/Olympus".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(settings.tz(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn blank_token_means_anonymous() {
        let mut settings = AppConfig::default();
        assert_eq!(settings.token(), None);
        settings.token = " abc ".to_string();
        assert_eq!(settings.token(), Some("abc"));
    }
}
