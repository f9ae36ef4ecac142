//! Handles settings for the application. Configuration is read from
//! `settings.toml`, then from `PLANNER__*` environment variables, then from
//! the command line.
//!
//! See `settings.toml` for the configuration.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use engine::Catalog;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Ledger {
    /// Initial budget in rupees, e.g. `"100000"` or `"2500.50"`.
    pub budget: String,
    pub currency: String,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            budget: "100000".to_string(),
            currency: "INR".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: 5000,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSource {
    /// Catalog file replacing the built-in one.
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub ledger: Ledger,
    pub server: Server,
    pub catalog: CatalogSource,
}

#[derive(Debug, Parser)]
#[command(name = "planner", disable_version_flag = true)]
pub struct Args {
    /// Optional config file path.
    #[arg(long)]
    config: Option<String>,
    /// Override the listening port.
    #[arg(long)]
    port: Option<u16>,
    /// Override the listening address.
    #[arg(long)]
    bind: Option<String>,
    /// Override the initial budget (rupees).
    #[arg(long)]
    budget: Option<String>,
    /// Override the log level.
    #[arg(long)]
    level: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(config_path).required(args.config.is_some()))
            .add_source(
                Environment::with_prefix("PLANNER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Some(port) = args.port {
            settings.server.port = port;
        }
        if let Some(bind) = args.bind {
            settings.server.bind = Some(bind);
        }
        if let Some(budget) = args.budget {
            settings.ledger.budget = budget;
        }
        if let Some(level) = args.level {
            settings.app.level = level;
        }

        Ok(settings)
    }

    pub fn address(&self) -> String {
        let bind = self.server.bind.as_deref().unwrap_or("127.0.0.1");
        format!("{}:{}", bind, self.server.port)
    }

    /// The configured catalog, or the built-in one when no file is set.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog.path {
            Some(path) => Config::builder()
                .add_source(File::with_name(path))
                .build()?
                .try_deserialize(),
            None => Ok(Catalog::builtin()),
        }
    }
}
