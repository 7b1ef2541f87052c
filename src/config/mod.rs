// src/config/mod.rs
// Command-line and environment configuration

use clap::{Args, Parser, Subcommand};
use tracing::Level;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Parser)]
#[command(name = "analyti")]
#[command(about = "Sentiment and keyword analysis service")]
#[command(version)]
pub struct Cli {
    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "ANALYTI_LOG_LEVEL", default_value = "info")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP service (default)
    Serve(ServerConfig),

    /// Analyze a text once and print the JSON result
    Analyze {
        /// Text to analyze (read from stdin when omitted)
        text: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "ANALYTI_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "ANALYTI_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Parser wrapper so a bare `analyti` still honors `ANALYTI_HOST`/`ANALYTI_PORT`.
#[derive(Parser)]
struct ServeDefaults {
    #[command(flatten)]
    config: ServerConfig,
}

impl ServerConfig {
    /// Server settings from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, clap::Error> {
        ServeDefaults::try_parse_from(["analyti"]).map(|parsed| parsed.config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
