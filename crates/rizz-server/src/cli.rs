use std::path::PathBuf;

use clap::Parser;
use rizz_config::{Config, ConfigError};

use crate::telemetry::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "chatrizz-translate", about = "ChatRizz message translation service")]
pub struct Cli {
    /// Address to bind to
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// JSON config file, used instead of environment variables
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Config file or environment, with CLI flags on top
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::new(),
        };

        if let Some(bind) = &self.bind {
            config.server.bind_addr = bind.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(format) = self.log_format {
            config.server.log_format = format.as_str().to_string();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "chatrizz-translate",
            "--bind",
            "0.0.0.0",
            "--port",
            "9000",
            "--log-format",
            "json",
        ]);

        let config = cli.load_config().unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.log_format, "json");
    }

    #[test]
    fn test_missing_config_file_errors() {
        let cli = Cli::parse_from(["chatrizz-translate", "--config", "/nonexistent/rizz.json"]);
        assert!(cli.load_config().is_err());
    }
}
