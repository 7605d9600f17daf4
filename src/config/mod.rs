pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lesson-log")]
#[command(about = "Walks through the account, seating, ride and people lessons")]
pub struct CliConfig {
    /// Path to a TOML scenario; the built-in lesson scenario is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Print the tour report as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config =
            CliConfig::try_parse_from(["lesson-log", "--config", "tour.toml", "--json", "-v"]).unwrap();
        assert_eq!(config.config.as_deref(), Some("tour.toml"));
        assert!(config.json);
        assert!(config.verbose);
        assert!(!config.json_logs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_path_is_rejected() {
        let config = CliConfig::try_parse_from(["lesson-log", "--config", ""]).unwrap();
        assert!(config.validate().is_err());
    }
}
