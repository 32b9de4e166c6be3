//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for catalog-sync using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// catalog-sync - supplier catalog to CSV, Dropbox and PostgreSQL
#[derive(Parser, Debug)]
#[command(name = "catalog-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "catalog-sync.toml", env = "CATALOG_SYNC_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CATALOG_SYNC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch, transform, export, upload and load the supplier catalog
    Run(commands::run::RunArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["catalog-sync", "run"]);
        assert_eq!(cli.config, "catalog-sync.toml");
        assert!(matches!(cli.command, Commands::Run(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["catalog-sync", "--config", "thg.toml", "run"]);
        assert_eq!(cli.config, "thg.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["catalog-sync", "--log-level", "debug", "run"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_run_overrides() {
        let cli = Cli::parse_from([
            "catalog-sync",
            "run",
            "--dry-run",
            "--supplier",
            "terheegde",
            "--page-size",
            "48",
            "--max-pages",
            "3",
        ]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert!(args.dry_run);
        assert_eq!(args.supplier.as_deref(), Some("terheegde"));
        assert_eq!(args.page_size, Some(48));
        assert_eq!(args.max_pages, Some(3));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["catalog-sync", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["catalog-sync", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
