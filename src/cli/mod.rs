//! Command-line interface for mongoscope
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and argument overrides
//!
//! Query documents (filter/project/group) are deliberately not accepted on
//! the command line; the `QueryOptions` API is library-only and the `fetch`
//! subcommand always runs a full scan.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, LogLevel, ServerConfig};
use crate::error::Result;

/// Browse MongoDB servers from the command line
#[derive(Parser, Debug)]
#[command(
    name = "mongoscope",
    version,
    about = "Browse MongoDB servers from the command line",
    long_about = "A MongoDB browsing gateway: verify connectivity, list databases and\n\
collections, and fetch the documents of a collection."
)]
pub struct CliArgs {
    /// Server to connect to
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to connect to
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Username for the credential probe
    #[arg(short = 'u', long, value_name = "USERNAME")]
    pub username: Option<String>,

    /// Password for the credential probe
    #[arg(short = 'p', long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Server selection timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Compact single-line JSON output
    #[arg(long)]
    pub compact: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (debug logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands for mongoscope
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify connectivity and, if a username is set, credentials
    Check,

    /// List every database and its collections
    Tree,

    /// Fetch all documents of a collection
    Fetch {
        /// Database holding the collection
        #[arg(value_name = "DATABASE")]
        database: String,

        /// Collection to read
        #[arg(value_name = "COLLECTION")]
        collection: String,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    pub fn new() -> Result<Self> {
        let args = CliArgs::parse();
        let config = Self::load_config(&args)?;

        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load(args.config_file.as_deref())?;
        config.validate()?;

        Self::apply_args_to_config(&mut config, args);
        Ok(config)
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        if let Some(host) = &args.host {
            config.server.host = host.clone();
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if let Some(username) = &args.username {
            config.server.username = Some(username.clone());
        }
        if let Some(password) = &args.password {
            config.server.password = Some(password.clone());
        }
        if let Some(timeout) = args.timeout {
            config.server.timeout = timeout;
        }

        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Get the server connection parameters
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interface(argv: &[&str]) -> CliInterface {
        let args = CliArgs::try_parse_from(argv).unwrap();
        let mut config = Config::default();
        CliInterface::apply_args_to_config(&mut config, &args);
        CliInterface { args, config }
    }

    #[test]
    fn test_subcommand_parsing() {
        let args = CliArgs::try_parse_from(vec!["mongoscope", "check"]).unwrap();
        assert!(matches!(args.command, Commands::Check));

        let args = CliArgs::try_parse_from(vec!["mongoscope", "tree"]).unwrap();
        assert!(matches!(args.command, Commands::Tree));

        let args =
            CliArgs::try_parse_from(vec!["mongoscope", "fetch", "orders", "invoices"]).unwrap();
        match args.command {
            Commands::Fetch {
                database,
                collection,
            } => {
                assert_eq!(database, "orders");
                assert_eq!(collection, "invoices");
            }
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(CliArgs::try_parse_from(vec!["mongoscope"]).is_err());
    }

    #[test]
    fn test_server_defaults() {
        let cli = interface(&["mongoscope", "check"]);
        assert_eq!(cli.server().host, "localhost");
        assert_eq!(cli.server().port, 27017);
        assert!(cli.server().username.is_none());
    }

    #[test]
    fn test_args_override_config() {
        let cli = interface(&[
            "mongoscope",
            "--host",
            "10.0.0.8",
            "--port",
            "27018",
            "-u",
            "admin",
            "-p",
            "secret",
            "--timeout",
            "5",
            "check",
        ]);
        assert_eq!(cli.server().host, "10.0.0.8");
        assert_eq!(cli.server().port, 27018);
        assert_eq!(cli.server().username.as_deref(), Some("admin"));
        assert_eq!(cli.server().password.as_deref(), Some("secret"));
        assert_eq!(cli.server().timeout, 5);
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = interface(&["mongoscope", "-v", "check"]);
        assert_eq!(cli.config().logging.level, LogLevel::Debug);

        let cli = interface(&["mongoscope", "--vv", "check"]);
        assert_eq!(cli.config().logging.level, LogLevel::Trace);

        let cli = interface(&["mongoscope", "-q", "check"]);
        assert_eq!(cli.config().logging.level, LogLevel::Error);
    }

    #[test]
    fn test_output_flags() {
        let args =
            CliArgs::try_parse_from(vec!["mongoscope", "--compact", "--no-color", "tree"]).unwrap();
        assert!(args.compact);
        assert!(args.no_color);
    }
}
