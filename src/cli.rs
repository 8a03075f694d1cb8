//! Command-line argument parsing for the ethcmd binary.
//!
//! clap only handles the wrapper options. Everything after them is the
//! device tool's own argument vector and is handed to the grammar engine
//! untouched, hyphens included.

use crate::backend::Backend;
use clap::Parser;
use std::path::PathBuf;

/// Parse and validate network device configuration commands.
#[derive(Parser, Debug)]
#[command(name = "ethcmd")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Backend personality used for validation
    #[arg(long, value_enum, value_name = "BACKEND")]
    pub backend: Option<Backend>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tool arguments, e.g. `-s eth0 speed 100`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }
}
