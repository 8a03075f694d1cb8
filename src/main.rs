//! ethcmd - parse and validate network device configuration commands.

use ethcmd::cli::Cli;
use ethcmd::commands::definitions::generate_help_text;
use ethcmd::commands::{Command, CommandRouter, RunOutcome};
use ethcmd::config::Config;
use ethcmd::error::{EthcmdError, Result};
use ethcmd::logging::init_stderr_logging;
use ethcmd::transport::JsonTransport;
use std::io;
use tracing::{debug, error, warn};

fn main() {
    let cli = Cli::parse_args();
    let config = Config::load_from_file(&cli.config_path());

    let level = config
        .as_ref()
        .map(|c| c.logging.level.as_str())
        .unwrap_or("warn");
    init_stderr_logging(level);

    let code = match config.and_then(|config| run(&cli, &config)) {
        Ok(code) => code,
        Err(e) => {
            error!("{}: {}", e.category(), e);
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli, config: &Config) -> Result<i32> {
    let backend = config.resolve_backend(cli.backend)?;
    let caps = backend.capabilities();
    debug!(?caps, "resolved backend");

    let stdout = io::stdout();
    let mut transport = JsonTransport::new(stdout.lock(), backend);
    Ok(report(CommandRouter::run(&cli.args, &caps, &mut transport)))
}

/// Prints the local answer or the diagnostic of an outcome and returns its
/// exit code.
fn report(outcome: RunOutcome) -> i32 {
    match &outcome {
        RunOutcome::Local(invocation) => match invocation.command {
            Command::Help => println!("{}", generate_help_text()),
            Command::Version => println!("ethcmd version {}", env!("CARGO_PKG_VERSION")),
            _ => {}
        },
        RunOutcome::Submitted(_) => {}
        RunOutcome::Rejected(err) => {
            warn!(kind = ?err.kind(), "rejected");
            eprintln!("ethcmd: {err}");
        }
        RunOutcome::Failed(err) => {
            let e = EthcmdError::transport(err.to_string());
            error!("{}: {}", e.category(), e);
        }
    }
    outcome.exit_code()
}
