//! Shared helpers for the grammar integration tests.

use ethcmd::backend::Backend;
use ethcmd::commands::CommandRouter;
use ethcmd::transport::DryRunTransport;

pub mod cli_test;
pub mod devname_test;
pub mod flow_test;
pub mod table_test;
pub mod transport_test;

/// Splits `args` on whitespace, runs it on `backend` and returns the exit
/// code together with the number of transport submissions.
pub fn run_on(args: &str, backend: Backend) -> (i32, usize) {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let mut transport = DryRunTransport::new();
    let outcome = CommandRouter::run(&tokens, &backend.capabilities(), &mut transport);
    (outcome.exit_code(), transport.submissions().len())
}
