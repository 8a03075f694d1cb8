//! Command-line grammar engine for ethcmd.
//!
//! Turns an argument vector into a validated [`Invocation`] without doing any
//! I/O, so every grammar can be unit tested without a device or a socket.

pub mod definitions;
pub mod device;
pub mod grammars;
pub mod matcher;
pub mod router;
pub mod schema;
pub mod structured;
pub mod tokenizer;
pub mod values;

pub use definitions::{find_command, CommandCategory, CommandDef, COMMANDS};
pub use router::{CommandRouter, RunOutcome};
pub use structured::{Command, GlobalOptions, Invocation};
