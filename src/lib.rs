//! ethcmd - command-line grammar engine for a network device configuration tool.
//!
//! This library exposes the core modules for use in the binary and in
//! integration tests.

pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod transport;
