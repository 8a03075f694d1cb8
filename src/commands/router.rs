//! Command parsing and routing for ethcmd.
//!
//! Resolves the selector, validates the device name and argument count, then
//! hands the remaining tokens to the command's grammar. Parsing performs no
//! I/O; [`CommandRouter::run`] submits an accepted invocation to a transport
//! exactly once.

use super::definitions::{default_command, find_command, Grammar, Target};
use super::device::validate_device_name;
use super::structured::{GlobalOptions, Invocation};
use super::tokenizer::TokenStream;
use super::values::ValueKind;
use crate::backend::Capabilities;
use crate::error::ParseError;
use crate::transport::{Transport, TransportError};
use tracing::{debug, info};

/// Result of running one argument vector end to end.
#[derive(Debug)]
pub enum RunOutcome {
    /// Accepted and handed to the transport.
    Submitted(Invocation),
    /// Accepted and answered without a transport (help, version).
    Local(Invocation),
    /// Rejected by the grammar; the transport was not called.
    Rejected(ParseError),
    /// Accepted, but the transport failed.
    Failed(TransportError),
}

impl RunOutcome {
    /// Process exit status: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Submitted(_) | Self::Local(_) => 0,
            Self::Rejected(_) | Self::Failed(_) => 1,
        }
    }

    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Command router for parsing argument vectors.
pub struct CommandRouter;

impl CommandRouter {
    /// Parses an argument vector into an invocation.
    pub fn parse<S: AsRef<str>>(args: &[S], caps: &Capabilities) -> Result<Invocation, ParseError> {
        let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let mut stream = TokenStream::new(&tokens);

        let options = Self::parse_global_options(&mut stream)?;

        let selector = stream.peek().ok_or(ParseError::MissingDeviceName)?;
        let def = if selector.starts_with('-') {
            stream.next();
            find_command(selector)
        } else {
            default_command()
        }
        .ok_or_else(|| ParseError::UnknownSelector(selector.to_string()))?;
        debug!(command = def.name, backend = %caps.backend, "resolved selector");

        if options.json && !(def.json && caps.json_output) {
            return Err(ParseError::UnsupportedOption {
                option: "--json".to_string(),
                command: def.name.to_string(),
            });
        }

        let device = match def.target {
            Target::None => None,
            Target::Device => {
                let name = stream.next().ok_or(ParseError::MissingDeviceName)?;
                validate_device_name(name, caps)?;
                Some(name.to_string())
            }
        };

        if stream.remaining() < def.min_args {
            return Err(ParseError::MissingValue(def.name.to_string()));
        }

        let command = match &def.grammar {
            Grammar::Bare(command) => command.clone(),
            Grammar::Parser(parse) => parse(&mut stream, caps)?,
        };
        stream.expect_end()?;

        Ok(Invocation {
            device,
            options,
            command,
        })
    }

    /// Parses, then submits an accepted invocation to `transport`.
    ///
    /// The transport is never called for rejected input or for commands
    /// answered locally.
    pub fn run<S: AsRef<str>>(
        args: &[S],
        caps: &Capabilities,
        transport: &mut dyn Transport,
    ) -> RunOutcome {
        let invocation = match Self::parse(args, caps) {
            Ok(invocation) => invocation,
            Err(err) => {
                debug!(kind = ?err.kind(), "rejected: {err}");
                return RunOutcome::Rejected(err);
            }
        };

        if invocation.is_local() {
            return RunOutcome::Local(invocation);
        }

        info!(device = ?invocation.device, "submitting {:?}", invocation.command);
        match transport.submit(&invocation) {
            Ok(()) => RunOutcome::Submitted(invocation),
            Err(err) => RunOutcome::Failed(err),
        }
    }

    /// Consumes `--json` and `--debug N` ahead of the selector.
    fn parse_global_options(stream: &mut TokenStream<'_>) -> Result<GlobalOptions, ParseError> {
        let mut options = GlobalOptions::default();
        while let Some(token) = stream.peek() {
            match token {
                "--json" => {
                    stream.next();
                    options.json = true;
                }
                "--debug" => {
                    stream.next();
                    let value = stream
                        .next()
                        .ok_or_else(|| ParseError::MissingValue(token.to_string()))?;
                    options.debug = ValueKind::U32.parse(token, value)?.as_u32();
                }
                _ => break,
            }
        }
        Ok(options)
    }
}
