//! Transport boundary.
//!
//! A transport receives a fully validated [`Invocation`] and performs the
//! device request. Real ioctl/netlink transports live outside this crate;
//! the implementations here record or serialize requests instead.

use crate::backend::Backend;
use crate::commands::Invocation;
use crate::error::EthcmdError;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;
use tracing::info;

/// Failure reported by a transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The device or kernel refused the request.
    #[error("request refused: {0}")]
    Refused(String),

    /// Writing the request failed.
    #[error("failed to write request: {0}")]
    Io(#[from] std::io::Error),

    /// The request could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<TransportError> for EthcmdError {
    fn from(err: TransportError) -> Self {
        EthcmdError::transport(err.to_string())
    }
}

/// Receiver of accepted invocations.
pub trait Transport {
    /// Performs the request described by `invocation`.
    fn submit(&mut self, invocation: &Invocation) -> Result<(), TransportError>;
}

/// Request encoding used by a backend.
pub fn request_format(backend: Backend) -> &'static str {
    match backend {
        Backend::Legacy => "fixed-layout",
        Backend::Extended => "attribute-encoded",
    }
}

/// Transport that records submissions and never touches a device.
#[derive(Debug, Default)]
pub struct DryRunTransport {
    submissions: Vec<Invocation>,
    failure: Option<String>,
}

impl DryRunTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that records each submission, then refuses it.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            submissions: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    /// Invocations submitted so far, oldest first.
    pub fn submissions(&self) -> &[Invocation] {
        &self.submissions
    }
}

impl Transport for DryRunTransport {
    fn submit(&mut self, invocation: &Invocation) -> Result<(), TransportError> {
        self.submissions.push(invocation.clone());
        match &self.failure {
            Some(reason) => Err(TransportError::Refused(reason.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Serialize)]
struct Request<'a> {
    backend: Backend,
    format: &'static str,
    #[serde(flatten)]
    invocation: &'a Invocation,
}

/// Transport that writes each request as one line of JSON.
pub struct JsonTransport<W: Write> {
    writer: W,
    backend: Backend,
}

impl<W: Write> JsonTransport<W> {
    pub fn new(writer: W, backend: Backend) -> Self {
        Self { writer, backend }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Transport for JsonTransport<W> {
    fn submit(&mut self, invocation: &Invocation) -> Result<(), TransportError> {
        let request = Request {
            backend: self.backend,
            format: request_format(self.backend),
            invocation,
        };
        serde_json::to_writer(&mut self.writer, &request)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        info!(backend = %self.backend, device = ?invocation.device, "request written");
        Ok(())
    }
}
