//! Backend personalities and the capability facts derived from them.
//!
//! The active backend is resolved once (CLI flag, environment, config file)
//! before any parsing starts and is passed into the grammar layer as a plain
//! `Copy` value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport personality the parsed command will be handed to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Fixed-layout control requests (ioctl style).
    Legacy,
    /// Attribute-encoded protocol messages (netlink style).
    #[default]
    Extended,
}

impl Backend {
    /// Returns the backend as a string for config files and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Extended => "extended",
        }
    }

    /// Parses a backend from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "legacy" | "ioctl" => Some(Self::Legacy),
            "extended" | "netlink" => Some(Self::Extended),
            _ => None,
        }
    }

    /// Returns the capability set of this backend.
    pub fn capabilities(self) -> Capabilities {
        Capabilities::for_backend(self)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only facts about the active backend consulted by the grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Backend these facts were derived from.
    pub backend: Backend,
    /// Device names up to 127 characters instead of 15.
    pub long_device_names: bool,
    /// Keywords that only exist in the attribute-encoded protocol.
    pub extended_keywords: bool,
    /// Deprecated keywords are refused instead of silently accepted.
    pub rejects_deprecated: bool,
    /// Names such as FEC encodings are checked by the kernel, not here.
    pub kernel_validates_names: bool,
    /// `--json` output for the show commands that support it.
    pub json_output: bool,
}

impl Capabilities {
    /// Derives the capability facts of a backend.
    pub const fn for_backend(backend: Backend) -> Self {
        let extended = matches!(backend, Backend::Extended);
        Self {
            backend,
            long_device_names: extended,
            extended_keywords: extended,
            rejects_deprecated: extended,
            kernel_validates_names: extended,
            json_output: extended,
        }
    }

    /// Longest device name the backend can address.
    pub fn max_device_name_len(&self) -> usize {
        if self.long_device_names {
            127
        } else {
            15
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::for_backend(Backend::default())
    }
}
