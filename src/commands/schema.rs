//! Declarative grammar schemas.
//!
//! A schema lists the keywords a command accepts, how many value tokens each
//! one consumes, which parser reads them, and the constraints between
//! keywords (exclusion groups, prerequisites, required keywords). Schemas are
//! `static` data built with `const fn` builders and interpreted by the
//! matcher.

use super::tokenizer::TokenStream;
use super::values::{Value, ValueKind};
use crate::backend::Capabilities;
use crate::error::ParseError;

/// Parser for keywords whose value shape cannot be described by a count.
pub type CompoundParser = fn(&'static str, &mut TokenStream<'_>) -> Result<Value, ParseError>;

/// How many value tokens a keyword consumes.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    /// Exactly N tokens: 0 is a flag, 1 a single value, N a fixed-count list.
    Count(usize),
    /// One or more tokens, continuing while the next token parses as an
    /// element and is not a keyword of the same schema.
    List,
    /// Custom consumer (message level numbers or flag pairs).
    Compound(CompoundParser),
}

/// Which backends recognise a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Always,
    /// Only in the attribute-encoded protocol.
    ExtendedOnly,
    /// Accepted by backends that still honour deprecated keywords.
    Deprecated,
}

impl Availability {
    pub fn is_available(self, caps: &Capabilities) -> bool {
        match self {
            Self::Always => true,
            Self::ExtendedOnly => caps.extended_keywords,
            Self::Deprecated => !caps.rejects_deprecated,
        }
    }
}

/// One keyword of a schema.
#[derive(Debug, Clone, Copy)]
pub struct KeywordDef {
    pub name: &'static str,
    pub value: ValueKind,
    pub arity: Arity,
    /// Mutual-exclusion group: at most one member may appear.
    pub group: Option<&'static str>,
    pub required: bool,
    /// At least one of these must also be present.
    pub requires: &'static [&'static str],
    /// Accepts a mask as `m <value>` or `<name>-mask <value>`.
    pub maskable: bool,
    pub availability: Availability,
}

impl KeywordDef {
    /// A keyword taking a single value.
    pub const fn new(name: &'static str, value: ValueKind) -> Self {
        Self {
            name,
            value,
            arity: Arity::Count(1),
            group: None,
            required: false,
            requires: &[],
            maskable: false,
            availability: Availability::Always,
        }
    }

    /// A keyword taking no value.
    pub const fn flag(name: &'static str) -> Self {
        Self::new(name, ValueKind::Word).arity(Arity::Count(0))
    }

    pub const fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    pub const fn group(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn requires(mut self, requires: &'static [&'static str]) -> Self {
        self.requires = requires;
        self
    }

    pub const fn maskable(mut self) -> Self {
        self.maskable = true;
        self
    }

    pub const fn extended_only(mut self) -> Self {
        self.availability = Availability::ExtendedOnly;
        self
    }

    pub const fn deprecated(mut self) -> Self {
        self.availability = Availability::Deprecated;
        self
    }
}

/// Keyword grammar of one command family.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub keywords: &'static [KeywordDef],
    /// At least one keyword must be given.
    pub require_any: bool,
}

impl Schema {
    pub const fn new(keywords: &'static [KeywordDef]) -> Self {
        Self {
            keywords,
            require_any: false,
        }
    }

    pub const fn require_any(mut self) -> Self {
        self.require_any = true;
        self
    }

    /// Finds a keyword available on the active backend.
    pub fn lookup(&self, token: &str, caps: &Capabilities) -> Option<&'static KeywordDef> {
        self.keywords
            .iter()
            .find(|def| def.name == token && def.availability.is_available(caps))
    }

    /// Names of the keywords available on the active backend.
    pub fn available_names(&self, caps: &Capabilities) -> Vec<&'static str> {
        self.keywords
            .iter()
            .filter(|def| def.availability.is_available(caps))
            .map(|def| def.name)
            .collect()
    }
}

/// One ordered argument of a positional grammar.
#[derive(Debug, Clone, Copy)]
pub struct PositionalDef {
    pub name: &'static str,
    pub value: ValueKind,
    pub required: bool,
}

impl PositionalDef {
    pub const fn required(name: &'static str, value: ValueKind) -> Self {
        Self {
            name,
            value,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, value: ValueKind) -> Self {
        Self {
            name,
            value,
            required: false,
        }
    }
}
