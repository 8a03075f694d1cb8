//! `--set-eee` and `--set-fec`.

use crate::backend::Capabilities;
use crate::commands::matcher::match_keywords;
use crate::commands::schema::{Arity, KeywordDef, Schema};
use crate::commands::structured::{Command, EeeArgs, FecArgs};
use crate::commands::tokenizer::TokenStream;
use crate::commands::values::ValueKind;
use crate::error::ParseError;

/// FEC encodings known without asking the kernel.
pub const FEC_ENCODINGS: &[&str] = &["auto", "off", "rs", "baser", "llrs"];

static EEE_KEYWORDS: &[KeywordDef] = &[
    KeywordDef::new("eee", ValueKind::Bool),
    KeywordDef::new("tx-lpi", ValueKind::Bool),
    KeywordDef::new("tx-timer", ValueKind::U32),
    KeywordDef::new("advertise", ValueKind::Mask),
];

pub static EEE: Schema = Schema::new(EEE_KEYWORDS).require_any();

static FEC_CHECKED_KEYWORDS: &[KeywordDef] = &[KeywordDef::new(
    "encoding",
    ValueKind::Choice(FEC_ENCODINGS),
)
.arity(Arity::List)
.required()];

static FEC_PASSTHROUGH_KEYWORDS: &[KeywordDef] = &[KeywordDef::new("encoding", ValueKind::Word)
    .arity(Arity::List)
    .required()];

/// Encoding names checked against [`FEC_ENCODINGS`].
pub static FEC_CHECKED: Schema = Schema::new(FEC_CHECKED_KEYWORDS);
/// Encoding names passed on for the kernel to validate.
pub static FEC_PASSTHROUGH: Schema = Schema::new(FEC_PASSTHROUGH_KEYWORDS);

pub fn parse_eee(tokens: &mut TokenStream<'_>, caps: &Capabilities) -> Result<Command, ParseError> {
    let fields = match_keywords(&EEE, tokens, caps)?;
    Ok(Command::SetEee(EeeArgs {
        eee: fields.bool("eee"),
        tx_lpi: fields.bool("tx-lpi"),
        tx_timer: fields.u32("tx-timer"),
        advertise: fields.hex_mask("advertise"),
    }))
}

pub fn parse_fec(tokens: &mut TokenStream<'_>, caps: &Capabilities) -> Result<Command, ParseError> {
    let schema = if caps.kernel_validates_names {
        &FEC_PASSTHROUGH
    } else {
        &FEC_CHECKED
    };
    let fields = match_keywords(schema, tokens, caps)?;
    Ok(Command::SetFec(FecArgs {
        encodings: fields.word_list("encoding").unwrap_or_default(),
    }))
}
