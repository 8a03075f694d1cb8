//! `-X`/`--set-rxfh-indir`/`--rxfh`: RSS indirection table and hash key.

use crate::backend::Capabilities;
use crate::commands::matcher::match_keywords;
use crate::commands::schema::{Arity, KeywordDef, Schema};
use crate::commands::structured::{Command, Indirection, RssContext, RxfhArgs};
use crate::commands::tokenizer::TokenStream;
use crate::commands::values::{parse_uint, ValueKind};
use crate::error::ParseError;

static KEYWORDS: &[KeywordDef] = &[
    KeywordDef::new("equal", ValueKind::U32).group("indir"),
    KeywordDef::new("weight", ValueKind::U32)
        .arity(Arity::List)
        .group("indir"),
    KeywordDef::flag("default").group("indir"),
    KeywordDef::new("start", ValueKind::U32).requires(&["equal", "weight"]),
    KeywordDef::new("hkey", ValueKind::HexBytes),
    KeywordDef::new("hfunc", ValueKind::Word),
    KeywordDef::new("context", ValueKind::Word),
    KeywordDef::flag("delete").requires(&["context"]),
];

pub static SCHEMA: Schema = Schema::new(KEYWORDS).require_any();

pub fn parse(tokens: &mut TokenStream<'_>, caps: &Capabilities) -> Result<Command, ParseError> {
    let fields = match_keywords(&SCHEMA, tokens, caps)?;

    let indirection = if let Some(queues) = fields.u32("equal") {
        if queues == 0 {
            return Err(ParseError::invalid("equal", "0", "must be at least 1"));
        }
        Some(Indirection::Equal(queues))
    } else if let Some(weights) = fields.u32_list("weight") {
        Some(Indirection::Weights(weights))
    } else if fields.contains("default") {
        Some(Indirection::Default)
    } else {
        None
    };

    let context = fields
        .word("context")
        .map(|token| parse_context(&token))
        .transpose()?;

    Ok(Command::SetRxfh(RxfhArgs {
        indirection,
        start: fields.u32("start"),
        hkey: fields.bytes("hkey"),
        hfunc: fields.word("hfunc"),
        context,
        delete: fields.contains("delete"),
    }))
}

fn parse_context(token: &str) -> Result<RssContext, ParseError> {
    if token == "new" {
        return Ok(RssContext::New);
    }
    parse_uint(token, 32)
        .map(|id| RssContext::Id(id as u32))
        .map_err(|reason| ParseError::invalid("context", token, reason))
}
