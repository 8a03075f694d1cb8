//! `-m`/`--dump-module-eeprom`/`--module-info`: plug-in module EEPROM.

use crate::backend::Capabilities;
use crate::commands::matcher::match_keywords;
use crate::commands::schema::{KeywordDef, Schema};
use crate::commands::structured::{Command, ModuleEepromArgs};
use crate::commands::tokenizer::TokenStream;
use crate::commands::values::ValueKind;
use crate::error::ParseError;

static KEYWORDS: &[KeywordDef] = &[
    KeywordDef::new("raw", ValueKind::Bool),
    KeywordDef::new("hex", ValueKind::Bool),
    KeywordDef::new("offset", ValueKind::U32),
    KeywordDef::new("length", ValueKind::U32),
    KeywordDef::new("page", ValueKind::U8).extended_only(),
    KeywordDef::new("bank", ValueKind::U8).extended_only(),
    KeywordDef::new("i2c", ValueKind::U8).extended_only(),
];

pub static SCHEMA: Schema = Schema::new(KEYWORDS);

pub fn parse(tokens: &mut TokenStream<'_>, caps: &Capabilities) -> Result<Command, ParseError> {
    let fields = match_keywords(&SCHEMA, tokens, caps)?;
    let args = ModuleEepromArgs {
        raw: fields.bool("raw"),
        hex: fields.bool("hex"),
        offset: fields.u32("offset"),
        length: fields.u32("length"),
        page: fields.u8("page"),
        bank: fields.u8("bank"),
        i2c: fields.u8("i2c"),
    };
    // Only enabling both output modes conflicts; `raw off hex on` is fine.
    if args.raw == Some(true) && args.hex == Some(true) {
        return Err(ParseError::conflict("hex", "raw"));
    }
    Ok(Command::ModuleEeprom(args))
}
