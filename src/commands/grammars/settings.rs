//! `-s`/`--change`: link settings.

use crate::backend::Capabilities;
use crate::commands::matcher::match_keywords;
use crate::commands::schema::{Arity, KeywordDef, Schema};
use crate::commands::structured::{
    Command, Duplex, MasterSlave, Mdix, MessageLevel, PortType, SettingsArgs, Toggle, Transceiver,
};
use crate::commands::tokenizer::TokenStream;
use crate::commands::values::{parse_bool, parse_uint, TokenEnum, Value, ValueKind};
use crate::error::ParseError;

/// Message classes accepted by `msglvl <name> on|off`.
pub const MESSAGE_CLASSES: &[&str] = &[
    "drv",
    "probe",
    "link",
    "timer",
    "ifdown",
    "ifup",
    "rx_err",
    "tx_err",
    "tx_queued",
    "intr",
    "tx_done",
    "rx_status",
    "pktdata",
    "hw",
    "wol",
];

static KEYWORDS: &[KeywordDef] = &[
    KeywordDef::new("speed", ValueKind::U32),
    KeywordDef::new("duplex", ValueKind::Choice(Duplex::NAMES)),
    KeywordDef::new("mdix", ValueKind::Choice(Mdix::NAMES)),
    KeywordDef::new("port", ValueKind::Choice(PortType::NAMES)),
    KeywordDef::new("autoneg", ValueKind::Bool),
    KeywordDef::new("advertise", ValueKind::Mask),
    KeywordDef::new("phyad", ValueKind::U8),
    KeywordDef::new("xcvr", ValueKind::Choice(Transceiver::NAMES)).deprecated(),
    KeywordDef::new("wol", ValueKind::Letters("pumbagsfd")),
    KeywordDef::new("sopass", ValueKind::Mac),
    KeywordDef::new("msglvl", ValueKind::U32).arity(Arity::Compound(parse_msglvl)),
    KeywordDef::new("lanes", ValueKind::U32).extended_only(),
    KeywordDef::new("master-slave", ValueKind::Choice(MasterSlave::NAMES)).extended_only(),
];

pub static SCHEMA: Schema = Schema::new(KEYWORDS);

pub fn parse(tokens: &mut TokenStream<'_>, caps: &Capabilities) -> Result<Command, ParseError> {
    let fields = match_keywords(&SCHEMA, tokens, caps)?;
    let msglvl = fields.get("msglvl").and_then(|value| match value {
        Value::Uint(level) => u32::try_from(*level).ok().map(MessageLevel::Value),
        Value::Toggles(pairs) => Some(MessageLevel::Flags(
            pairs
                .iter()
                .map(|(name, enabled)| Toggle::new(name.as_str(), *enabled))
                .collect(),
        )),
        _ => None,
    });

    Ok(Command::ChangeSettings(SettingsArgs {
        speed: fields.u32("speed"),
        duplex: fields.choice("duplex"),
        mdix: fields.choice("mdix"),
        port: fields.choice("port"),
        autoneg: fields.bool("autoneg"),
        advertise: fields.hex_mask("advertise"),
        phyad: fields.u8("phyad"),
        xcvr: fields.choice("xcvr"),
        wol: fields.word("wol"),
        sopass: fields.mac("sopass"),
        msglvl,
        lanes: fields.u32("lanes"),
        master_slave: fields.choice("master-slave"),
    }))
}

/// `msglvl N` or `msglvl <class> on|off [<class> on|off]...`.
///
/// The flag list ends at the first token that is not a message class. A
/// class that is also a settings keyword (`wol`) ends it too unless an
/// `on`/`off` follows, so `msglvl hw on wol g` and `wol g msglvl hw on` mean
/// the same thing.
fn parse_msglvl(keyword: &'static str, tokens: &mut TokenStream<'_>) -> Result<Value, ParseError> {
    if next_class(tokens).is_none() {
        let level = tokens
            .next()
            .ok_or_else(|| ParseError::MissingValue(keyword.to_string()))?;
        return parse_uint(level, 32)
            .map(Value::Uint)
            .map_err(|reason| ParseError::invalid(keyword, level, reason));
    }

    let mut pairs: Vec<(String, bool)> = Vec::new();
    while let Some(class) = next_class(tokens) {
        tokens.next();
        let state = tokens
            .next()
            .ok_or_else(|| ParseError::MissingValue(class.to_string()))?;
        let enabled =
            parse_bool(state).map_err(|reason| ParseError::invalid(class, state, reason))?;
        if pairs.iter().any(|(name, _)| name == class) {
            return Err(ParseError::DuplicateKeyword(class.to_string()));
        }
        pairs.push((class.to_string(), enabled));
    }
    Ok(Value::Toggles(pairs))
}

/// The message class at the cursor, if the flag list continues there.
fn next_class<'a>(tokens: &TokenStream<'a>) -> Option<&'a str> {
    let class = tokens.peek().filter(|t| MESSAGE_CLASSES.contains(t))?;
    let is_keyword = KEYWORDS.iter().any(|def| def.name == class);
    let has_state = tokens.peek_nth(1).is_some_and(|t| parse_bool(t).is_ok());
    (!is_keyword || has_state).then_some(class)
}
