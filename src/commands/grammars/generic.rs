//! Flat keyword grammars and short positional grammars.

use super::toggles::parse_toggles;
use crate::backend::Capabilities;
use crate::commands::matcher::{match_keywords, match_positional};
use crate::commands::schema::{KeywordDef, PositionalDef, Schema};
use crate::commands::structured::{
    ChangeEepromArgs, ChannelArgs, CoalesceArgs, Command, EepromDumpArgs, PauseArgs,
    RegisterDumpArgs, RingArgs, SelfTestMode,
};
use crate::commands::tokenizer::TokenStream;
use crate::commands::values::{TokenEnum, ValueKind};
use crate::error::ParseError;

static PAUSE_KEYWORDS: &[KeywordDef] = &[
    KeywordDef::new("autoneg", ValueKind::Bool),
    KeywordDef::new("rx", ValueKind::Bool),
    KeywordDef::new("tx", ValueKind::Bool),
];

/// Numeric coalescing parameters, stored under their command-line names.
pub const COALESCE_COUNTERS: &[&str] = &[
    "rx-usecs",
    "rx-frames",
    "rx-usecs-irq",
    "rx-frames-irq",
    "tx-usecs",
    "tx-frames",
    "tx-usecs-irq",
    "tx-frames-irq",
    "stats-block-usecs",
    "pkt-rate-low",
    "rx-usecs-low",
    "rx-frames-low",
    "tx-usecs-low",
    "tx-frames-low",
    "pkt-rate-high",
    "rx-usecs-high",
    "rx-frames-high",
    "tx-usecs-high",
    "tx-frames-high",
    "sample-interval",
];

const fn counter(name: &'static str) -> KeywordDef {
    KeywordDef::new(name, ValueKind::U32)
}

static COALESCE_KEYWORDS: &[KeywordDef] = &[
    KeywordDef::new("adaptive-rx", ValueKind::Bool),
    KeywordDef::new("adaptive-tx", ValueKind::Bool),
    KeywordDef::new("cqe-mode-rx", ValueKind::Bool).extended_only(),
    KeywordDef::new("cqe-mode-tx", ValueKind::Bool).extended_only(),
    counter("rx-usecs"),
    counter("rx-frames"),
    counter("rx-usecs-irq"),
    counter("rx-frames-irq"),
    counter("tx-usecs"),
    counter("tx-frames"),
    counter("tx-usecs-irq"),
    counter("tx-frames-irq"),
    counter("stats-block-usecs"),
    counter("pkt-rate-low"),
    counter("rx-usecs-low"),
    counter("rx-frames-low"),
    counter("tx-usecs-low"),
    counter("tx-frames-low"),
    counter("pkt-rate-high"),
    counter("rx-usecs-high"),
    counter("rx-frames-high"),
    counter("tx-usecs-high"),
    counter("tx-frames-high"),
    counter("sample-interval"),
];

static RING_KEYWORDS: &[KeywordDef] = &[
    KeywordDef::new("rx", ValueKind::U32),
    KeywordDef::new("rx-mini", ValueKind::U32),
    KeywordDef::new("rx-jumbo", ValueKind::U32),
    KeywordDef::new("tx", ValueKind::U32),
    KeywordDef::new("rx-buf-len", ValueKind::U32).extended_only(),
    KeywordDef::new("cqe-size", ValueKind::U32).extended_only(),
    KeywordDef::new("tx-push", ValueKind::Bool).extended_only(),
];

static CHANNEL_KEYWORDS: &[KeywordDef] = &[
    KeywordDef::new("rx", ValueKind::U32),
    KeywordDef::new("tx", ValueKind::U32),
    KeywordDef::new("other", ValueKind::U32),
    KeywordDef::new("combined", ValueKind::U32),
];

static REGISTER_DUMP_KEYWORDS: &[KeywordDef] = &[
    KeywordDef::new("raw", ValueKind::Bool),
    KeywordDef::new("hex", ValueKind::Bool),
    KeywordDef::new("file", ValueKind::Word),
];

static EEPROM_DUMP_KEYWORDS: &[KeywordDef] = &[
    KeywordDef::new("raw", ValueKind::Bool),
    KeywordDef::new("offset", ValueKind::U32),
    KeywordDef::new("length", ValueKind::U32),
];

static CHANGE_EEPROM_KEYWORDS: &[KeywordDef] = &[
    KeywordDef::new("magic", ValueKind::U32),
    KeywordDef::new("offset", ValueKind::U32),
    KeywordDef::new("length", ValueKind::U32),
    KeywordDef::new("value", ValueKind::U8),
];

static GET_DUMP_KEYWORDS: &[KeywordDef] = &[KeywordDef::new("data", ValueKind::Word)];

pub static PAUSE: Schema = Schema::new(PAUSE_KEYWORDS);
pub static COALESCE: Schema = Schema::new(COALESCE_KEYWORDS);
pub static RING: Schema = Schema::new(RING_KEYWORDS);
pub static CHANNELS: Schema = Schema::new(CHANNEL_KEYWORDS);
pub static REGISTER_DUMP: Schema = Schema::new(REGISTER_DUMP_KEYWORDS);
pub static EEPROM_DUMP: Schema = Schema::new(EEPROM_DUMP_KEYWORDS);
pub static CHANGE_EEPROM: Schema = Schema::new(CHANGE_EEPROM_KEYWORDS);
pub static GET_DUMP: Schema = Schema::new(GET_DUMP_KEYWORDS);

static IDENTIFY_ARGS: &[PositionalDef] = &[PositionalDef::optional("seconds", ValueKind::U32)];
static SELF_TEST_ARGS: &[PositionalDef] =
    &[PositionalDef::optional("mode", ValueKind::Choice(SelfTestMode::NAMES))];
static FLASH_ARGS: &[PositionalDef] = &[
    PositionalDef::required("file", ValueKind::Word),
    PositionalDef::optional("region", ValueKind::U32),
];
static SET_DUMP_ARGS: &[PositionalDef] = &[PositionalDef::required("flag", ValueKind::U32)];

pub fn parse_pause(
    tokens: &mut TokenStream<'_>,
    caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_keywords(&PAUSE, tokens, caps)?;
    Ok(Command::SetPause(PauseArgs {
        autoneg: fields.bool("autoneg"),
        rx: fields.bool("rx"),
        tx: fields.bool("tx"),
    }))
}

pub fn parse_coalesce(
    tokens: &mut TokenStream<'_>,
    caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_keywords(&COALESCE, tokens, caps)?;
    let counters = COALESCE_COUNTERS
        .iter()
        .filter_map(|name| fields.u32(name).map(|value| (*name, value)))
        .collect();
    Ok(Command::SetCoalesce(CoalesceArgs {
        adaptive_rx: fields.bool("adaptive-rx"),
        adaptive_tx: fields.bool("adaptive-tx"),
        cqe_mode_rx: fields.bool("cqe-mode-rx"),
        cqe_mode_tx: fields.bool("cqe-mode-tx"),
        counters,
    }))
}

pub fn parse_ring(
    tokens: &mut TokenStream<'_>,
    caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_keywords(&RING, tokens, caps)?;
    Ok(Command::SetRing(RingArgs {
        rx: fields.u32("rx"),
        rx_mini: fields.u32("rx-mini"),
        rx_jumbo: fields.u32("rx-jumbo"),
        tx: fields.u32("tx"),
        rx_buf_len: fields.u32("rx-buf-len"),
        cqe_size: fields.u32("cqe-size"),
        tx_push: fields.bool("tx-push"),
    }))
}

pub fn parse_channels(
    tokens: &mut TokenStream<'_>,
    caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_keywords(&CHANNELS, tokens, caps)?;
    Ok(Command::SetChannels(ChannelArgs {
        rx: fields.u32("rx"),
        tx: fields.u32("tx"),
        other: fields.u32("other"),
        combined: fields.u32("combined"),
    }))
}

pub fn parse_register_dump(
    tokens: &mut TokenStream<'_>,
    caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_keywords(&REGISTER_DUMP, tokens, caps)?;
    Ok(Command::RegisterDump(RegisterDumpArgs {
        raw: fields.bool("raw"),
        hex: fields.bool("hex"),
        file: fields.word("file"),
    }))
}

pub fn parse_eeprom_dump(
    tokens: &mut TokenStream<'_>,
    caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_keywords(&EEPROM_DUMP, tokens, caps)?;
    Ok(Command::EepromDump(EepromDumpArgs {
        raw: fields.bool("raw"),
        offset: fields.u32("offset"),
        length: fields.u32("length"),
    }))
}

pub fn parse_change_eeprom(
    tokens: &mut TokenStream<'_>,
    caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_keywords(&CHANGE_EEPROM, tokens, caps)?;
    Ok(Command::ChangeEeprom(ChangeEepromArgs {
        magic: fields.u32("magic"),
        offset: fields.u32("offset"),
        length: fields.u32("length"),
        value: fields.u8("value"),
    }))
}

pub fn parse_get_dump(
    tokens: &mut TokenStream<'_>,
    caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_keywords(&GET_DUMP, tokens, caps)?;
    Ok(Command::GetDump {
        data: fields.word("data"),
    })
}

pub fn parse_identify(
    tokens: &mut TokenStream<'_>,
    _caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_positional(IDENTIFY_ARGS, tokens)?;
    Ok(Command::Identify {
        seconds: fields.u32("seconds"),
    })
}

pub fn parse_self_test(
    tokens: &mut TokenStream<'_>,
    _caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_positional(SELF_TEST_ARGS, tokens)?;
    Ok(Command::SelfTest {
        mode: fields.choice("mode"),
    })
}

pub fn parse_flash(
    tokens: &mut TokenStream<'_>,
    _caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_positional(FLASH_ARGS, tokens)?;
    Ok(Command::Flash {
        file: fields
            .word("file")
            .ok_or_else(|| ParseError::MissingValue("file".to_string()))?,
        region: fields.u32("region"),
    })
}

pub fn parse_set_dump(
    tokens: &mut TokenStream<'_>,
    _caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_positional(SET_DUMP_ARGS, tokens)?;
    Ok(Command::SetDump {
        flag: fields
            .u32("flag")
            .ok_or_else(|| ParseError::MissingValue("flag".to_string()))?,
    })
}

pub fn parse_features(
    tokens: &mut TokenStream<'_>,
    _caps: &Capabilities,
) -> Result<Command, ParseError> {
    parse_toggles(tokens).map(Command::SetFeatures)
}

pub fn parse_priv_flags(
    tokens: &mut TokenStream<'_>,
    _caps: &Capabilities,
) -> Result<Command, ParseError> {
    parse_toggles(tokens).map(Command::SetPrivFlags)
}
