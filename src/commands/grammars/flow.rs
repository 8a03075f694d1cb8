//! Receive flow classification: `-n`/`-u` queries and `-N`/`-U` rules.
//!
//! `-N` takes one of three forms, picked by its first token:
//! - `rx-flow-hash <type> <fields>`: select the hashed header fields
//! - `delete <location>`: remove a rule
//! - `flow-type <type> ...`: add a rule; the type picks the keyword set

use crate::backend::Capabilities;
use crate::commands::matcher::{match_keywords, match_positional, FieldMap};
use crate::commands::schema::{KeywordDef, PositionalDef, Schema};
use crate::commands::structured::{
    Command, FlowConfig, FlowQuery, FlowRule, FlowSpec, FlowType, HashFlowType, L4Match, Masked,
};
use crate::commands::tokenizer::TokenStream;
use crate::commands::values::{TokenEnum, Value, ValueKind};
use crate::error::ParseError;
use tracing::debug;

static QUERY_KEYWORDS: &[KeywordDef] = &[
    KeywordDef::new("rx-flow-hash", ValueKind::Choice(HashFlowType::NAMES)).group("query"),
    KeywordDef::new("rule", ValueKind::U32).group("query"),
];

static QUERY: Schema = Schema::new(QUERY_KEYWORDS);

static HASH_ARGS: &[PositionalDef] = &[
    PositionalDef::required("rx-flow-hash", ValueKind::Choice(HashFlowType::NAMES)),
    PositionalDef::required("fields", ValueKind::Letters("mvtsdfnr")),
];

static DELETE_ARGS: &[PositionalDef] = &[PositionalDef::required("delete", ValueKind::U32)];

const SRC: KeywordDef = KeywordDef::new("src", ValueKind::Mac).maskable().required();
const DST: KeywordDef = KeywordDef::new("dst", ValueKind::Mac).maskable().required();
const PROTO: KeywordDef = KeywordDef::new("proto", ValueKind::U16).maskable();
const SRC_IP: KeywordDef = KeywordDef::new("src-ip", ValueKind::Ipv4).maskable().required();
const DST_IP: KeywordDef = KeywordDef::new("dst-ip", ValueKind::Ipv4).maskable().required();
const TOS: KeywordDef = KeywordDef::new("tos", ValueKind::U8).maskable();
const L4PROTO: KeywordDef = KeywordDef::new("l4proto", ValueKind::U8).maskable();
const L4DATA: KeywordDef = KeywordDef::new("l4data", ValueKind::U32).maskable();
const SRC_PORT: KeywordDef = KeywordDef::new("src-port", ValueKind::U16).maskable().required();
const DST_PORT: KeywordDef = KeywordDef::new("dst-port", ValueKind::U16).maskable().required();
const SPI: KeywordDef = KeywordDef::new("spi", ValueKind::U32).maskable().required();
const VLAN: KeywordDef = KeywordDef::new("vlan", ValueKind::U16).maskable();
const LOC: KeywordDef = KeywordDef::new("loc", ValueKind::U32);
const CONTEXT: KeywordDef = KeywordDef::new("context", ValueKind::U32);
const ACTION: KeywordDef = KeywordDef::new("action", ValueKind::Int).required();

static ETHER_KEYWORDS: &[KeywordDef] = &[SRC, DST, PROTO, VLAN, LOC, CONTEXT, ACTION];
static IP4_KEYWORDS: &[KeywordDef] = &[
    SRC_IP, DST_IP, TOS, L4PROTO, L4DATA, VLAN, LOC, CONTEXT, ACTION,
];
static PORTS4_KEYWORDS: &[KeywordDef] = &[
    SRC_IP, DST_IP, TOS, SRC_PORT, DST_PORT, VLAN, LOC, CONTEXT, ACTION,
];
static SPI4_KEYWORDS: &[KeywordDef] = &[SRC_IP, DST_IP, TOS, SPI, VLAN, LOC, CONTEXT, ACTION];

static ETHER: Schema = Schema::new(ETHER_KEYWORDS);
static IP4: Schema = Schema::new(IP4_KEYWORDS);
static PORTS4: Schema = Schema::new(PORTS4_KEYWORDS);
static SPI4: Schema = Schema::new(SPI4_KEYWORDS);

/// Keyword grammar of a rule for the given flow type.
pub fn rule_schema(flow_type: FlowType) -> &'static Schema {
    match flow_type {
        FlowType::Ether => &ETHER,
        FlowType::Ip4 => &IP4,
        FlowType::Tcp4 | FlowType::Udp4 | FlowType::Sctp4 => &PORTS4,
        FlowType::Ah4 | FlowType::Esp4 => &SPI4,
    }
}

/// `-n`/`-u`: list rules, show one rule or show a flow hash.
pub fn parse_query(
    tokens: &mut TokenStream<'_>,
    caps: &Capabilities,
) -> Result<Command, ParseError> {
    let fields = match_keywords(&QUERY, tokens, caps)?;
    let query = if let Some(flow_type) = fields.choice("rx-flow-hash") {
        FlowQuery::RxFlowHash(flow_type)
    } else if let Some(rule) = fields.u32("rule") {
        FlowQuery::Rule(rule)
    } else {
        FlowQuery::ListRules
    };
    Ok(Command::ShowFlow(query))
}

/// `-N`/`-U`: configure a flow hash, add or delete a rule.
pub fn parse_config(
    tokens: &mut TokenStream<'_>,
    caps: &Capabilities,
) -> Result<Command, ParseError> {
    let form = tokens
        .next()
        .ok_or_else(|| ParseError::MissingValue("flow-type".to_string()))?;
    let config = match form {
        "rx-flow-hash" => {
            let fields = match_positional(HASH_ARGS, tokens)?;
            FlowConfig::RxFlowHash {
                flow_type: fields
                    .choice("rx-flow-hash")
                    .ok_or_else(|| ParseError::MissingValue("rx-flow-hash".to_string()))?,
                fields: fields
                    .word("fields")
                    .ok_or_else(|| ParseError::MissingValue("fields".to_string()))?,
            }
        }
        "delete" => {
            let fields = match_positional(DELETE_ARGS, tokens)?;
            let location = fields
                .u32("delete")
                .ok_or_else(|| ParseError::MissingValue("delete".to_string()))?;
            FlowConfig::DeleteRule(location)
        }
        "flow-type" => FlowConfig::AddRule(parse_rule(tokens, caps)?),
        other => return Err(ParseError::UnknownKeyword(other.to_string())),
    };
    Ok(Command::ConfigFlow(config))
}

fn parse_rule(tokens: &mut TokenStream<'_>, caps: &Capabilities) -> Result<FlowRule, ParseError> {
    let token = tokens
        .next()
        .ok_or_else(|| ParseError::MissingValue("flow-type".to_string()))?;
    ValueKind::Choice(FlowType::NAMES).parse("flow-type", token)?;
    let flow_type = FlowType::from_token(token)
        .ok_or_else(|| ParseError::invalid("flow-type", token, "unknown flow type"))?;
    debug!(flow_type = token, "matching classification rule");

    let fields = match_keywords(rule_schema(flow_type), tokens, caps)?;
    let spec = match flow_type {
        FlowType::Ether => FlowSpec::Ether {
            src: required(&fields, "src", Value::as_mac)?,
            dst: required(&fields, "dst", Value::as_mac)?,
            proto: masked(&fields, "proto", Value::as_u16),
        },
        _ => {
            let l4 = match flow_type {
                FlowType::Tcp4 | FlowType::Udp4 | FlowType::Sctp4 => L4Match::Ports {
                    src: required(&fields, "src-port", Value::as_u16)?,
                    dst: required(&fields, "dst-port", Value::as_u16)?,
                },
                FlowType::Ah4 | FlowType::Esp4 => {
                    L4Match::Spi(required(&fields, "spi", Value::as_u32)?)
                }
                _ => L4Match::Raw {
                    proto: masked(&fields, "l4proto", Value::as_u8),
                    data: masked(&fields, "l4data", Value::as_u32),
                },
            };
            FlowSpec::Ip4 {
                flow_type,
                src_ip: required(&fields, "src-ip", Value::as_ipv4)?,
                dst_ip: required(&fields, "dst-ip", Value::as_ipv4)?,
                tos: masked(&fields, "tos", Value::as_u8),
                l4,
            }
        }
    };

    Ok(FlowRule {
        spec,
        vlan: masked(&fields, "vlan", Value::as_u16),
        context: fields.u32("context"),
        location: fields.u32("loc"),
        action: fields
            .i64("action")
            .ok_or_else(|| ParseError::MissingRequiredKeyword("action".to_string()))?,
    })
}

fn masked<T>(
    fields: &FieldMap,
    name: &str,
    get: impl Fn(&Value) -> Option<T>,
) -> Option<Masked<T>> {
    let value = fields.get(name).and_then(&get)?;
    Some(Masked::new(value, fields.mask(name).and_then(&get)))
}

fn required<T>(
    fields: &FieldMap,
    name: &str,
    get: impl Fn(&Value) -> Option<T>,
) -> Result<Masked<T>, ParseError> {
    masked(fields, name, get).ok_or_else(|| ParseError::MissingRequiredKeyword(name.to_string()))
}
