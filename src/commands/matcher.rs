//! Generic keyword/value grammar matcher.
//!
//! One left-to-right pass over the remaining tokens: read a keyword, look it
//! up in the schema, consume its declared arity, record the value. Constraint
//! checks that need the whole field set (required keywords, prerequisites)
//! run after the tokens are exhausted.

use super::schema::{Arity, KeywordDef, PositionalDef, Schema};
use super::tokenizer::TokenStream;
use super::values::{HexMask, MacAddr, TokenEnum, Value};
use crate::backend::Capabilities;
use crate::error::ParseError;
use std::collections::BTreeMap;
use std::net::Ipv4Addr;
use tracing::trace;

/// Keyword → value map produced by a successful match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    values: BTreeMap<&'static str, Value>,
    masks: BTreeMap<&'static str, Value>,
}

impl FieldMap {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Mask recorded for a maskable keyword.
    pub fn mask(&self, name: &str) -> Option<&Value> {
        self.masks.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.masks.is_empty()
    }

    pub fn u8(&self, name: &str) -> Option<u8> {
        self.get(name).and_then(Value::as_u8)
    }

    pub fn u16(&self, name: &str) -> Option<u16> {
        self.get(name).and_then(Value::as_u16)
    }

    pub fn u32(&self, name: &str) -> Option<u32> {
        self.get(name).and_then(Value::as_u32)
    }

    pub fn i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn word(&self, name: &str) -> Option<String> {
        self.get(name).and_then(Value::as_word).map(str::to_string)
    }

    pub fn hex_mask(&self, name: &str) -> Option<HexMask> {
        self.get(name).and_then(Value::as_mask).cloned()
    }

    pub fn mac(&self, name: &str) -> Option<MacAddr> {
        self.get(name).and_then(Value::as_mac)
    }

    pub fn ipv4(&self, name: &str) -> Option<Ipv4Addr> {
        self.get(name).and_then(Value::as_ipv4)
    }

    pub fn bytes(&self, name: &str) -> Option<Vec<u8>> {
        self.get(name).and_then(Value::as_bytes).map(<[u8]>::to_vec)
    }

    /// Closed-enumeration value converted to its typed form.
    pub fn choice<T: TokenEnum>(&self, name: &str) -> Option<T> {
        self.get(name)
            .and_then(Value::as_word)
            .and_then(T::from_token)
    }

    /// Elements of a list value as `u32`s.
    pub fn u32_list(&self, name: &str) -> Option<Vec<u32>> {
        self.get(name)
            .and_then(Value::as_list)
            .map(|items| items.iter().filter_map(Value::as_u32).collect())
    }

    /// Elements of a list value as words.
    pub fn word_list(&self, name: &str) -> Option<Vec<String>> {
        self.get(name).and_then(Value::as_list).map(|items| {
            items
                .iter()
                .filter_map(Value::as_word)
                .map(str::to_string)
                .collect()
        })
    }

    fn insert(&mut self, name: &'static str, value: Value) {
        self.values.insert(name, value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaskSpelling {
    /// `m <value>` right after the masked value.
    Short,
    /// `<keyword>-mask <value>` anywhere.
    Suffix,
}

/// Matches `tokens` against a keyword schema until the tokens run out.
pub fn match_keywords(
    schema: &Schema,
    tokens: &mut TokenStream<'_>,
    caps: &Capabilities,
) -> Result<FieldMap, ParseError> {
    let mut fields = FieldMap::default();
    let mut groups: BTreeMap<&'static str, &'static str> = BTreeMap::new();
    let mut spelling: Option<MaskSpelling> = None;
    let mut last_maskable: Option<&'static KeywordDef> = None;

    while let Some(token) = tokens.next() {
        if token == "m" {
            match last_maskable.take() {
                Some(def) => {
                    record_mask(&mut fields, &mut spelling, def, MaskSpelling::Short, tokens)?;
                    continue;
                }
                None => return Err(ParseError::UnknownKeyword(token.to_string())),
            }
        }
        last_maskable = None;

        let Some(def) = schema.lookup(token, caps) else {
            let masked = token
                .strip_suffix("-mask")
                .and_then(|base| schema.lookup(base, caps))
                .filter(|def| def.maskable);
            match masked {
                Some(def) => {
                    record_mask(&mut fields, &mut spelling, def, MaskSpelling::Suffix, tokens)?;
                    continue;
                }
                None => return Err(ParseError::UnknownKeyword(token.to_string())),
            }
        };

        if fields.contains(def.name) {
            return Err(ParseError::DuplicateKeyword(def.name.to_string()));
        }
        if let Some(group) = def.group {
            if let Some(other) = groups.get(group) {
                return Err(ParseError::conflict(def.name, *other));
            }
            groups.insert(group, def.name);
        }

        let value = consume_value(def, schema, tokens, caps)?;
        trace!(keyword = def.name, ?value, "matched keyword");
        fields.insert(def.name, value);

        if def.maskable {
            last_maskable = Some(def);
        }
    }

    check_constraints(schema, &fields, caps)?;
    Ok(fields)
}

/// Matches ordered arguments; optional ones may only trail required ones.
pub fn match_positional(
    defs: &[PositionalDef],
    tokens: &mut TokenStream<'_>,
) -> Result<FieldMap, ParseError> {
    let mut fields = FieldMap::default();
    for def in defs {
        match tokens.next() {
            Some(token) => fields.insert(def.name, def.value.parse(def.name, token)?),
            None if def.required => return Err(ParseError::MissingValue(def.name.to_string())),
            None => break,
        }
    }
    tokens.expect_end()?;
    Ok(fields)
}

fn consume_value(
    def: &'static KeywordDef,
    schema: &Schema,
    tokens: &mut TokenStream<'_>,
    caps: &Capabilities,
) -> Result<Value, ParseError> {
    let missing = || ParseError::MissingValue(def.name.to_string());
    match def.arity {
        Arity::Count(0) => Ok(Value::Flag),
        Arity::Count(1) => {
            let token = tokens.next().ok_or_else(missing)?;
            def.value.parse(def.name, token)
        }
        Arity::Count(n) => {
            let items = (0..n)
                .map(|_| {
                    let token = tokens.next().ok_or_else(missing)?;
                    def.value.parse(def.name, token)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::List(items))
        }
        Arity::List => {
            let first = tokens.next().ok_or_else(missing)?;
            let mut items = vec![def.value.parse(def.name, first)?];
            while let Some(next) = tokens.peek() {
                if schema.lookup(next, caps).is_some() || !def.value.accepts(next) {
                    break;
                }
                items.push(def.value.parse(def.name, next)?);
                tokens.next();
            }
            Ok(Value::List(items))
        }
        Arity::Compound(parse) => parse(def.name, tokens),
    }
}

fn record_mask(
    fields: &mut FieldMap,
    spelling: &mut Option<MaskSpelling>,
    def: &'static KeywordDef,
    used: MaskSpelling,
    tokens: &mut TokenStream<'_>,
) -> Result<(), ParseError> {
    let keyword = format!("{}-mask", def.name);
    match *spelling {
        Some(MaskSpelling::Short) if used == MaskSpelling::Suffix => {
            return Err(ParseError::conflict(keyword, "m"));
        }
        Some(MaskSpelling::Suffix) if used == MaskSpelling::Short => {
            return Err(ParseError::conflict("m", "-mask keywords"));
        }
        _ => *spelling = Some(used),
    }
    if fields.masks.contains_key(def.name) {
        return Err(ParseError::DuplicateKeyword(keyword));
    }

    let token = tokens
        .next()
        .ok_or_else(|| ParseError::MissingValue(keyword.clone()))?;
    let value = def.value.parse(&keyword, token)?;
    fields.masks.insert(def.name, value);
    Ok(())
}

fn check_constraints(
    schema: &Schema,
    fields: &FieldMap,
    caps: &Capabilities,
) -> Result<(), ParseError> {
    let available = schema
        .keywords
        .iter()
        .filter(|def| def.availability.is_available(caps));

    for def in available {
        let present = fields.contains(def.name);
        if def.required && !present {
            return Err(ParseError::MissingRequiredKeyword(def.name.to_string()));
        }
        if present
            && !def.requires.is_empty()
            && !def.requires.iter().any(|name| fields.contains(name))
        {
            return Err(ParseError::MissingPrerequisite {
                keyword: def.name.to_string(),
                requires: def.requires.join(", "),
            });
        }
    }

    if let Some(name) = fields.masks.keys().find(|name| !fields.contains(name)) {
        return Err(ParseError::MissingPrerequisite {
            keyword: format!("{name}-mask"),
            requires: name.to_string(),
        });
    }

    if schema.require_any && fields.is_empty() {
        return Err(ParseError::MissingRequiredKeyword(format!(
            "one of: {}",
            schema.available_names(caps).join(", ")
        )));
    }
    Ok(())
}
