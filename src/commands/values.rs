//! Value parsers that turn a single token into a typed value.
//!
//! Each keyword in a grammar schema names one [`ValueKind`]; the matcher calls
//! [`ValueKind::parse`] for every value token it consumes.

use crate::error::ParseError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Arbitrary-width hexadecimal number.
///
/// Stored big-endian with leading zero bytes stripped, so `0x0001` and `1`
/// compare equal no matter how wide the input was.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HexMask {
    bytes: Vec<u8>,
}

impl HexMask {
    /// Parses a hex digit string, with or without a `0x` prefix.
    pub fn parse(s: &str) -> Result<Self, &'static str> {
        let digits = strip_hex_prefix(s).unwrap_or(s);
        if digits.is_empty() {
            return Err("no hexadecimal digits");
        }

        let nibbles = digits
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or("not a hexadecimal number")?;

        // An odd digit count leaves a lone high nibble in the first byte.
        let (head, tail) = nibbles.split_at(nibbles.len() % 2);
        let mut bytes = Vec::with_capacity(nibbles.len().div_ceil(2));
        bytes.extend_from_slice(head);
        bytes.extend(tail.chunks(2).map(|pair| (pair[0] << 4) | pair[1]));

        let first_set = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        bytes.drain(..first_set);
        Ok(Self { bytes })
    }

    /// Big-endian bytes without leading zeros (empty for zero).
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for HexMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bytes.is_empty() {
            return f.write_str("0x0");
        }
        f.write_str("0x")?;
        for (i, b) in self.bytes.iter().enumerate() {
            if i == 0 {
                write!(f, "{b:x}")?;
            } else {
                write!(f, "{b:02x}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for HexMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Six-octet hardware address (also used for the Wake-on-LAN password).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    /// Parses `xx:xx:xx:xx:xx:xx`.
    pub fn parse(s: &str) -> Result<Self, &'static str> {
        let mut octets = [0u8; 6];
        let mut parts = s.split(':');
        for octet in octets.iter_mut() {
            let part = parts.next().ok_or("expected six colon-separated octets")?;
            *octet = parse_hex_octet(part)?;
        }
        if parts.next().is_some() {
            return Err("expected six colon-separated octets");
        }
        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Closed enumeration spelled as fixed tokens on the command line.
///
/// `NAMES[i]` is the spelling of `VARIANTS[i]`; schemas use `NAMES` as the
/// literal set of a [`ValueKind::Choice`].
pub trait TokenEnum: Sized + Copy + PartialEq + 'static {
    const NAMES: &'static [&'static str];
    const VARIANTS: &'static [Self];

    fn from_token(token: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .position(|name| *name == token)
            .and_then(|i| Self::VARIANTS.get(i).copied())
    }

    fn token(self) -> &'static str {
        Self::VARIANTS
            .iter()
            .position(|v| *v == self)
            .and_then(|i| Self::NAMES.get(i).copied())
            .unwrap_or_default()
    }
}

/// A parsed value token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Keyword present, no value (arity 0).
    Flag,
    Uint(u64),
    Int(i64),
    Mask(HexMask),
    Bool(bool),
    Mac(MacAddr),
    Ipv4(Ipv4Addr),
    /// Enumeration member, letter set, file name or other free word.
    Word(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    /// Named on/off pairs (message level flags).
    Toggles(Vec<(String, bool)>),
}

impl Value {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint(v) => Some(*v),
            _ => None,
        }
    }

    /// Narrowing accessor; the schema's bit width guarantees the value fits.
    pub fn as_u32(&self) -> Option<u32> {
        self.as_u64().and_then(|v| u32::try_from(v).ok())
    }

    pub fn as_u16(&self) -> Option<u16> {
        self.as_u64().and_then(|v| u16::try_from(v).ok())
    }

    pub fn as_u8(&self) -> Option<u8> {
        self.as_u64().and_then(|v| u8::try_from(v).ok())
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_mask(&self) -> Option<&HexMask> {
        match self {
            Self::Mask(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_mac(&self) -> Option<MacAddr> {
        match self {
            Self::Mac(m) => Some(*m),
            _ => None,
        }
    }

    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            Self::Ipv4(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Parser selector attached to each keyword of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Unsigned integer of the given width; decimal unless `0x`-prefixed.
    Uint { bits: u32 },
    /// Signed 64-bit integer; decimal unless `0x`-prefixed.
    Int,
    /// Arbitrary-width hex number; bare digits are hex.
    Mask,
    /// `on` or `off`.
    Bool,
    Mac,
    Ipv4,
    /// One of a closed, case-sensitive set of literals.
    Choice(&'static [&'static str]),
    /// Non-empty string over the given alphabet.
    Letters(&'static str),
    /// Colon-separated hex octets of any count.
    HexBytes,
    /// Any token.
    Word,
}

impl ValueKind {
    pub const U8: Self = Self::Uint { bits: 8 };
    pub const U16: Self = Self::Uint { bits: 16 };
    pub const U32: Self = Self::Uint { bits: 32 };
    pub const U64: Self = Self::Uint { bits: 64 };

    /// Parses `token` as the value of `keyword`.
    pub fn parse(&self, keyword: &str, token: &str) -> Result<Value, ParseError> {
        let invalid = |reason: &str| ParseError::invalid(keyword, token, reason);
        match *self {
            Self::Uint { bits } => parse_uint(token, bits).map(Value::Uint).map_err(invalid),
            Self::Int => parse_int(token).map(Value::Int).map_err(invalid),
            Self::Mask => HexMask::parse(token).map(Value::Mask).map_err(invalid),
            Self::Bool => parse_bool(token).map(Value::Bool).map_err(invalid),
            Self::Mac => MacAddr::parse(token).map(Value::Mac).map_err(invalid),
            Self::Ipv4 => parse_ipv4(token).map(Value::Ipv4).map_err(invalid),
            Self::Choice(options) => {
                if options.contains(&token) {
                    Ok(Value::Word(token.to_string()))
                } else {
                    Err(invalid(&format!("expected one of: {}", options.join(", "))))
                }
            }
            Self::Letters(alphabet) => {
                if !token.is_empty() && token.chars().all(|c| alphabet.contains(c)) {
                    Ok(Value::Word(token.to_string()))
                } else {
                    Err(invalid(&format!("expected letters from '{alphabet}'")))
                }
            }
            Self::HexBytes => parse_hex_bytes(token).map(Value::Bytes).map_err(invalid),
            Self::Word => {
                if token.is_empty() {
                    Err(invalid("empty value"))
                } else {
                    Ok(Value::Word(token.to_string()))
                }
            }
        }
    }

    /// Whether `token` would parse; used by greedy lists to find their end.
    pub fn accepts(&self, token: &str) -> bool {
        self.parse("", token).is_ok()
    }
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

/// Parses an unsigned integer that must fit in `bits` bits.
pub fn parse_uint(s: &str, bits: u32) -> Result<u64, &'static str> {
    let (digits, radix) = match strip_hex_prefix(s) {
        Some(rest) => (rest, 16),
        None => (s, 10),
    };
    if digits.is_empty() {
        return Err("no digits");
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(if radix == 16 {
            "not a hexadecimal number"
        } else {
            "not a number"
        });
    }
    let value = u64::from_str_radix(digits, radix).map_err(|_| "out of range")?;
    if bits < 64 && value >> bits != 0 {
        return Err("out of range");
    }
    Ok(value)
}

/// Parses a signed 64-bit integer.
pub fn parse_int(s: &str) -> Result<i64, &'static str> {
    match s.strip_prefix('-') {
        Some(rest) => {
            let magnitude = parse_uint(rest, 64)?;
            if magnitude > i64::MAX as u64 + 1 {
                return Err("out of range");
            }
            Ok((magnitude as i64).wrapping_neg())
        }
        None => parse_uint(s, 63).map(|v| v as i64),
    }
}

pub fn parse_bool(s: &str) -> Result<bool, &'static str> {
    match s {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err("expected 'on' or 'off'"),
    }
}

/// Parses a dotted quad of decimal octets.
pub fn parse_ipv4(s: &str) -> Result<Ipv4Addr, &'static str> {
    let mut octets = [0u8; 4];
    let mut parts = s.split('.');
    for octet in octets.iter_mut() {
        let part = parts.next().ok_or("expected four dotted octets")?;
        if part.is_empty() || part.len() > 3 || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err("expected four dotted octets");
        }
        *octet = part.parse().map_err(|_| "octet out of range")?;
    }
    if parts.next().is_some() {
        return Err("expected four dotted octets");
    }
    Ok(Ipv4Addr::from(octets))
}

/// Parses `xx:xx:...` into bytes.
pub fn parse_hex_bytes(s: &str) -> Result<Vec<u8>, &'static str> {
    s.split(':').map(parse_hex_octet).collect()
}

fn parse_hex_octet(part: &str) -> Result<u8, &'static str> {
    if part.len() != 2 || !part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("expected two hex digits per octet");
    }
    u8::from_str_radix(part, 16).map_err(|_| "expected two hex digits per octet")
}
