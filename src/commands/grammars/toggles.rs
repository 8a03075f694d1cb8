//! `<name> on|off` lists for `-K`/`--features` and `--set-priv-flags`.
//!
//! Feature and private flag names are device facts, so any name is accepted
//! here and checked by the backend.

use crate::commands::structured::Toggle;
use crate::commands::tokenizer::TokenStream;
use crate::commands::values::parse_bool;
use crate::error::ParseError;

/// Reads one or more `<name> on|off` pairs until the tokens run out.
pub fn parse_toggles(tokens: &mut TokenStream<'_>) -> Result<Vec<Toggle>, ParseError> {
    let mut toggles: Vec<Toggle> = Vec::new();
    while let Some(name) = tokens.next() {
        let state = tokens
            .next()
            .ok_or_else(|| ParseError::MissingValue(name.to_string()))?;
        let enabled = parse_bool(state).map_err(|reason| ParseError::invalid(name, state, reason))?;
        if toggles.iter().any(|t| t.name == name) {
            return Err(ParseError::DuplicateKeyword(name.to_string()));
        }
        toggles.push(Toggle::new(name, enabled));
    }
    if toggles.is_empty() {
        return Err(ParseError::MissingRequiredKeyword("<name> on|off".to_string()));
    }
    Ok(toggles)
}
