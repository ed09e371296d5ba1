//! Per-occurrence value resolution.
//!
//! This is the heart of the codec: a single raw wire value meets a slot's
//! ordered candidate list and resolves to exactly one [`SlotValue`].
//! Unknown vocabulary material degrades silently to [`SlotValue::Opaque`]
//! so that round-tripping never loses data it cannot interpret.

use serde_json::{Map, Value};

use crate::codec::literal::{self, Tried};
use crate::codec::node::{decode_node, encode_node};
use crate::error::{DecodeError, EncodeError};
use crate::model::schema::{CandidateKind, Capability};
use crate::model::value::SlotValue;
use crate::registry::Registry;

/// Human-readable JSON shape name for error messages.
pub(crate) fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Flattens a wire `type` entry into its ordered tokens.
///
/// A lone string becomes a singleton list; array entries that are not
/// strings are ignored; any other shape yields no tokens.
pub(crate) fn type_tokens(map: &Map<String, Value>) -> Vec<&str> {
    match map.get("type") {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Resolves one raw wire value against a slot's ordered candidate list.
pub fn decode_value(
    key: &str,
    v: &Value,
    candidates: &[CandidateKind],
    registry: &Registry,
) -> Result<SlotValue, DecodeError> {
    if let Value::Object(map) = v {
        return decode_object(key, v, map, candidates, registry);
    }
    decode_scalar(key, v, candidates)
}

/// Resolution for wire objects: probe the registry with every declared
/// object/link candidate, in slot order, against every type token, in value
/// order. The first constructor found wins and the sub-object is decoded
/// recursively; anything unresolvable is preserved opaquely.
fn decode_object(
    key: &str,
    v: &Value,
    map: &Map<String, Value>,
    candidates: &[CandidateKind],
    registry: &Registry,
) -> Result<SlotValue, DecodeError> {
    if !candidates.iter().any(|c| c.is_node()) {
        return Err(DecodeError::StructuralMismatch {
            key: key.to_string(),
            expected: "any declared candidate (no object or link alternative)",
            found: "object",
        });
    }

    let tokens = type_tokens(map);
    for candidate in candidates {
        let capability = match candidate {
            CandidateKind::Object(capability) => *capability,
            CandidateKind::Link => Capability::Link,
            _ => continue,
        };
        for token in &tokens {
            if let Some(mut node) = registry.construct(capability, token) {
                // Sub-node decode errors abort the whole enclosing call.
                *node.data_mut() = decode_node(node.schema(), v, registry)?;
                return Ok(match candidate {
                    CandidateKind::Link => SlotValue::Link(node),
                    _ => SlotValue::Object(node),
                });
            }
        }
    }

    // No discriminator, or only unrecognized ones: forward-compatible
    // material, preserved verbatim. Never an error.
    Ok(SlotValue::Opaque(v.clone()))
}

/// Resolution for wire scalars: try the declared literal parsers in order.
fn decode_scalar(
    key: &str,
    v: &Value,
    candidates: &[CandidateKind],
) -> Result<SlotValue, DecodeError> {
    if !candidates.iter().any(|c| c.is_literal()) {
        return Err(DecodeError::StructuralMismatch {
            key: key.to_string(),
            expected: "any declared candidate (no literal alternative)",
            found: json_kind(v),
        });
    }

    let mut last_malformed: Option<(&'static str, String)> = None;
    for candidate in candidates.iter().filter(|c| c.is_literal()) {
        match literal::try_literal(*candidate, v) {
            Tried::Accept(value) => return Ok(value),
            Tried::Reject => {}
            Tried::Malformed(kind, message) => last_malformed = Some((kind, message)),
        }
    }

    // A forgiving alternative anywhere in the slot's declaration means
    // unparseable input is extension material, not an error.
    if candidates.iter().any(|c| c.is_forgiving()) {
        return Ok(SlotValue::Opaque(v.clone()));
    }

    match last_malformed {
        Some((kind, message)) => Err(DecodeError::LiteralParse {
            key: key.to_string(),
            kind,
            message,
        }),
        // Strict-only slot, but no parser even claimed the shape: keep it.
        None => Ok(SlotValue::Opaque(v.clone())),
    }
}

/// Emits the wire form of one resolved occurrence.
pub fn encode_value(key: &str, value: &SlotValue) -> Result<Value, EncodeError> {
    match value {
        SlotValue::Object(node) | SlotValue::Link(node) => {
            encode_node(node.schema(), node.data())
        }
        SlotValue::Iri(s) | SlotValue::String(s) | SlotValue::MimeType(s) => {
            Ok(Value::String(s.clone()))
        }
        SlotValue::LangString(ls) => Ok(Value::String(ls.value.clone())),
        SlotValue::Float(f) => literal::encode_float(key, *f),
        SlotValue::DateTime(dt) => Ok(Value::String(dt.to_rfc3339())),
        SlotValue::Duration(d) => Ok(Value::String(d.to_string())),
        SlotValue::Opaque(v) => Ok(v.clone()),
    }
}
