//! Scalar literal parsers and encoders.
//!
//! Each parser answers for one [`CandidateKind`]: does this wire scalar have
//! my shape, and if so, what value does it carry? Shape rejection and
//! content malformation are distinct outcomes — resolution falls through on
//! rejection but may surface malformation as an error for strict-only slots.

use serde_json::{Number, Value};

use crate::error::EncodeError;
use crate::model::schema::CandidateKind;
use crate::model::value::{LangString, SlotValue};
use crate::util::datetime::DateTime;
use crate::util::duration::Duration;

/// Outcome of offering a wire scalar to one literal parser.
#[derive(Debug)]
pub(crate) enum Tried {
    /// The parser claims the value.
    Accept(SlotValue),
    /// The value's JSON shape is not this parser's.
    Reject,
    /// The shape matched but the content is malformed (strict kinds only).
    Malformed(&'static str, String),
}

/// Offers a wire scalar to the parser for one candidate kind.
///
/// Node kinds always reject here; they are resolved via the registry.
pub(crate) fn try_literal(kind: CandidateKind, v: &Value) -> Tried {
    match kind {
        CandidateKind::String => match v.as_str() {
            Some(s) => Tried::Accept(SlotValue::String(s.to_string())),
            None => Tried::Reject,
        },
        CandidateKind::LangString => match v.as_str() {
            Some(s) => Tried::Accept(SlotValue::LangString(LangString {
                value: s.to_string(),
                language: None,
            })),
            None => Tried::Reject,
        },
        CandidateKind::Iri => match v.as_str() {
            Some(s) if is_iri(s) => Tried::Accept(SlotValue::Iri(s.to_string())),
            _ => Tried::Reject,
        },
        CandidateKind::Float => match v.as_f64() {
            Some(f) => Tried::Accept(SlotValue::Float(f)),
            None => Tried::Reject,
        },
        CandidateKind::DateTime => match v.as_str() {
            Some(s) => match DateTime::parse(s) {
                Ok(dt) => Tried::Accept(SlotValue::DateTime(dt)),
                Err(e) => Tried::Malformed("date-time", e.message),
            },
            None => Tried::Reject,
        },
        CandidateKind::Duration => match v.as_str() {
            Some(s) => match Duration::parse(s) {
                Ok(d) => Tried::Accept(SlotValue::Duration(d)),
                Err(e) => Tried::Malformed("duration", e.message),
            },
            None => Tried::Reject,
        },
        CandidateKind::MimeType => match v.as_str() {
            Some(s) if is_mime_type(s) => Tried::Accept(SlotValue::MimeType(s.to_string())),
            Some(s) => Tried::Malformed("media-type", format!("not a type/subtype token: {}", s)),
            None => Tried::Reject,
        },
        CandidateKind::Object(_) | CandidateKind::Link => Tried::Reject,
    }
}

/// Returns true if the string starts with a plausible IRI scheme
/// (`ALPHA *(ALPHA / DIGIT / "+" / "-" / ".") ":"`).
pub fn is_iri(s: &str) -> bool {
    let Some(colon) = s.find(':') else {
        return false;
    };
    let scheme = &s[..colon];

    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// RFC 6838 restricted-name characters.
fn is_mime_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '!' | '#' | '$' | '&' | '^' | '_' | '.' | '+' | '-')
}

/// Returns true if the string is a `type/subtype` media-type token.
pub fn is_mime_type(s: &str) -> bool {
    let Some((ty, subtype)) = s.split_once('/') else {
        return false;
    };
    !ty.is_empty()
        && !subtype.is_empty()
        && !subtype.contains('/')
        && ty.chars().all(is_mime_token_char)
        && subtype.chars().all(is_mime_token_char)
}

/// Encodes a float literal as a JSON number.
///
/// Whole values within the exact-integer range emit as JSON integers so that
/// integer wire input round-trips unchanged.
pub fn encode_float(key: &str, f: f64) -> Result<Value, EncodeError> {
    if !f.is_finite() {
        return Err(EncodeError::NonFiniteFloat { key: key.to_string() });
    }

    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53
    if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        return Ok(Value::Number(Number::from(f as i64)));
    }

    match Number::from_f64(f) {
        Some(n) => Ok(Value::Number(n)),
        None => Err(EncodeError::NonFiniteFloat { key: key.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_iri() {
        assert!(is_iri("https://example.com/alice"));
        assert!(is_iri("urn:uuid:1234"));
        assert!(is_iri("git+ssh://host/repo"));
        assert!(!is_iri("no scheme here"));
        assert!(!is_iri(":missing-scheme"));
        assert!(!is_iri("1st:digit-scheme"));
    }

    #[test]
    fn test_is_mime_type() {
        assert!(is_mime_type("text/html"));
        assert!(is_mime_type("application/ld+json"));
        assert!(is_mime_type("image/svg+xml"));
        assert!(!is_mime_type("texthtml"));
        assert!(!is_mime_type("text/"));
        assert!(!is_mime_type("/html"));
        assert!(!is_mime_type("text/ht ml"));
        assert!(!is_mime_type("a/b/c"));
    }

    #[test]
    fn test_try_literal_priority_shapes() {
        // A bare string is claimed by String, LangString, and (if shaped) Iri.
        let v = Value::String("https://example.com/".to_string());
        assert!(matches!(
            try_literal(CandidateKind::String, &v),
            Tried::Accept(SlotValue::String(_))
        ));
        assert!(matches!(
            try_literal(CandidateKind::Iri, &v),
            Tried::Accept(SlotValue::Iri(_))
        ));

        // Numbers reject every string-shaped parser.
        let n = serde_json::json!(4.5);
        assert!(matches!(try_literal(CandidateKind::String, &n), Tried::Reject));
        assert!(matches!(try_literal(CandidateKind::DateTime, &n), Tried::Reject));
        assert!(matches!(
            try_literal(CandidateKind::Float, &n),
            Tried::Accept(SlotValue::Float(_))
        ));
    }

    #[test]
    fn test_try_literal_malformed() {
        let v = Value::String("not a date".to_string());
        assert!(matches!(
            try_literal(CandidateKind::DateTime, &v),
            Tried::Malformed("date-time", _)
        ));
        assert!(matches!(
            try_literal(CandidateKind::Duration, &v),
            Tried::Malformed("duration", _)
        ));
        assert!(matches!(
            try_literal(CandidateKind::MimeType, &v),
            Tried::Malformed("media-type", _)
        ));
    }

    #[test]
    fn test_encode_float_integer_folding() {
        assert_eq!(encode_float("totalItems", 3.0).unwrap(), serde_json::json!(3));
        assert_eq!(encode_float("width", 4.5).unwrap(), serde_json::json!(4.5));
        assert!(matches!(
            encode_float("width", f64::NAN),
            Err(EncodeError::NonFiniteFloat { .. })
        ));
        assert!(matches!(
            encode_float("width", f64::INFINITY),
            Err(EncodeError::NonFiniteFloat { .. })
        ));
    }
}
