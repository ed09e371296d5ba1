//! The per-occurrence union value for property slots.
//!
//! Each wire occurrence of a slot resolves to exactly one [`SlotValue`]
//! variant. Material no declared candidate could interpret is preserved
//! verbatim in [`SlotValue::Opaque`] for lossless round-tripping.

use serde_json::Value;

use crate::model::node::Node;
use crate::util::datetime::DateTime;
use crate::util::duration::Duration;

/// A string literal with an optional language tag.
///
/// The bare wire form carries no tag; explicit tags travel in the sibling
/// natural-language map, so encoding always emits the bare string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangString {
    pub value: String,
    pub language: Option<String>,
}

/// One resolved occurrence of a property slot.
///
/// Being an enum, exactly one alternative is populated by construction;
/// variant access goes through the checked `as_*` accessors.
#[derive(Debug)]
pub enum SlotValue {
    /// An embedded typed sub-object.
    Object(Box<dyn Node>),
    /// An embedded link sub-object.
    Link(Box<dyn Node>),
    /// A plain IRI reference.
    Iri(String),
    /// A plain string literal.
    String(String),
    /// A language-taggable string literal.
    LangString(LangString),
    /// A float literal.
    Float(f64),
    /// An RFC 3339 date-time literal.
    DateTime(DateTime),
    /// An ISO 8601 duration literal.
    Duration(Duration),
    /// A media-type token literal.
    MimeType(String),
    /// Uninterpreted wire material, preserved verbatim.
    Opaque(Value),
}

impl SlotValue {
    pub fn as_object(&self) -> Option<&dyn Node> {
        match self {
            SlotValue::Object(n) => Some(n.as_ref()),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut dyn Node> {
        match self {
            SlotValue::Object(n) => Some(n.as_mut()),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&dyn Node> {
        match self {
            SlotValue::Link(n) => Some(n.as_ref()),
            _ => None,
        }
    }

    pub fn as_link_mut(&mut self) -> Option<&mut dyn Node> {
        match self {
            SlotValue::Link(n) => Some(n.as_mut()),
            _ => None,
        }
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            SlotValue::Iri(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SlotValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_lang_string(&self) -> Option<&LangString> {
        match self {
            SlotValue::LangString(ls) => Some(ls),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            SlotValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime> {
        match self {
            SlotValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            SlotValue::Duration(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_mime_type(&self) -> Option<&str> {
        match self {
            SlotValue::MimeType(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&Value> {
        match self {
            SlotValue::Opaque(v) => Some(v),
            _ => None,
        }
    }

    /// Returns true if this occurrence could not be interpreted.
    pub fn is_opaque(&self) -> bool {
        matches!(self, SlotValue::Opaque(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_accessors() {
        let v = SlotValue::Iri("https://example.com/alice".to_string());
        assert_eq!(v.as_iri(), Some("https://example.com/alice"));
        assert!(v.as_str().is_none());
        assert!(v.as_float().is_none());
        assert!(!v.is_opaque());
    }

    #[test]
    fn test_opaque_accessor() {
        let v = SlotValue::Opaque(serde_json::json!({"a": 1}));
        assert!(v.is_opaque());
        assert_eq!(v.as_opaque(), Some(&serde_json::json!({"a": 1})));
        assert!(v.as_iri().is_none());
    }
}
