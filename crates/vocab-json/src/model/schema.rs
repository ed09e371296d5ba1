//! Static schema declarations for vocabulary types.
//!
//! A [`NodeSchema`] lists the property slots a vocabulary type declares, and
//! each [`SlotSpec`] carries the ordered [`CandidateKind`] list that drives
//! wire-value disambiguation. The candidate order is the disambiguation
//! policy: resolution tries alternatives in exactly this order.

/// A role a vocabulary type can satisfy.
///
/// Capabilities partition the type registry: the same token may resolve to
/// different constructors under different capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Object,
    Link,
    Activity,
    Collection,
}

/// One typed alternative a slot accepts for a wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// An embedded typed sub-object, resolved via the given registry
    /// capability.
    Object(Capability),
    /// A hyperlink-style sub-object, resolved via the link capability.
    Link,
    /// A plain IRI reference.
    Iri,
    /// A plain string literal.
    String,
    /// A language-taggable string literal.
    LangString,
    /// A float literal.
    Float,
    /// An RFC 3339 date-time literal.
    DateTime,
    /// An ISO 8601 duration literal.
    Duration,
    /// A media-type token literal.
    MimeType,
}

impl CandidateKind {
    /// Returns true for kinds that resolve embedded sub-objects.
    pub fn is_node(self) -> bool {
        matches!(self, CandidateKind::Object(_) | CandidateKind::Link)
    }

    /// Returns true for kinds handled by the scalar literal parsers.
    pub fn is_literal(self) -> bool {
        !self.is_node()
    }

    /// Returns true for kinds that degrade silently to opaque storage when
    /// resolution fails. Strict kinds (float, date-time, duration, media
    /// type) instead surface a parse failure when no forgiving alternative
    /// is declared alongside them.
    pub fn is_forgiving(self) -> bool {
        matches!(
            self,
            CandidateKind::Object(_)
                | CandidateKind::Link
                | CandidateKind::Iri
                | CandidateKind::String
                | CandidateKind::LangString
        )
    }
}

/// How many values a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// 0 or 1 value.
    Functional,
    /// 0..N values; insertion order is semantic order.
    NonFunctional,
}

/// Declaration of one property slot on a vocabulary type.
#[derive(Debug, Clone, Copy)]
pub struct SlotSpec {
    /// The wire key.
    pub key: &'static str,
    pub cardinality: Cardinality,
    /// Accepted alternatives in disambiguation priority order.
    pub candidates: &'static [CandidateKind],
    /// Whether a sibling `<key>Map` natural-language map is declared.
    pub language_map: bool,
}

/// Declaration of a vocabulary type: its canonical token and slot list.
///
/// Slot order here is the fixed emission order during serialization.
#[derive(Debug)]
pub struct NodeSchema {
    /// The canonical type token, used for registry lookup and self-stamping.
    pub token: &'static str,
    pub slots: &'static [SlotSpec],
}

impl NodeSchema {
    /// Looks up a declared slot by its wire key.
    pub fn slot(&self, key: &str) -> Option<&'static SlotSpec> {
        self.slots.iter().find(|s| s.key == key)
    }

    /// Resolves a `<key>Map` wire key to the slot declaring the language map.
    pub fn language_map_slot(&self, wire_key: &str) -> Option<&'static SlotSpec> {
        let base = wire_key.strip_suffix("Map")?;
        self.slots.iter().find(|s| s.language_map && s.key == base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SLOTS: &[SlotSpec] = &[
        SlotSpec {
            key: "name",
            cardinality: Cardinality::NonFunctional,
            candidates: &[CandidateKind::String, CandidateKind::LangString],
            language_map: true,
        },
        SlotSpec {
            key: "published",
            cardinality: Cardinality::Functional,
            candidates: &[CandidateKind::DateTime],
            language_map: false,
        },
    ];

    static SCHEMA: NodeSchema = NodeSchema {
        token: "Thing",
        slots: SLOTS,
    };

    #[test]
    fn test_slot_lookup() {
        assert_eq!(SCHEMA.slot("name").unwrap().key, "name");
        assert!(SCHEMA.slot("nope").is_none());
    }

    #[test]
    fn test_language_map_lookup() {
        assert_eq!(SCHEMA.language_map_slot("nameMap").unwrap().key, "name");
        // `published` declares no language map.
        assert!(SCHEMA.language_map_slot("publishedMap").is_none());
        assert!(SCHEMA.language_map_slot("name").is_none());
    }

    #[test]
    fn test_kind_classification() {
        assert!(CandidateKind::Object(Capability::Object).is_node());
        assert!(CandidateKind::Link.is_node());
        assert!(CandidateKind::Iri.is_literal());
        assert!(CandidateKind::Iri.is_forgiving());
        assert!(!CandidateKind::DateTime.is_forgiving());
        assert!(!CandidateKind::MimeType.is_forgiving());
    }
}
