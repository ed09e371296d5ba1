//! Static slot tables for the core vocabulary types.
//!
//! Each table is the declarative schema the codec runs against: slot order
//! is emission order, and each candidate list is the disambiguation policy
//! for that slot, in priority order.

use crate::model::schema::{CandidateKind, Capability, Cardinality, NodeSchema, SlotSpec};

const fn functional(key: &'static str, candidates: &'static [CandidateKind]) -> SlotSpec {
    SlotSpec {
        key,
        cardinality: Cardinality::Functional,
        candidates,
        language_map: false,
    }
}

const fn many(key: &'static str, candidates: &'static [CandidateKind]) -> SlotSpec {
    SlotSpec {
        key,
        cardinality: Cardinality::NonFunctional,
        candidates,
        language_map: false,
    }
}

/// A text slot: plain string first, then language-tagged, with a sibling
/// `<key>Map` natural-language map.
const fn text(key: &'static str) -> SlotSpec {
    SlotSpec {
        key,
        cardinality: Cardinality::NonFunctional,
        candidates: TEXT,
        language_map: true,
    }
}

pub(crate) const TEXT: &[CandidateKind] = &[CandidateKind::String, CandidateKind::LangString];
pub(crate) const OBJECT_OR_LINK: &[CandidateKind] = &[
    CandidateKind::Object(Capability::Object),
    CandidateKind::Link,
    CandidateKind::Iri,
];
pub(crate) const URL: &[CandidateKind] = &[CandidateKind::Iri, CandidateKind::Link];
const IRI: &[CandidateKind] = &[CandidateKind::Iri];
const FLOAT: &[CandidateKind] = &[CandidateKind::Float];
const DATE_TIME: &[CandidateKind] = &[CandidateKind::DateTime];
const DURATION: &[CandidateKind] = &[CandidateKind::Duration];
const MEDIA_TYPE: &[CandidateKind] = &[CandidateKind::MimeType];

/// The slot table shared by every object-capable type, optionally extended
/// with type-specific slots.
macro_rules! object_slots {
    ($($extra:expr),* $(,)?) => {
        &[
            text("name"),
            text("content"),
            functional("mediaType", MEDIA_TYPE),
            functional("published", DATE_TIME),
            functional("duration", DURATION),
            many("url", URL),
            many("icon", OBJECT_OR_LINK),
            many("attributedTo", OBJECT_OR_LINK),
            $($extra,)*
        ]
    };
}

pub static OBJECT: NodeSchema = NodeSchema {
    token: "Object",
    slots: object_slots![],
};

pub static NOTE: NodeSchema = NodeSchema {
    token: "Note",
    slots: object_slots![],
};

pub static IMAGE: NodeSchema = NodeSchema {
    token: "Image",
    slots: object_slots![],
};

pub static OFFER: NodeSchema = NodeSchema {
    token: "Offer",
    slots: object_slots![
        many("actor", OBJECT_OR_LINK),
        many("object", OBJECT_OR_LINK),
        many("target", OBJECT_OR_LINK),
    ],
};

pub static COLLECTION: NodeSchema = NodeSchema {
    token: "Collection",
    slots: object_slots![
        many("items", OBJECT_OR_LINK),
        functional("totalItems", FLOAT),
    ],
};

pub static LINK: NodeSchema = NodeSchema {
    token: "Link",
    slots: &[
        functional("href", IRI),
        text("name"),
        functional("mediaType", MEDIA_TYPE),
        functional("height", FLOAT),
        functional("width", FLOAT),
    ],
};
