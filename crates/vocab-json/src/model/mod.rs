//! Data model types for the vocabulary codec:
//! - Schema declarations (slots, candidate kinds, cardinality)
//! - The per-occurrence union value
//! - Node state (type tokens, slots, language maps, extension bag)
//! - Natural-language maps

pub mod lang;
pub mod node;
pub mod schema;
pub mod value;

pub use lang::LanguageMap;
pub use node::{Node, NodeData, Slot};
pub use schema::{CandidateKind, Capability, Cardinality, NodeSchema, SlotSpec};
pub use value::{LangString, SlotValue};
