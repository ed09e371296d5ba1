//! vocab-json: a JSON wire codec for polymorphic vocabulary types.
//!
//! This crate maps semantic-web-style vocabulary types ("Offer", "Image",
//! "Collection", ...) to and from a JSON-object wire format in which a
//! single property may hold heterogeneous, multi-valued, and
//! forward-compatible data.
//!
//! # Overview
//!
//! Every declared property slot resolves an ambiguous wire value into one
//! typed alternative: an embedded sub-object, a link, an IRI reference, a
//! scalar literal, or — when nothing interprets it — an opaque payload
//! preserved verbatim. The codec is built for:
//! - **Forward compatibility**: unknown types and keys never fail; they
//!   round-trip losslessly through opaque and extension storage
//! - **Wire compaction**: single-element lists fold to bare values, empty
//!   slots omit their keys
//! - **Explicit disambiguation**: each slot's candidate order is declarative
//!   schema data, not implicit code order
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use vocab_json::vocab::{self, Offer};
//! use vocab_json::Registry;
//!
//! // Build and seal the registry once at startup.
//! let mut registry = Registry::new();
//! vocab::register_core(&mut registry).unwrap();
//! registry.seal();
//!
//! // Decode a wire object.
//! let offer = Offer::from_json(
//!     &json!({"actor": "https://example.com/alice"}),
//!     &registry,
//! )
//! .unwrap();
//!
//! let actor = offer.actor().unwrap();
//! assert_eq!(actor.get(0).unwrap().as_iri(), Some("https://example.com/alice"));
//!
//! // Encode back; the canonical type token is stamped automatically.
//! assert_eq!(
//!     offer.to_json().unwrap(),
//!     json!({"actor": "https://example.com/alice", "type": "Offer"})
//! );
//! ```
//!
//! # Modules
//!
//! - [`model`]: schema declarations, the per-occurrence union value, node
//!   state, natural-language maps
//! - [`codec`]: wire decoding/encoding (node driver, cardinality folding,
//!   value resolution, literal parsers)
//! - [`registry`]: the capability-partitioned, seal-once type registry
//! - [`vocab`]: concrete vocabulary types and registry wiring
//! - [`util`]: RFC 3339 date-time and ISO 8601 duration handling
//! - [`error`]: error types
//!
//! # Concurrency
//!
//! The codec is a pure, synchronous value transformation. A sealed
//! [`Registry`] is read-only and freely shared across threads; nodes are
//! single-owner values.

pub mod codec;
pub mod error;
pub mod model;
pub mod registry;
pub mod util;
pub mod vocab;

// Re-export commonly used types at crate root
pub use codec::{decode_node, decode_slot, decode_value, encode_node, encode_slot, encode_value};
pub use error::{DecodeError, EncodeError, RegistryError, SlotError};
pub use model::{
    CandidateKind, Capability, Cardinality, LangString, LanguageMap, Node, NodeData, NodeSchema,
    Slot, SlotSpec, SlotValue,
};
pub use registry::{Constructor, Registry};
pub use util::datetime::DateTime;
pub use util::duration::Duration;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
