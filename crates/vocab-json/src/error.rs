//! Error types for wire decoding, encoding, and registry setup.

use thiserror::Error;

use crate::model::schema::Capability;

/// Error during wire decoding.
///
/// Decoding is all-or-nothing: any of these aborts the enclosing node
/// deserialization and no partially populated node is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The top-level wire value for a node was not a JSON object.
    #[error("node wire value must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// A wire shape that fundamentally cannot satisfy any of the slot's
    /// declared candidates (e.g. an object map at a slot that declares no
    /// object or link alternative).
    #[error("property {key:?}: {found} value cannot satisfy {expected}")]
    StructuralMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A strict literal parser rejected malformed content and the slot
    /// declared no forgiving alternative to fall back to.
    #[error("property {key:?}: malformed {kind} literal: {message}")]
    LiteralParse {
        key: String,
        kind: &'static str,
        message: String,
    },
}

/// Error during wire encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// NaN and infinities have no JSON representation.
    #[error("property {key:?}: non-finite float cannot be represented in JSON")]
    NonFiniteFloat { key: String },

    /// A functional slot was mutated past its 0..1 bound; it has no wire
    /// form for more than one value.
    #[error("property {key:?}: functional slot holds {len} values")]
    TooManyValues { key: String, len: usize },
}

/// Error from slot mutation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("index {index} out of range for slot of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Error while populating a [`Registry`](crate::registry::Registry).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// Registration attempted after [`seal`](crate::registry::Registry::seal).
    #[error("registry is sealed; cannot register type {token:?}")]
    Sealed { token: String },

    /// The (capability, token) pair already has a constructor.
    #[error("type {token:?} is already registered for capability {capability:?}")]
    Duplicate {
        capability: Capability,
        token: String,
    },
}
