//! Wire encoding/decoding for vocabulary nodes.
//!
//! The layers compose top-down: [`node`] drives all declared slots of one
//! vocabulary type, [`slot`] folds cardinality between scalar and array wire
//! shapes, [`value`] resolves a single occurrence against the slot's
//! candidate list, and [`literal`] handles the scalar leaf kinds.

pub mod literal;
pub mod node;
pub mod slot;
pub mod value;

pub use node::{decode_node, encode_node};
pub use slot::{decode_slot, encode_slot};
pub use value::{decode_value, encode_value};
