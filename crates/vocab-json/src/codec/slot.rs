//! Cardinality handling: scalar/array folding on the wire.
//!
//! The wire format compacts lists asymmetrically: decoding always unfolds
//! (array or bare value both become an ordered box list), while encoding
//! folds back only when it can (empty omits the key, a singleton emits the
//! bare value, anything longer emits an array). Interoperability depends on
//! reproducing this exactly.

use serde_json::Value;

use crate::codec::value::{decode_value, encode_value};
use crate::error::{DecodeError, EncodeError};
use crate::model::node::Slot;
use crate::model::schema::{Cardinality, SlotSpec};
use crate::registry::Registry;

/// Decodes one wire value into a slot's ordered occurrence list.
pub fn decode_slot(
    spec: &SlotSpec,
    v: &Value,
    registry: &Registry,
) -> Result<Slot, DecodeError> {
    let mut slot = Slot::new();

    match v {
        Value::Array(items) => {
            if spec.cardinality == Cardinality::Functional {
                return Err(DecodeError::StructuralMismatch {
                    key: spec.key.to_string(),
                    expected: "a single value (functional slot)",
                    found: "array",
                });
            }
            for item in items {
                slot.append(decode_value(spec.key, item, spec.candidates, registry)?);
            }
        }
        // Mandatory unfolding: a bare value is a singleton list.
        _ => slot.append(decode_value(spec.key, v, spec.candidates, registry)?),
    }

    Ok(slot)
}

/// Encodes a slot's occurrence list back into its wire value.
///
/// Returns `None` when the slot is empty; the caller omits the key.
pub fn encode_slot(spec: &SlotSpec, slot: &Slot) -> Result<Option<Value>, EncodeError> {
    // Slot mutation is unchecked, so the functional bound is enforced here:
    // a functional slot must never emit an array the decoder would reject.
    if spec.cardinality == Cardinality::Functional && slot.len() > 1 {
        return Err(EncodeError::TooManyValues {
            key: spec.key.to_string(),
            len: slot.len(),
        });
    }

    let mut encoded = Vec::with_capacity(slot.len());
    for value in slot.iter() {
        encoded.push(encode_value(spec.key, value)?);
    }

    Ok(match encoded.len() {
        0 => None,
        1 => encoded.pop(),
        _ => Some(Value::Array(encoded)),
    })
}
