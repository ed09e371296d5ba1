//! Whole-node wire decoding and encoding.
//!
//! Decoding dispatches every wire key: `type` feeds the node's token list,
//! `@context` is ignored, declared slot keys go through the slot engine,
//! `<key>Map` keys feed natural-language maps, and everything else lands in
//! the extension bag untouched. Encoding runs the same composition in
//! reverse, in fixed schema order, self-stamping the canonical type token.

use serde_json::{Map, Value};

use crate::codec::slot::{decode_slot, encode_slot};
use crate::codec::value::json_kind;
use crate::error::{DecodeError, EncodeError};
use crate::model::lang::LanguageMap;
use crate::model::node::NodeData;
use crate::model::schema::NodeSchema;
use crate::registry::Registry;

/// Decodes a wire object into fresh node state.
///
/// All-or-nothing: an error anywhere leaves no partially populated state in
/// the caller's hands.
pub fn decode_node(
    schema: &'static NodeSchema,
    v: &Value,
    registry: &Registry,
) -> Result<NodeData, DecodeError> {
    let Value::Object(map) = v else {
        return Err(DecodeError::NotAnObject { found: json_kind(v) });
    };

    let mut data = NodeData::new();

    for (key, value) in map {
        // JSON-LD context material is out of the codec's scope.
        if key == "@context" {
            continue;
        }

        if key == "type" {
            match value {
                Value::String(token) => data.add_type(token.clone()),
                Value::Array(items) => {
                    for token in items.iter().filter_map(Value::as_str) {
                        data.add_type(token);
                    }
                }
                // Any other shape carries no usable tokens.
                _ => {}
            }
            continue;
        }

        if let Some(spec) = schema.slot(key) {
            *data.slot_mut(spec.key) = decode_slot(spec, value, registry)?;
            continue;
        }

        if let Some(spec) = schema.language_map_slot(key) {
            *data.language_map_mut(spec.key) = decode_language_map(key, value)?;
            continue;
        }

        // Unrecognized key: structural copy into the extension bag.
        data.add_unknown(key.clone(), value.clone());
    }

    Ok(data)
}

/// Decodes a `<key>Map` wire value. The key is schema-declared, so a wrong
/// shape is malformed input rather than extension material.
fn decode_language_map(wire_key: &str, v: &Value) -> Result<LanguageMap, DecodeError> {
    let Value::Object(entries) = v else {
        return Err(DecodeError::StructuralMismatch {
            key: wire_key.to_string(),
            expected: "a language map object",
            found: json_kind(v),
        });
    };

    let mut map = LanguageMap::new();
    for (tag, value) in entries {
        let Value::String(text) = value else {
            return Err(DecodeError::StructuralMismatch {
                key: wire_key.to_string(),
                expected: "string values in a language map",
                found: json_kind(value),
            });
        };
        map.set(tag.clone(), text.clone());
    }
    Ok(map)
}

/// Encodes node state back into a wire object.
///
/// Slots emit in schema order (each language map directly after its base
/// slot), then the folded `type` tokens, then every extension entry whose
/// key does not collide with one already emitted.
pub fn encode_node(
    schema: &'static NodeSchema,
    data: &NodeData,
) -> Result<Value, EncodeError> {
    let mut out = Map::new();

    for spec in schema.slots {
        if let Some(slot) = data.slot(spec.key) {
            if let Some(encoded) = encode_slot(spec, slot)? {
                out.insert(spec.key.to_string(), encoded);
            }
        }

        if spec.language_map {
            // A present map serializes even while empty.
            if let Some(map) = data.language_map(spec.key) {
                out.insert(format!("{}Map", spec.key), encode_language_map(map));
            }
        }
    }

    out.insert("type".to_string(), stamped_type_tokens(schema, data));

    // Declared material wins: an extension entry colliding with an emitted
    // key (a populated slot, a language map, or `type`) is dropped.
    for (key, value) in data.unknown() {
        if !out.contains_key(key) {
            out.insert(key.clone(), value.clone());
        }
    }

    Ok(Value::Object(out))
}

/// Folds the node's tokens for the wire, appending the canonical token if
/// it is not already asserted. Idempotent: an exact-match scan guarantees
/// the stamp never duplicates.
fn stamped_type_tokens(schema: &NodeSchema, data: &NodeData) -> Value {
    let mut tokens: Vec<&str> = data.types().iter().map(String::as_str).collect();
    if !tokens.contains(&schema.token) {
        tokens.push(schema.token);
    }

    if tokens.len() == 1 {
        Value::String(tokens[0].to_string())
    } else {
        Value::Array(tokens.into_iter().map(|t| Value::String(t.to_string())).collect())
    }
}

fn encode_language_map(map: &LanguageMap) -> Value {
    let mut out = Map::new();
    for (tag, value) in map.iter() {
        out.insert(tag.to_string(), Value::String(value.to_string()));
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::value::SlotValue;
    use crate::util::datetime::DateTime;
    use crate::vocab::{self, Note, Offer};
    use crate::Node;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        vocab::register_core(&mut registry).unwrap();
        registry.seal();
        registry
    }

    #[test]
    fn test_actor_iri_scenario() {
        let registry = registry();
        let offer = Offer::from_json(&json!({"actor": "https://example.com/alice"}), &registry)
            .unwrap();

        let actor = offer.data().slot("actor").unwrap();
        assert_eq!(actor.len(), 1);
        assert_eq!(actor.get(0).unwrap().as_iri(), Some("https://example.com/alice"));

        assert_eq!(
            offer.to_json().unwrap(),
            json!({"actor": "https://example.com/alice", "type": "Offer"})
        );
    }

    #[test]
    fn test_type_stamp_idempotent() {
        let registry = registry();
        let offer = Offer::new();

        let first = offer.to_json().unwrap();
        let second = offer.to_json().unwrap();
        assert_eq!(first, second);
        assert_eq!(first["type"], json!("Offer"));

        // Decoding the stamped output and re-encoding never duplicates.
        let reparsed = Offer::from_json(&first, &registry).unwrap();
        assert_eq!(reparsed.to_json().unwrap()["type"], json!("Offer"));
    }

    #[test]
    fn test_extra_asserted_types_keep_order() {
        let registry = registry();
        let offer = Offer::from_json(
            &json!({"type": ["sc:Product", "Offer"]}),
            &registry,
        )
        .unwrap();
        assert_eq!(
            offer.to_json().unwrap()["type"],
            json!(["sc:Product", "Offer"])
        );

        // The stamp lands last when the canonical token was never asserted.
        let offer = Offer::from_json(&json!({"type": "sc:Product"}), &registry).unwrap();
        assert_eq!(
            offer.to_json().unwrap()["type"],
            json!(["sc:Product", "Offer"])
        );
    }

    #[test]
    fn test_extension_fidelity() {
        let registry = registry();
        let wire = json!({"type": "Offer", "customField": {"a": 1}});
        let offer = Offer::from_json(&wire, &registry).unwrap();

        assert!(offer.data().has_unknown("customField"));
        let out = offer.to_json().unwrap();
        assert_eq!(out["customField"], json!({"a": 1}));
        assert_eq!(out, wire);
    }

    #[test]
    fn test_context_ignored() {
        let registry = registry();
        let offer = Offer::from_json(
            &json!({
                "@context": "https://www.w3.org/ns/activitystreams",
                "actor": "https://example.com/alice"
            }),
            &registry,
        )
        .unwrap();

        assert!(!offer.data().has_unknown("@context"));
        assert_eq!(
            offer.to_json().unwrap(),
            json!({"actor": "https://example.com/alice", "type": "Offer"})
        );
    }

    #[test]
    fn test_roundtrip_identity() {
        let registry = registry();
        let wire = json!({
            "name": "A small note",
            "content": ["first", "second"],
            "mediaType": "text/markdown",
            "published": "2024-03-15T14:30:00Z",
            "duration": "PT2H",
            "url": "https://example.com/notes/1",
            "attributedTo": {
                "type": "Note",
                "name": "nested author stand-in"
            },
            "type": "Note"
        });

        let note = Note::from_json(&wire, &registry).unwrap();
        assert_eq!(note.to_json().unwrap(), wire);

        // A second decode/encode cycle is stable too.
        let again = Note::from_json(&note.to_json().unwrap(), &registry).unwrap();
        assert_eq!(again.to_json().unwrap(), wire);
    }

    #[test]
    fn test_language_map_roundtrip_and_empty_emission() {
        let registry = registry();
        let wire = json!({
            "name": "hello",
            "nameMap": {"fr": "bonjour", "de": "hallo"},
            "type": "Note"
        });
        let note = Note::from_json(&wire, &registry).unwrap();
        assert_eq!(note.data().language_map("name").unwrap().get("fr"), "bonjour");
        assert_eq!(note.to_json().unwrap(), wire);

        // A touched-but-empty map still emits its key.
        let mut note = Note::new();
        note.data_mut().language_map_mut("name");
        assert_eq!(
            note.to_json().unwrap(),
            json!({"nameMap": {}, "type": "Note"})
        );
    }

    #[test]
    fn test_language_map_bad_shape_fails() {
        let registry = registry();
        let err = Note::from_json(&json!({"nameMap": "oops"}), &registry).unwrap_err();
        assert!(matches!(err, DecodeError::StructuralMismatch { .. }));

        let err =
            Note::from_json(&json!({"nameMap": {"en": 5}}), &registry).unwrap_err();
        assert!(matches!(err, DecodeError::StructuralMismatch { .. }));
    }

    #[test]
    fn test_failure_is_atomic() {
        let registry = registry();
        // `published` is strict; the bad literal aborts the whole node even
        // though `name` would have decoded fine.
        let result = Note::from_json(
            &json!({"name": "ok", "published": "not a date"}),
            &registry,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_not_an_object() {
        let registry = registry();
        let err = Note::from_json(&json!("just a string"), &registry).unwrap_err();
        assert_eq!(err, DecodeError::NotAnObject { found: "string" });
    }

    #[test]
    fn test_functional_slot_overflow_fails_encode() {
        let mut note = Note::new();
        note.data_mut()
            .slot_mut("published")
            .append(SlotValue::DateTime(
                DateTime::parse("2024-03-15T14:30:00Z").unwrap(),
            ));
        note.data_mut()
            .slot_mut("published")
            .append(SlotValue::DateTime(
                DateTime::parse("2024-03-16T14:30:00Z").unwrap(),
            ));

        let err = note.to_json().unwrap_err();
        assert!(matches!(err, EncodeError::TooManyValues { .. }));
    }

    #[test]
    fn test_extension_bag_never_shadows_declared_keys() {
        let mut note = Note::new();
        note.set_name("canonical");
        note.data_mut()
            .add_unknown("name", json!("injected shadow"));
        note.data_mut().add_unknown("type", json!("NotANote"));
        note.data_mut().add_unknown("customField", json!(1));

        let out = note.to_json().unwrap();
        assert_eq!(out["name"], json!("canonical"));
        assert_eq!(out["type"], json!("Note"));
        assert_eq!(out["customField"], json!(1));
    }

    #[test]
    fn test_empty_slot_key_omitted() {
        let mut note = Note::new();
        note.data_mut().slot_mut("name"); // touched but left empty
        note.data_mut()
            .slot_mut("content")
            .append(SlotValue::String("body".to_string()));

        let out = note.to_json().unwrap();
        assert!(out.get("name").is_none());
        assert_eq!(out["content"], json!("body"));
    }
}
