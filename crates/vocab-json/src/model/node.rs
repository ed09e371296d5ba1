//! Node state and the object-safe `Node` trait.
//!
//! [`NodeData`] is the uniform runtime state behind every concrete
//! vocabulary type: the ordered type-token list, the populated slots, any
//! natural-language maps, and the extension bag holding unrecognized wire
//! keys verbatim.

use std::fmt;

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use crate::error::SlotError;
use crate::model::lang::LanguageMap;
use crate::model::schema::NodeSchema;
use crate::model::value::SlotValue;

/// A concrete vocabulary type instance, viewed uniformly.
///
/// The registry constructs `Box<dyn Node>` values and the codec drives them
/// through [`decode_node`](crate::codec::node::decode_node) and
/// [`encode_node`](crate::codec::node::encode_node); concrete types only
/// supply their schema and state.
pub trait Node: fmt::Debug {
    /// The static schema this instance is an occurrence of.
    fn schema(&self) -> &'static NodeSchema;

    fn data(&self) -> &NodeData;

    fn data_mut(&mut self) -> &mut NodeData;
}

/// The ordered occurrences of one property slot.
#[derive(Debug, Default)]
pub struct Slot {
    values: Vec<SlotValue>,
}

impl Slot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlotValue> {
        self.values.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SlotValue> {
        self.values.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotValue> {
        self.values.iter()
    }

    /// Pushes a value to the end.
    pub fn append(&mut self, value: SlotValue) {
        self.values.push(value);
    }

    /// Pushes a value to the front.
    pub fn prepend(&mut self, value: SlotValue) {
        self.values.insert(0, value);
    }

    /// Replaces all occurrences with a single value (functional slots).
    pub fn set(&mut self, value: SlotValue) {
        self.values.clear();
        self.values.push(value);
    }

    /// Removes and returns the value at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<SlotValue, SlotError> {
        if index >= self.values.len() {
            return Err(SlotError::IndexOutOfRange {
                index,
                len: self.values.len(),
            });
        }
        Ok(self.values.remove(index))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Runtime state shared by all concrete vocabulary types.
#[derive(Debug, Default)]
pub struct NodeData {
    /// The node's own ordered type tokens, as read from or written to the
    /// `type` wire key.
    types: Vec<String>,
    slots: FxHashMap<&'static str, Slot>,
    maps: FxHashMap<&'static str, LanguageMap>,
    /// Unrecognized top-level wire keys, preserved verbatim.
    unknown: Map<String, Value>,
}

impl NodeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// The declared type tokens, in wire order.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Appends a type token.
    pub fn add_type(&mut self, token: impl Into<String>) {
        self.types.push(token.into());
    }

    /// Exact-match scan over the declared tokens.
    pub fn has_type(&self, token: &str) -> bool {
        self.types.iter().any(|t| t == token)
    }

    /// The populated slot for a key, if any value has been stored.
    pub fn slot(&self, key: &str) -> Option<&Slot> {
        self.slots.get(key)
    }

    /// The slot for a key, created empty on first access.
    ///
    /// Keys are schema-declared, hence `'static`.
    pub fn slot_mut(&mut self, key: &'static str) -> &mut Slot {
        self.slots.entry(key).or_default()
    }

    /// The natural-language map for a slot key, if present.
    pub fn language_map(&self, key: &str) -> Option<&LanguageMap> {
        self.maps.get(key)
    }

    /// The natural-language map for a slot key, created lazily on first
    /// access. A created map is serialized even while empty.
    pub fn language_map_mut(&mut self, key: &'static str) -> &mut LanguageMap {
        self.maps.entry(key).or_default()
    }

    /// Removes the natural-language map for a slot key.
    pub fn remove_language_map(&mut self, key: &str) -> Option<LanguageMap> {
        self.maps.remove(key)
    }

    /// Stores an extension entry under a key the schema does not declare.
    pub fn add_unknown(&mut self, key: impl Into<String>, value: Value) {
        self.unknown.insert(key.into(), value);
    }

    pub fn has_unknown(&self, key: &str) -> bool {
        self.unknown.contains_key(key)
    }

    pub fn get_unknown(&self, key: &str) -> Option<&Value> {
        self.unknown.get(key)
    }

    pub fn remove_unknown(&mut self, key: &str) -> Option<Value> {
        self.unknown.remove(key)
    }

    /// The full extension bag, in insertion order.
    pub fn unknown(&self) -> &Map<String, Value> {
        &self.unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlotError;

    #[test]
    fn test_slot_order_ops() {
        let mut slot = Slot::new();
        slot.append(SlotValue::String("b".to_string()));
        slot.append(SlotValue::String("c".to_string()));
        slot.prepend(SlotValue::String("a".to_string()));

        let order: Vec<_> = slot.iter().map(|v| v.as_str().unwrap()).collect();
        assert_eq!(order, ["a", "b", "c"]);

        let removed = slot.remove_at(1).unwrap();
        assert_eq!(removed.as_str(), Some("b"));
        assert_eq!(slot.len(), 2);
    }

    #[test]
    fn test_slot_remove_out_of_range() {
        let mut slot = Slot::new();
        slot.append(SlotValue::Float(1.0));
        assert_eq!(
            slot.remove_at(1).unwrap_err(),
            SlotError::IndexOutOfRange { index: 1, len: 1 }
        );
        assert_eq!(
            Slot::new().remove_at(0).unwrap_err(),
            SlotError::IndexOutOfRange { index: 0, len: 0 }
        );
    }

    #[test]
    fn test_slot_set_replaces() {
        let mut slot = Slot::new();
        slot.append(SlotValue::Float(1.0));
        slot.append(SlotValue::Float(2.0));
        slot.set(SlotValue::Float(3.0));
        assert_eq!(slot.len(), 1);
        assert_eq!(slot.get(0).unwrap().as_float(), Some(3.0));
    }

    #[test]
    fn test_unknown_bag() {
        let mut data = NodeData::new();
        assert!(!data.has_unknown("customField"));
        data.add_unknown("customField", serde_json::json!({"a": 1}));
        assert!(data.has_unknown("customField"));
        assert_eq!(
            data.get_unknown("customField"),
            Some(&serde_json::json!({"a": 1}))
        );
        assert_eq!(
            data.remove_unknown("customField"),
            Some(serde_json::json!({"a": 1}))
        );
        assert!(!data.has_unknown("customField"));
    }

    #[test]
    fn test_language_map_lazy_creation() {
        let mut data = NodeData::new();
        assert!(data.language_map("name").is_none());
        data.language_map_mut("name").set("en", "hello");
        assert_eq!(data.language_map("name").unwrap().get("en"), "hello");
    }

    #[test]
    fn test_types() {
        let mut data = NodeData::new();
        data.add_type("Offer");
        assert!(data.has_type("Offer"));
        assert!(!data.has_type("offer")); // case-sensitive
        assert_eq!(data.types(), ["Offer".to_string()]);
    }
}
