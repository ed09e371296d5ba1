//! Concrete vocabulary types.
//!
//! Each type is a mechanical instantiation of the codec over one slot table:
//! a thin struct around [`NodeData`] that knows its schema. The full
//! vocabulary this models defines dozens of these; the set here covers every
//! capability the registry partitions by.

use serde_json::Value;

use crate::codec::node::{decode_node, encode_node};
use crate::error::{DecodeError, EncodeError};
use crate::model::node::{Node, NodeData, Slot};
use crate::model::schema::NodeSchema;
use crate::model::value::SlotValue;
use crate::registry::Registry;
use crate::util::datetime::DateTime;

use super::schemas;

macro_rules! vocab_type {
    ($(#[$meta:meta])* $name:ident => $schema:path) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            data: NodeData,
        }

        impl $name {
            /// Creates an empty instance.
            pub fn new() -> Self {
                Self::default()
            }

            /// Decodes an instance from its wire object.
            pub fn from_json(v: &Value, registry: &Registry) -> Result<Self, DecodeError> {
                Ok(Self {
                    data: decode_node(&$schema, v, registry)?,
                })
            }

            /// Encodes this instance into its wire object.
            pub fn to_json(&self) -> Result<Value, EncodeError> {
                encode_node(&$schema, &self.data)
            }
        }

        impl Node for $name {
            fn schema(&self) -> &'static NodeSchema {
                &$schema
            }

            fn data(&self) -> &NodeData {
                &self.data
            }

            fn data_mut(&mut self) -> &mut NodeData {
                &mut self.data
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use serde::ser::Error as _;
                self.to_json().map_err(S::Error::custom)?.serialize(serializer)
            }
        }
    };
}

vocab_type! {
    /// The base object-capable type.
    Object => schemas::OBJECT
}

vocab_type! {
    /// A short written work.
    Note => schemas::NOTE
}

vocab_type! {
    /// An image document.
    Image => schemas::IMAGE
}

vocab_type! {
    /// An offer activity: someone offering an object to a target.
    Offer => schemas::OFFER
}

vocab_type! {
    /// An ordered set of objects or links.
    Collection => schemas::COLLECTION
}

vocab_type! {
    /// An indirect reference to a resource.
    Link => schemas::LINK
}

/// Convenience accessors for the slots every object-capable type declares.
macro_rules! object_accessors {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                pub fn name(&self) -> Option<&Slot> {
                    self.data.slot("name")
                }

                pub fn name_mut(&mut self) -> &mut Slot {
                    self.data.slot_mut("name")
                }

                /// Replaces `name` with a single plain string.
                pub fn set_name(&mut self, name: impl Into<String>) {
                    self.data
                        .slot_mut("name")
                        .set(SlotValue::String(name.into()));
                }

                pub fn published(&self) -> Option<DateTime> {
                    self.data.slot("published")?.get(0)?.as_datetime()
                }

                pub fn set_published(&mut self, published: DateTime) {
                    self.data
                        .slot_mut("published")
                        .set(SlotValue::DateTime(published));
                }
            }
        )+
    };
}

object_accessors!(Object, Note, Image, Offer, Collection);

impl Offer {
    pub fn actor(&self) -> Option<&Slot> {
        self.data.slot("actor")
    }

    pub fn actor_mut(&mut self) -> &mut Slot {
        self.data.slot_mut("actor")
    }

    pub fn object(&self) -> Option<&Slot> {
        self.data.slot("object")
    }

    pub fn object_mut(&mut self) -> &mut Slot {
        self.data.slot_mut("object")
    }

    pub fn target(&self) -> Option<&Slot> {
        self.data.slot("target")
    }

    pub fn target_mut(&mut self) -> &mut Slot {
        self.data.slot_mut("target")
    }
}

impl Link {
    pub fn href(&self) -> Option<&str> {
        self.data.slot("href")?.get(0)?.as_iri()
    }

    pub fn set_href(&mut self, href: impl Into<String>) {
        self.data.slot_mut("href").set(SlotValue::Iri(href.into()));
    }
}

impl Collection {
    pub fn items(&self) -> Option<&Slot> {
        self.data.slot("items")
    }

    pub fn items_mut(&mut self) -> &mut Slot {
        self.data.slot_mut("items")
    }

    pub fn total_items(&self) -> Option<f64> {
        self.data.slot("totalItems")?.get(0)?.as_float()
    }

    pub fn set_total_items(&mut self, count: f64) {
        self.data
            .slot_mut("totalItems")
            .set(SlotValue::Float(count));
    }
}
