//! Core vocabulary types and their registry wiring.
//!
//! The surrounding application owns the registry lifecycle: build a
//! [`Registry`], call [`register_core`] (plus any extension types), seal it,
//! and hand it to every decode entry point.

pub mod schemas;
pub mod types;

pub use types::{Collection, Image, Link, Note, Object, Offer};

use crate::error::RegistryError;
use crate::model::schema::Capability;
use crate::registry::Registry;

/// Registers every core vocabulary type under its capabilities.
pub fn register_core(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Capability::Object, "Object", || Box::new(Object::new()))?;
    registry.register(Capability::Object, "Note", || Box::new(Note::new()))?;
    registry.register(Capability::Object, "Image", || Box::new(Image::new()))?;
    registry.register(Capability::Object, "Offer", || Box::new(Offer::new()))?;
    registry.register(Capability::Activity, "Offer", || Box::new(Offer::new()))?;
    registry.register(Capability::Object, "Collection", || {
        Box::new(Collection::new())
    })?;
    registry.register(Capability::Collection, "Collection", || {
        Box::new(Collection::new())
    })?;
    registry.register(Capability::Link, "Link", || Box::new(Link::new()))?;
    Ok(())
}
