//! The capability-partitioned type registry.
//!
//! A [`Registry`] is an explicit, constructed-once value: callers register
//! every concrete vocabulary type at startup, call [`Registry::seal`], and
//! from then on pass `&Registry` into decode entry points. After sealing the
//! registry is read-only and safe to share across threads.

use rustc_hash::FxHashMap;

use crate::error::RegistryError;
use crate::model::node::Node;
use crate::model::schema::Capability;

/// Zero-value constructor for a concrete vocabulary type.
pub type Constructor = fn() -> Box<dyn Node>;

/// Maps (capability, canonical type token) to a constructor.
///
/// Lookup is exact-string, case-sensitive. There is no re-registration or
/// removal path: the lifecycle is register, seal, resolve.
#[derive(Debug, Default)]
pub struct Registry {
    sealed: bool,
    partitions: FxHashMap<Capability, FxHashMap<String, Constructor>>,
}

impl Registry {
    /// Creates an empty, unsealed registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor for a (capability, token) pair.
    ///
    /// Fails once the registry is sealed, and on duplicate registration.
    pub fn register(
        &mut self,
        capability: Capability,
        token: impl Into<String>,
        constructor: Constructor,
    ) -> Result<(), RegistryError> {
        let token = token.into();
        if self.sealed {
            return Err(RegistryError::Sealed { token });
        }

        let partition = self.partitions.entry(capability).or_default();
        if partition.contains_key(&token) {
            return Err(RegistryError::Duplicate { capability, token });
        }
        partition.insert(token, constructor);
        Ok(())
    }

    /// Freezes the registry. All registrations must happen before this.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Looks up the constructor for a (capability, token) pair.
    pub fn resolve(&self, capability: Capability, token: &str) -> Option<Constructor> {
        self.partitions.get(&capability)?.get(token).copied()
    }

    /// Constructs an empty instance for a (capability, token) pair.
    pub fn construct(&self, capability: Capability, token: &str) -> Option<Box<dyn Node>> {
        self.resolve(capability, token).map(|ctor| ctor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Object;

    fn object_ctor() -> Box<dyn Node> {
        Box::new(Object::new())
    }

    #[test]
    fn test_register_resolve() {
        let mut registry = Registry::new();
        registry
            .register(Capability::Object, "Object", object_ctor)
            .unwrap();
        registry.seal();

        assert!(registry.resolve(Capability::Object, "Object").is_some());
        assert!(registry.resolve(Capability::Object, "object").is_none()); // case-sensitive
        assert!(registry.resolve(Capability::Link, "Object").is_none()); // partitioned
        assert!(registry.construct(Capability::Object, "Object").is_some());
    }

    #[test]
    fn test_sealed_rejects_registration() {
        let mut registry = Registry::new();
        registry.seal();
        let err = registry
            .register(Capability::Object, "Object", object_ctor)
            .unwrap_err();
        assert!(matches!(err, RegistryError::Sealed { .. }));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = Registry::new();
        registry
            .register(Capability::Object, "Object", object_ctor)
            .unwrap();
        let err = registry
            .register(Capability::Object, "Object", object_ctor)
            .unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate { .. }));

        // Same token under a different capability is fine.
        registry
            .register(Capability::Activity, "Object", object_ctor)
            .unwrap();
    }
}
