//! Identity of a factory, derived from its base type.
//!
//! A [`FactoryId`] is computed from the base type only, never from the
//! registered contents: every `DynamicFactory<dyn Component>` reports the same
//! id whether it is empty or fully populated. It is opaque and only meaningful
//! for equality within one build of the program; do not persist it.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use xxhash_rust::xxh3::Xxh3;

/// Stable identity of a factory's base type.
///
/// Equality and hashing use the `TypeId`; the type name is kept for
/// diagnostics only.
#[derive(Clone, Copy)]
pub struct FactoryId {
    type_id: TypeId,
    type_name: &'static str,
}

impl FactoryId {
    /// Identity for factories producing `B`. `B` may be a trait object such as `dyn Component`.
    #[inline]
    #[must_use]
    pub fn of<B: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<B>(),
            type_name: std::any::type_name::<B>(),
        }
    }

    /// Fully-qualified name of the base type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// 64-bit digest of the base type identity (`xxh3`).
    #[must_use]
    pub fn hash_value(&self) -> u64 {
        let mut hasher = Xxh3::new();
        self.type_id.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for FactoryId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for FactoryId {}

impl Hash for FactoryId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for FactoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

impl fmt::Display for FactoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}
