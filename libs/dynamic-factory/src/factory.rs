//! Name-keyed registry of instantiators for one base type.
//!
//! Policy summary:
//! - Lookup is by exact, case-sensitive name; no normalization.
//! - Registering an existing name replaces the binding (last write wins) and
//!   drops the previous instantiator. `try_register_*` rejects instead.
//! - `create_instance` on an unknown name returns `None`; it never panics for
//!   a missing name.
//! - The factory never keeps the objects it creates.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::FactoryError;
use crate::identity::FactoryId;
use crate::instantiator::{DefaultInstantiator, FromConcrete, Instantiator};

type BoxedInstantiator<B> = Box<dyn Instantiator<B>>;

/// Registry of named constructors producing `Box<B>`.
///
/// `B` is usually a trait object (`dyn Component`). The table is a `BTreeMap`,
/// so [`class_names`](Self::class_names) enumerates names lexicographically.
pub struct DynamicFactory<B: ?Sized + 'static> {
    table: BTreeMap<String, BoxedInstantiator<B>>,
}

impl<B: ?Sized + 'static> DynamicFactory<B> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    /// Register `T` under `name`; instances are built with `T::default()`.
    pub fn register_class<T>(&mut self, name: impl Into<String>)
    where
        T: Default + 'static,
        B: FromConcrete<T>,
    {
        self.register_boxed(name, Box::new(DefaultInstantiator::<T>::new()));
    }

    /// Register a caller-supplied instantiator (or closure) under `name`.
    pub fn register_instantiator<I>(&mut self, name: impl Into<String>, instantiator: I)
    where
        I: Instantiator<B> + 'static,
    {
        self.register_boxed(name, Box::new(instantiator));
    }

    /// Register an already boxed instantiator under `name`.
    ///
    /// Returns `true` when an existing binding was replaced.
    pub fn register_boxed(
        &mut self,
        name: impl Into<String>,
        instantiator: BoxedInstantiator<B>,
    ) -> bool {
        let name = name.into();
        let replaced = self.table.insert(name.clone(), instantiator).is_some();
        tracing::debug!(
            class = %name,
            base = %self.factory_id(),
            replaced,
            "registered class"
        );
        replaced
    }

    /// Like [`register_class`](Self::register_class) but refuses to replace.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::AlreadyRegistered`] if `name` is already bound;
    /// the existing binding is left untouched.
    pub fn try_register_class<T>(&mut self, name: impl Into<String>) -> Result<(), FactoryError>
    where
        T: Default + 'static,
        B: FromConcrete<T>,
    {
        self.try_register_boxed(name, Box::new(DefaultInstantiator::<T>::new()))
    }

    /// Like [`register_instantiator`](Self::register_instantiator) but refuses to replace.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::AlreadyRegistered`] if `name` is already bound.
    pub fn try_register_instantiator<I>(
        &mut self,
        name: impl Into<String>,
        instantiator: I,
    ) -> Result<(), FactoryError>
    where
        I: Instantiator<B> + 'static,
    {
        self.try_register_boxed(name, Box::new(instantiator))
    }

    fn try_register_boxed(
        &mut self,
        name: impl Into<String>,
        instantiator: BoxedInstantiator<B>,
    ) -> Result<(), FactoryError> {
        let name = name.into();
        if self.table.contains_key(&name) {
            return Err(FactoryError::AlreadyRegistered {
                name,
                base: self.factory_id(),
            });
        }
        self.register_boxed(name, instantiator);
        Ok(())
    }

    /// Remove the binding for `name`, dropping its instantiator.
    ///
    /// Unknown names are ignored. Returns whether a binding was removed.
    pub fn unregister_class(&mut self, name: &str) -> bool {
        let removed = self.table.remove(name).is_some();
        if removed {
            tracing::debug!(class = %name, base = %self.factory_id(), "unregistered class");
        }
        removed
    }

    /// Build a new instance of the class bound to `name`.
    ///
    /// Returns `None` only when `name` is not registered. Construction
    /// failures inside the instantiator are not turned into `None`.
    #[must_use]
    pub fn create_instance(&self, name: &str) -> Option<Box<B>> {
        let Some(instantiator) = self.table.get(name) else {
            tracing::trace!(class = %name, base = %self.factory_id(), "class not registered");
            return None;
        };
        tracing::trace!(class = %name, base = %self.factory_id(), "creating instance");
        Some(instantiator.create_instance())
    }

    /// Like [`create_instance`](Self::create_instance) but reports a missing name as an error.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::NotRegistered`] if `name` has no binding.
    pub fn require_instance(&self, name: &str) -> Result<Box<B>, FactoryError> {
        self.create_instance(name)
            .ok_or_else(|| FactoryError::NotRegistered {
                name: name.to_owned(),
                base: self.factory_id(),
            })
    }

    /// Whether `name` currently has a binding.
    #[must_use]
    pub fn is_class(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Identity of the base type `B`; independent of the registered classes.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn factory_id(&self) -> FactoryId {
        FactoryId::of::<B>()
    }

    /// Digest of [`factory_id`](Self::factory_id). Same for every factory of base `B`.
    #[must_use]
    pub fn factory_hash(&self) -> u64 {
        self.factory_id().hash_value()
    }

    /// Registered names in lexicographic order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.table.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Drop every binding.
    pub fn clear(&mut self) {
        let released = self.table.len();
        self.table.clear();
        tracing::debug!(base = %self.factory_id(), released, "cleared factory");
    }
}

impl<B: ?Sized + 'static> Default for DynamicFactory<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ?Sized + 'static> fmt::Debug for DynamicFactory<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicFactory")
            .field("base", &self.factory_id())
            .field("classes", &self.table.keys().collect::<Vec<_>>())
            .finish()
    }
}
