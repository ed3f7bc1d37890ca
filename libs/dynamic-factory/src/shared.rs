//! Thread-safe wrapper around [`DynamicFactory`].
//!
//! One coarse `RwLock` guards the whole table: registration and removal take
//! the write lock, lookups and construction take the read lock. Instantiators
//! run while the read lock is held, so they must not call back into the same
//! factory for writing.

use parking_lot::RwLock;

use crate::error::FactoryError;
use crate::factory::DynamicFactory;
use crate::identity::FactoryId;
use crate::instantiator::{FromConcrete, Instantiator};

/// [`DynamicFactory`] behind a single lock, usable through `&self` from many threads.
pub struct SharedFactory<B: ?Sized + 'static> {
    inner: RwLock<DynamicFactory<B>>,
}

impl<B: ?Sized + 'static> SharedFactory<B> {
    #[must_use]
    pub fn new() -> Self {
        Self::from(DynamicFactory::new())
    }

    pub fn register_class<T>(&self, name: impl Into<String>)
    where
        T: Default + 'static,
        B: FromConcrete<T>,
    {
        self.inner.write().register_class::<T>(name);
    }

    pub fn register_instantiator<I>(&self, name: impl Into<String>, instantiator: I)
    where
        I: Instantiator<B> + 'static,
    {
        self.inner.write().register_instantiator(name, instantiator);
    }

    /// # Errors
    ///
    /// Returns [`FactoryError::AlreadyRegistered`] if `name` is already bound.
    pub fn try_register_class<T>(&self, name: impl Into<String>) -> Result<(), FactoryError>
    where
        T: Default + 'static,
        B: FromConcrete<T>,
    {
        self.inner.write().try_register_class::<T>(name)
    }

    /// # Errors
    ///
    /// Returns [`FactoryError::AlreadyRegistered`] if `name` is already bound.
    pub fn try_register_instantiator<I>(
        &self,
        name: impl Into<String>,
        instantiator: I,
    ) -> Result<(), FactoryError>
    where
        I: Instantiator<B> + 'static,
    {
        self.inner
            .write()
            .try_register_instantiator(name, instantiator)
    }

    pub fn unregister_class(&self, name: &str) -> bool {
        self.inner.write().unregister_class(name)
    }

    #[must_use]
    pub fn create_instance(&self, name: &str) -> Option<Box<B>> {
        self.inner.read().create_instance(name)
    }

    /// # Errors
    ///
    /// Returns [`FactoryError::NotRegistered`] if `name` has no binding.
    pub fn require_instance(&self, name: &str) -> Result<Box<B>, FactoryError> {
        self.inner.read().require_instance(name)
    }

    #[must_use]
    pub fn is_class(&self, name: &str) -> bool {
        self.inner.read().is_class(name)
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn factory_id(&self) -> FactoryId {
        FactoryId::of::<B>()
    }

    #[must_use]
    pub fn factory_hash(&self) -> u64 {
        self.factory_id().hash_value()
    }

    /// Snapshot of the registered names, sorted.
    #[must_use]
    pub fn class_names(&self) -> Vec<String> {
        self.inner.read().class_names().map(str::to_owned).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Unwrap the lock and return the plain factory.
    #[must_use]
    pub fn into_inner(self) -> DynamicFactory<B> {
        self.inner.into_inner()
    }
}

impl<B: ?Sized + 'static> Default for SharedFactory<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ?Sized + 'static> From<DynamicFactory<B>> for SharedFactory<B> {
    fn from(factory: DynamicFactory<B>) -> Self {
        Self {
            inner: RwLock::new(factory),
        }
    }
}

impl<B: ?Sized + 'static> std::fmt::Debug for SharedFactory<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedFactory")
            .field(&*self.inner.read())
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    trait Job: Send {
        fn label(&self) -> String;
    }
    crate::dynamic_base!(Job);

    #[derive(Default)]
    struct Compile;
    impl Job for Compile {
        fn label(&self) -> String {
            "compile".to_owned()
        }
    }

    #[test]
    fn concurrent_creates_and_registrations() {
        let factory = Arc::new(SharedFactory::<dyn Job>::new());
        factory.register_class::<Compile>("compile");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let factory = Arc::clone(&factory);
                thread::spawn(move || {
                    let name = format!("job-{i}");
                    factory.register_instantiator(name.clone(), || -> Box<dyn Job> {
                        Box::new(Compile)
                    });
                    for _ in 0..100 {
                        let job = factory.create_instance("compile");
                        assert_eq!(job.map(|j| j.label()).as_deref(), Some("compile"));
                    }
                    factory.is_class(&name)
                })
            })
            .collect();

        for handle in handles {
            assert!(matches!(handle.join(), Ok(true)));
        }
        assert_eq!(factory.len(), 9);
    }

    #[test]
    fn round_trip_through_plain_factory() {
        let mut plain = DynamicFactory::<dyn Job>::new();
        plain.register_class::<Compile>("compile");

        let shared = SharedFactory::from(plain);
        assert!(shared.is_class("compile"));
        assert_eq!(shared.class_names(), vec!["compile".to_owned()]);

        let plain = shared.into_inner();
        assert!(plain.is_class("compile"));
    }

    #[test]
    fn strict_registration_through_lock() {
        let shared = SharedFactory::<dyn Job>::new();
        assert!(shared.try_register_class::<Compile>("compile").is_ok());
        assert!(matches!(
            shared.try_register_class::<Compile>("compile"),
            Err(FactoryError::AlreadyRegistered { .. })
        ));
        assert!(shared.unregister_class("compile"));
        assert!(shared.require_instance("compile").is_err());
    }
}
