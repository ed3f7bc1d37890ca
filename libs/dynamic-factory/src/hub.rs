//! Registry of factories, keyed by base type.
//!
//! Typical flows:
//! - A subsystem owns the factory for its base trait and publishes it in the hub.
//! - Other code fetches the factory by base type alone and keeps the `Arc`.
//! - Tests build a fresh hub per case; there is no process-wide instance.
//!
//! Implementation details:
//! - Key = [`FactoryId`] of the base type (`TypeId` based, works for `dyn Trait`).
//! - Value = `Arc<SharedFactory<B>>` stored as `Box<dyn Any + Send + Sync>`, downcast on read.
//! - Re-registering a base replaces the stored factory; `Arc`s already handed out stay valid.

use parking_lot::RwLock;
use std::{any::Any, collections::HashMap, sync::Arc};

use crate::identity::FactoryId;
use crate::shared::SharedFactory;

type Boxed = Box<dyn Any + Send + Sync>;

/// Type-keyed registry of [`SharedFactory`] instances.
pub struct FactoryHub {
    map: RwLock<HashMap<FactoryId, Boxed>>,
}

impl FactoryHub {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
        }
    }

    /// Publish the factory for base `B`, replacing any previous one.
    pub fn register<B>(&self, factory: Arc<SharedFactory<B>>)
    where
        B: ?Sized + 'static,
    {
        let id = FactoryId::of::<B>();
        let replaced = self.map.write().insert(id, Box::new(factory)).is_some();
        tracing::debug!(base = %id, replaced, "registered factory in hub");
    }

    /// Factory for base `B`, if one was published.
    #[must_use]
    pub fn get<B>(&self) -> Option<Arc<SharedFactory<B>>>
    where
        B: ?Sized + 'static,
    {
        let r = self.map.read();
        r.get(&FactoryId::of::<B>())
            .and_then(|boxed| boxed.downcast_ref::<Arc<SharedFactory<B>>>())
            .map(Arc::clone)
    }

    /// Factory for base `B`, creating and publishing an empty one if missing.
    pub fn get_or_default<B>(&self) -> Arc<SharedFactory<B>>
    where
        B: ?Sized + 'static,
    {
        if let Some(existing) = self.get::<B>() {
            return existing;
        }

        let id = FactoryId::of::<B>();
        let mut w = self.map.write();
        // Re-check under the write lock: another caller may have inserted first.
        if let Some(existing) = w
            .get(&id)
            .and_then(|boxed| boxed.downcast_ref::<Arc<SharedFactory<B>>>())
        {
            return Arc::clone(existing);
        }

        let created = Arc::new(SharedFactory::<B>::new());
        w.insert(id, Box::new(Arc::clone(&created)));
        tracing::debug!(base = %id, "created factory in hub");
        created
    }

    /// Remove the factory for base `B`; returns it if it was present.
    pub fn remove<B>(&self) -> Option<Arc<SharedFactory<B>>>
    where
        B: ?Sized + 'static,
    {
        let boxed = self.map.write().remove(&FactoryId::of::<B>())?;
        boxed
            .downcast::<Arc<SharedFactory<B>>>()
            .ok()
            .map(|b| *b)
    }

    #[must_use]
    pub fn contains<B>(&self) -> bool
    where
        B: ?Sized + 'static,
    {
        self.map.read().contains_key(&FactoryId::of::<B>())
    }

    /// Identities of every published factory, in no particular order.
    #[must_use]
    pub fn factory_ids(&self) -> Vec<FactoryId> {
        self.map.read().keys().copied().collect()
    }

    /// Clear everything (useful in tests).
    pub fn clear(&self) {
        self.map.write().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

impl Default for FactoryHub {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FactoryHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryHub")
            .field("factories", &self.factory_ids())
            .finish()
    }
}
