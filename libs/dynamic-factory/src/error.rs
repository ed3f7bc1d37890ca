use crate::identity::FactoryId;

/// Errors reported by the strict registry operations.
///
/// The lenient operations never produce these: `create_instance` signals an
/// unknown name with `None`, `register_*` replaces silently and
/// `unregister_class` ignores unknown names.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("class not registered: name={name:?}, base={base:?}")]
    NotRegistered { name: String, base: FactoryId },

    #[error("class already registered: name={name:?}, base={base:?}")]
    AlreadyRegistered { name: String, base: FactoryId },
}

impl FactoryError {
    /// Name the failed operation was called with.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::NotRegistered { name, .. } | Self::AlreadyRegistered { name, .. } => name,
        }
    }
}
