//! Runtime class registry and polymorphic object factory.
//!
//! Code registers concrete types under string names against a common base
//! type, then builds instances later by name alone:
//!
//! ```
//! use dynamic_factory::{DynamicFactory, dynamic_base};
//!
//! trait Component {
//!     fn type_tag(&self) -> &'static str;
//! }
//! dynamic_base!(Component);
//!
//! #[derive(Default)]
//! struct HealthComponent;
//! impl Component for HealthComponent {
//!     fn type_tag(&self) -> &'static str {
//!         "HealthComponent"
//!     }
//! }
//!
//! let mut factory = DynamicFactory::<dyn Component>::new();
//! factory.register_class::<HealthComponent>("HealthComponent");
//!
//! assert!(factory.create_instance("Shield").is_none());
//! let hp = factory.create_instance("HealthComponent");
//! assert_eq!(hp.map(|c| c.type_tag()), Some("HealthComponent"));
//! ```
//!
//! Building blocks:
//! - [`Instantiator`]: one-method construction capability, boxed per entry.
//! - [`DynamicFactory`]: the name-to-instantiator table, single-threaded.
//! - [`SharedFactory`]: the same table behind one `RwLock`.
//! - [`FactoryHub`]: factories keyed by base type, for code that needs several.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod factory;
pub mod hub;
pub mod identity;
pub mod instantiator;
pub mod shared;

pub use error::FactoryError;
pub use factory::DynamicFactory;
pub use hub::FactoryHub;
pub use identity::FactoryId;
pub use instantiator::{DefaultInstantiator, FromConcrete, Instantiator};
pub use shared::SharedFactory;
