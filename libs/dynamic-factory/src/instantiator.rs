//! Construction capabilities stored by the factory.
//!
//! An [`Instantiator`] builds one kind of object and hands it out behind the
//! base type `B`. Two flavours are provided:
//! - [`DefaultInstantiator<T>`] default-constructs a concrete `T` and upcasts it;
//! - any closure `Fn() -> Box<B>` is itself an instantiator, which covers
//!   custom construction (arguments fixed at registration, pooling, ...).
//!
//! Callers may also implement the trait on their own types.

use std::fmt;
use std::marker::PhantomData;

/// Builds a fresh `B`-typed object on every call.
///
/// Each call must return a new, independently owned instance. Implementations
/// must not hand out shared or previously returned objects, and calling
/// `create_instance` must not change what later calls produce.
pub trait Instantiator<B: ?Sized>: Send + Sync {
    /// Construct a new instance. Ownership moves to the caller.
    fn create_instance(&self) -> Box<B>;
}

impl<B, F> Instantiator<B> for F
where
    B: ?Sized,
    F: Fn() -> Box<B> + Send + Sync,
{
    fn create_instance(&self) -> Box<B> {
        self()
    }
}

/// Upcast from a concrete type to the base type `Self`.
///
/// Generic code cannot spell the `Box<T>` to `Box<dyn Trait>` coercion, so each
/// base declares it once, normally through [`dynamic_base!`](crate::dynamic_base).
pub trait FromConcrete<T> {
    fn from_concrete(value: Box<T>) -> Box<Self>;
}

/// Implements [`FromConcrete`] for `dyn Trait` over every `T: Trait + 'static`.
///
/// ```
/// use dynamic_factory::{DynamicFactory, dynamic_base};
///
/// trait Component {
///     fn type_tag(&self) -> &'static str;
/// }
/// dynamic_base!(Component);
///
/// #[derive(Default)]
/// struct Health;
/// impl Component for Health {
///     fn type_tag(&self) -> &'static str {
///         "Health"
///     }
/// }
///
/// let mut factory = DynamicFactory::<dyn Component>::new();
/// factory.register_class::<Health>("Health");
/// let health = factory.create_instance("Health");
/// assert_eq!(health.map(|c| c.type_tag()), Some("Health"));
/// ```
#[macro_export]
macro_rules! dynamic_base {
    ($($base:tt)+) => {
        impl<T: $($base)+ + 'static> $crate::FromConcrete<T> for dyn $($base)+ {
            #[inline]
            fn from_concrete(value: ::std::boxed::Box<T>) -> ::std::boxed::Box<Self> {
                value
            }
        }
    };
}

/// Default-constructs `T` and returns it as `B`.
pub struct DefaultInstantiator<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> DefaultInstantiator<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for DefaultInstantiator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DefaultInstantiator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DefaultInstantiator")
            .field(&std::any::type_name::<T>())
            .finish()
    }
}

impl<B, T> Instantiator<B> for DefaultInstantiator<T>
where
    B: ?Sized + FromConcrete<T>,
    T: Default + 'static,
{
    fn create_instance(&self) -> Box<B> {
        B::from_concrete(Box::new(T::default()))
    }
}
