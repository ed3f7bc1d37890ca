//! Demo components and their registration in a factory.

use anyhow::Result;
use dynamic_factory::{DynamicFactory, dynamic_base};

/// Base capability for everything an entity can be built from.
pub trait Component {
    /// Concrete type name, matching the name the class is registered under.
    fn type_tag(&self) -> &'static str;

    /// One-line human readable description.
    fn display_info(&self) -> String;
}
dynamic_base!(Component);

pub type ComponentFactory = DynamicFactory<dyn Component>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthComponent {
    pub hp: u32,
    pub max_hp: u32,
}

impl HealthComponent {
    #[must_use]
    pub fn with_max_hp(max_hp: u32) -> Self {
        Self { hp: max_hp, max_hp }
    }
}

impl Default for HealthComponent {
    fn default() -> Self {
        Self::with_max_hp(100)
    }
}

impl Component for HealthComponent {
    fn type_tag(&self) -> &'static str {
        "HealthComponent"
    }

    fn display_info(&self) -> String {
        format!("HP Component ({}/{})", self.hp, self.max_hp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponComponent {
    pub damage: u32,
}

impl Default for WeaponComponent {
    fn default() -> Self {
        Self { damage: 10 }
    }
}

impl Component for WeaponComponent {
    fn type_tag(&self) -> &'static str {
        "WeaponComponent"
    }

    fn display_info(&self) -> String {
        format!("Weapon Component (damage {})", self.damage)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShieldComponent {
    pub absorb: u32,
}

impl Component for ShieldComponent {
    fn type_tag(&self) -> &'static str {
        "ShieldComponent"
    }

    fn display_info(&self) -> String {
        format!("Shield Component (absorb {})", self.absorb)
    }
}

/// Options that shape how the built-in components are registered.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationOptions {
    /// Health pool handed to every `HealthComponent`.
    pub max_hp: u32,
    /// Fail on duplicate names instead of replacing.
    pub strict: bool,
}

/// Register the built-in components under their type names.
///
/// `HealthComponent` goes through a closure so the configured HP is fixed at
/// registration time; the others are default-constructed.
///
/// # Errors
///
/// With `strict` set, fails if any of the names is already registered.
pub fn register_builtin(factory: &mut ComponentFactory, options: RegistrationOptions) -> Result<()> {
    let max_hp = options.max_hp;
    let health = move || -> Box<dyn Component> { Box::new(HealthComponent::with_max_hp(max_hp)) };

    if options.strict {
        factory.try_register_instantiator("HealthComponent", health)?;
        factory.try_register_class::<WeaponComponent>("WeaponComponent")?;
        factory.try_register_class::<ShieldComponent>("ShieldComponent")?;
    } else {
        factory.register_instantiator("HealthComponent", health);
        factory.register_class::<WeaponComponent>("WeaponComponent");
        factory.register_class::<ShieldComponent>("ShieldComponent");
    }

    tracing::debug!(count = factory.len(), strict = options.strict, "registered builtin components");
    Ok(())
}
