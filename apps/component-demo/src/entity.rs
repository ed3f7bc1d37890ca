use crate::components::{Component, ComponentFactory};

/// A named bag of components assembled through the factory.
pub struct Entity {
    name: String,
    components: Vec<Box<dyn Component>>,
}

/// Result of [`Entity::assemble`]: the entity plus names the factory did not know.
pub struct Assembly {
    pub entity: Entity,
    pub missing: Vec<String>,
}

impl Entity {
    /// Build an entity from component names, in order.
    ///
    /// Unknown names are skipped and reported in [`Assembly::missing`].
    #[must_use]
    pub fn assemble<S: AsRef<str>>(
        name: impl Into<String>,
        factory: &ComponentFactory,
        component_names: &[S],
    ) -> Assembly {
        let mut components = Vec::with_capacity(component_names.len());
        let mut missing = Vec::new();

        for component_name in component_names.iter().map(AsRef::as_ref) {
            if let Some(component) = factory.create_instance(component_name) {
                components.push(component);
            } else {
                tracing::warn!(component = %component_name, "unknown component, skipping");
                missing.push(component_name.to_owned());
            }
        }

        Assembly {
            entity: Self {
                name: name.into(),
                components,
            },
            missing,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn components(&self) -> &[Box<dyn Component>] {
        &self.components
    }

    /// Type tags of the components, in assembly order.
    #[must_use]
    pub fn type_tags(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.type_tag()).collect()
    }

    /// One line per component, prefixed with the entity name.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        self.components
            .iter()
            .map(|c| format!("{}: {}", self.name, c.display_info()))
            .collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::components::{RegistrationOptions, register_builtin};

    fn factory() -> ComponentFactory {
        let mut factory = ComponentFactory::new();
        register_builtin(
            &mut factory,
            RegistrationOptions {
                max_hp: 100,
                strict: false,
            },
        )
        .unwrap_or_else(|e| panic!("register: {e:#}"));
        factory
    }

    #[test]
    fn assembles_components_in_order() {
        let assembly = Entity::assemble(
            "player",
            &factory(),
            &["WeaponComponent", "HealthComponent"],
        );

        assert!(assembly.missing.is_empty());
        assert_eq!(assembly.entity.name(), "player");
        assert_eq!(
            assembly.entity.type_tags(),
            ["WeaponComponent", "HealthComponent"]
        );
    }

    #[test]
    fn unknown_names_are_reported_not_fatal() {
        let assembly = Entity::assemble(
            "npc",
            &factory(),
            &["HealthComponent", "JetpackComponent"],
        );

        assert_eq!(assembly.missing, ["JetpackComponent"]);
        assert_eq!(assembly.entity.components().len(), 1);
    }

    #[test]
    fn repeated_names_yield_separate_instances() {
        let assembly = Entity::assemble(
            "hydra",
            &factory(),
            &["HealthComponent", "HealthComponent"],
        );

        let parts = assembly.entity.components();
        assert_eq!(parts.len(), 2);
        assert!(!std::ptr::addr_eq(parts[0].as_ref(), parts[1].as_ref()));
    }

    #[test]
    fn describe_prefixes_entity_name() {
        let assembly = Entity::assemble("player", &factory(), &["ShieldComponent"]);

        assert_eq!(
            assembly.entity.describe(),
            ["player: Shield Component (absorb 0)"]
        );
    }
}
