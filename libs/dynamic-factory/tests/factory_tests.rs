#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Behavioural tests for the public factory API: replacement, absence,
//! unregister/re-register cycles, identity and instance independence.

use dynamic_factory::{DynamicFactory, FactoryId, SharedFactory, dynamic_base};

trait Component {
    fn type_tag(&self) -> &'static str;
    fn value(&self) -> i32;
    fn set_value(&mut self, value: i32);
}
dynamic_base!(Component);

trait Renderer {
    fn backend(&self) -> &'static str;
}
dynamic_base!(Renderer);

#[derive(Default)]
struct HealthType {
    hp: i32,
}

impl Component for HealthType {
    fn type_tag(&self) -> &'static str {
        "HealthType"
    }
    fn value(&self) -> i32 {
        self.hp
    }
    fn set_value(&mut self, value: i32) {
        self.hp = value;
    }
}

#[derive(Default)]
struct WeaponType {
    damage: i32,
}

impl Component for WeaponType {
    fn type_tag(&self) -> &'static str {
        "WeaponType"
    }
    fn value(&self) -> i32 {
        self.damage
    }
    fn set_value(&mut self, value: i32) {
        self.damage = value;
    }
}

#[derive(Default)]
struct Software;

impl Renderer for Software {
    fn backend(&self) -> &'static str {
        "software"
    }
}

fn components() -> DynamicFactory<dyn Component> {
    let mut factory = DynamicFactory::<dyn Component>::new();
    factory.register_class::<HealthType>("Health");
    factory.register_class::<WeaponType>("Weapon");
    factory
}

#[test]
fn health_and_weapon_scenario() {
    let factory = components();

    assert!(factory.is_class("Health"));
    assert!(!factory.is_class("Shield"));
    assert!(factory.create_instance("Shield").is_none());

    let health = factory.create_instance("Health").expect("Health is registered");
    assert_eq!(health.type_tag(), "HealthType");
}

#[test]
fn second_registration_wins() {
    let mut factory = DynamicFactory::<dyn Component>::new();
    factory.register_class::<HealthType>("Part");
    factory.register_class::<WeaponType>("Part");

    assert_eq!(factory.len(), 1, "Only one binding per name");
    for _ in 0..3 {
        let part = factory.create_instance("Part").unwrap();
        assert_eq!(part.type_tag(), "WeaponType");
    }
}

#[test]
fn unknown_name_is_absent_on_empty_and_populated_factories() {
    let empty = DynamicFactory::<dyn Component>::new();
    assert!(empty.create_instance("NoSuchType").is_none());

    let populated = components();
    assert!(populated.create_instance("NoSuchType").is_none());
}

#[test]
fn unregister_then_create_is_absent() {
    let mut factory = components();
    assert!(factory.create_instance("Health").is_some());

    factory.unregister_class("Health");

    assert!(!factory.is_class("Health"));
    assert!(factory.create_instance("Health").is_none());
    assert!(factory.is_class("Weapon"), "Other bindings are untouched");
}

#[test]
fn re_registration_restores_creation() {
    let mut factory = components();
    factory.unregister_class("Health");
    factory.register_class::<HealthType>("Health");

    let health = factory.create_instance("Health").unwrap();
    assert_eq!(health.type_tag(), "HealthType");
}

#[test]
fn hash_does_not_depend_on_contents() {
    let mut factory = DynamicFactory::<dyn Component>::new();
    let before = factory.factory_hash();

    factory.register_class::<HealthType>("Health");
    factory.register_class::<WeaponType>("Weapon");
    let populated = factory.factory_hash();
    factory.unregister_class("Health");
    factory.clear();

    assert_eq!(before, populated);
    assert_eq!(before, factory.factory_hash());
}

#[test]
fn hash_is_shared_per_base_and_distinct_across_bases() {
    let a = DynamicFactory::<dyn Component>::new();
    let b = components();
    let renderers = DynamicFactory::<dyn Renderer>::new();

    assert_eq!(a.factory_hash(), b.factory_hash());
    assert_eq!(a.factory_id(), b.factory_id());
    assert_ne!(a.factory_hash(), renderers.factory_hash());
    assert_ne!(a.factory_id(), renderers.factory_id());

    let shared = SharedFactory::<dyn Component>::new();
    assert_eq!(shared.factory_hash(), a.factory_hash());
    assert_eq!(shared.factory_id(), FactoryId::of::<dyn Component>());
}

#[test]
fn successive_creates_are_independent() {
    let factory = components();
    let mut first = factory.create_instance("Weapon").unwrap();
    let second = factory.create_instance("Weapon").unwrap();

    first.set_value(42);

    assert_eq!(first.value(), 42);
    assert_eq!(second.value(), 0, "Mutating one instance must not affect another");
    assert!(!std::ptr::addr_eq(first.as_ref(), second.as_ref()));
}

#[test]
fn caller_supplied_instantiator_closes_over_parameters() {
    let mut factory = components();
    let starting_hp = 250;
    factory.register_instantiator("Boss", move || -> Box<dyn Component> {
        Box::new(HealthType { hp: starting_hp })
    });

    let boss = factory.create_instance("Boss").unwrap();
    assert_eq!(boss.type_tag(), "HealthType");
    assert_eq!(boss.value(), 250);
}

#[test]
fn independent_factories_do_not_share_bindings() {
    let mut left = DynamicFactory::<dyn Component>::new();
    let right = DynamicFactory::<dyn Component>::new();
    left.register_class::<HealthType>("Health");

    assert!(left.is_class("Health"));
    assert!(!right.is_class("Health"));

    let mut renderers = DynamicFactory::<dyn Renderer>::new();
    renderers.register_class::<Software>("software");
    assert_eq!(
        renderers.create_instance("software").map(|r| r.backend()),
        Some("software")
    );
}

#[test]
#[should_panic(expected = "out of parts")]
fn construction_failure_propagates_instead_of_absence() {
    let mut factory = DynamicFactory::<dyn Component>::new();
    factory.register_instantiator("Broken", || -> Box<dyn Component> {
        panic!("out of parts")
    });

    let _ = factory.create_instance("Broken");
}
