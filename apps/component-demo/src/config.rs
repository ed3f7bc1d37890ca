//! Layered demo configuration.
//!
//! Order: defaults -> YAML file (if provided) -> env (`APP__*`, `__` nests) -> CLI overrides.

use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `APP__ENTITY__NAME=boss`.
pub const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub entity: EntityConfig,
    pub health: HealthConfig,
    pub logging: LoggingConfig,
    /// Reject duplicate component registrations instead of replacing them.
    pub strict_registration: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntityConfig {
    pub name: String,
    /// Component class names, resolved through the factory in this order.
    pub components: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthConfig {
    pub max_hp: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            name: "player".to_owned(),
            components: vec!["HealthComponent".to_owned(), "WeaponComponent".to_owned()],
        }
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self { max_hp: 100 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

impl DemoConfig {
    /// Load the layered configuration; `path` is optional.
    ///
    /// # Errors
    ///
    /// Fails if `path` is given but is not a file, or if any layer does not
    /// deserialize into [`DemoConfig`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")
    }

    /// Apply command-line overrides on top of the loaded layers.
    pub fn apply_cli_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(name) = &overrides.entity_name {
            self.entity.name.clone_from(name);
        }
        if !overrides.components.is_empty() {
            self.entity.components.clone_from(&overrides.components);
        }
        match overrides.verbose {
            0 => {}
            1 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
        if overrides.strict {
            self.strict_registration = true;
        }
    }
}

/// Values taken from the command line that override configuration.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub entity_name: Option<String>,
    pub components: Vec<String>,
    pub verbose: u8,
    pub strict: bool,
}
