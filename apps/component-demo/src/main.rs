//! Component demo
//!
//! Registers a handful of game components in a dynamic factory and assembles
//! an entity from component names taken from configuration.
//!
//! # Usage
//!
//! ```bash
//! # Build the default player (health + weapon)
//! component-demo
//!
//! # Custom entity from a config file, debug logging
//! component-demo --config demo.yaml -v run
//!
//! # Override components on the command line
//! component-demo --component ShieldComponent --component HealthComponent
//! ```

// CLI tools are expected to print to stdout
#![allow(clippy::print_stdout)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod components;
mod config;
mod entity;
mod logging;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use crate::components::{ComponentFactory, RegistrationOptions, register_builtin};
use crate::config::{CliOverrides, DemoConfig};
use crate::entity::Entity;

/// Component demo - build entities from named components
#[derive(Parser)]
#[command(name = "component-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Entity name (overrides config)
    #[arg(long)]
    name: Option<String>,

    /// Component to add, repeatable (replaces the configured list)
    #[arg(long = "component", action = clap::ArgAction::Append)]
    components: Vec<String>,

    /// Reject duplicate component registrations
    #[arg(long)]
    strict: bool,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the entity and describe its components
    Run,
    /// List registered component names
    List,
    /// Verify that every configured component is registered
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config: defaults -> YAML -> env (APP__*) -> CLI overrides.
    let mut config = DemoConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        entity_name: cli.name.clone(),
        components: cli.components.clone(),
        verbose: cli.verbose,
        strict: cli.strict,
    });

    logging::init_logging(&config.logging.level);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let factory = build_factory(&config)?;
    tracing::info!(
        classes = factory.len(),
        factory_hash = format_args!("{:016x}", factory.factory_hash()),
        "component factory ready"
    );

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            run(&config, &factory);
            Ok(())
        }
        Commands::List => {
            list(&factory);
            Ok(())
        }
        Commands::Check => check(&config, &factory),
    }
}

fn build_factory(config: &DemoConfig) -> Result<ComponentFactory> {
    let mut factory = ComponentFactory::new();
    register_builtin(
        &mut factory,
        RegistrationOptions {
            max_hp: config.health.max_hp,
            strict: config.strict_registration,
        },
    )?;
    Ok(factory)
}

fn run(config: &DemoConfig, factory: &ComponentFactory) {
    let assembly = Entity::assemble(
        &config.entity.name,
        factory,
        config.entity.components.as_slice(),
    );
    tracing::debug!(
        entity = %assembly.entity.name(),
        count = assembly.entity.components().len(),
        components = ?assembly.entity.type_tags(),
        "assembled entity"
    );

    for line in assembly.entity.describe() {
        println!("{line}");
    }
    if !assembly.missing.is_empty() {
        tracing::warn!(
            entity = %assembly.entity.name(),
            missing = ?assembly.missing,
            "entity assembled without some components"
        );
    }
}

fn list(factory: &ComponentFactory) {
    for name in factory.class_names() {
        println!("{name}");
    }
}

fn check(config: &DemoConfig, factory: &ComponentFactory) -> Result<()> {
    let unknown: Vec<&str> = config
        .entity
        .components
        .iter()
        .map(String::as_str)
        .filter(|name| !factory.is_class(name))
        .collect();

    if !unknown.is_empty() {
        bail!("unknown components: {}", unknown.join(", "));
    }

    println!("Configuration is valid");
    Ok(())
}
