//! Runs the builder demonstration, or a single recipe, from the command line.
//! With no subcommand it prints the three demo products: the minimal and
//! full-featured director recipes, then a custom product assembled by
//! calling the builder steps directly.
use anyhow::Result;
use clap::{Parser, Subcommand};
use product_builder::builders::reporter::ConsoleReporter;
use product_builder::core::builder::Step;
use product_builder::core::config::ConfigManager;
use product_builder::utils;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "product-builder")]
#[command(about = "Assemble products step by step with builders and recipes")]
struct Cli {
    /// Path to the config file (defaults to ./product-builder.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the three demonstration products
    Demo,
    /// Build one recipe on a fresh builder and print the product
    Build {
        /// Recipe name: minimal, full, or one defined in the config file
        #[arg(required_unless_present = "steps")]
        recipe: Option<String>,
        /// Ad-hoc step sequence instead of a recipe, e.g. part-a,part-c
        #[arg(long, value_delimiter = ',', conflicts_with = "recipe")]
        steps: Vec<Step>,
        /// Output format: text, json, yaml or toml
        #[arg(short, long)]
        format: Option<String>,
    },
    /// List the available recipes and their steps
    Recipes,
    /// Write a default config file
    Init,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => utils::run_demo(&mut ConsoleReporter::new()),
        Commands::Build {
            recipe,
            steps,
            format,
        } => utils::run_build(
            &config_manager(cli.config)?,
            recipe.as_deref(),
            &steps,
            format.as_deref(),
        ),
        Commands::Recipes => utils::list_recipes(&config_manager(cli.config)?),
        Commands::Init => utils::initialize_config(&config_manager(cli.config)?),
    }
}

// Only the commands that touch the config file resolve its location.
fn config_manager(path: Option<PathBuf>) -> Result<ConfigManager> {
    match path {
        Some(path) => Ok(ConfigManager::new_at(path)),
        None => ConfigManager::new(),
    }
}
