use anyhow::{Context, Result};
use tracing::info;

use crate::builders::concrete::ConcreteBuilder;
use crate::builders::exporter;
use crate::builders::reporter::{ConsoleReporter, ProductReporter};
use crate::core::builder::{Builder, Step};
use crate::core::config::{BuilderConfig, ConfigManager, ConfigProvider, OutputFormat};
use crate::core::director::{Director, Recipe};
use crate::core::product::Product;

/// Builds the three demonstration products in order: the minimal recipe, the
/// full-featured recipe, and a custom product driven directly on the builder
/// without the director.
pub fn demo_products() -> Result<Vec<(&'static str, Product)>> {
    let mut builder = ConcreteBuilder::new();
    let mut products = Vec::with_capacity(3);

    Director::with_builder(&mut builder).build_minimal_viable_product()?;
    products.push(("Standard basic product", builder.get_product()));

    Director::with_builder(&mut builder).build_full_featured_product()?;
    products.push(("Standard full featured product", builder.get_product()));

    builder.build_part_a();
    builder.build_part_c();
    products.push(("Custom product", builder.get_product()));

    Ok(products)
}

/// Writes the three demonstration products through `reporter`, in order.
pub fn run_demo(reporter: &mut impl ProductReporter) -> Result<()> {
    for (title, product) in demo_products()? {
        reporter.report_product(title, &product)?;
    }
    Ok(())
}

/// Runs `recipe` on a fresh builder and returns the finished product.
pub fn build_recipe(recipe: &Recipe) -> Result<Product> {
    let mut builder = ConcreteBuilder::new();
    Director::with_builder(&mut builder).build(recipe)?;
    Ok(builder.get_product())
}

/// Picks the recipe for a `build` invocation: explicit `steps` win, otherwise
/// `recipe_name` is looked up in the config.
pub fn resolve_recipe(
    config: &BuilderConfig,
    recipe_name: Option<&str>,
    steps: &[Step],
) -> Result<Recipe> {
    if !steps.is_empty() {
        return Ok(Recipe::Custom(steps.to_vec()));
    }
    match recipe_name {
        Some(name) => Ok(config.recipe(name)?),
        None => anyhow::bail!("Either a recipe name or --steps is required"),
    }
}

/// Resolves the recipe, builds it on a fresh builder and prints the export.
pub fn run_build(
    config_manager: &ConfigManager,
    recipe_name: Option<&str>,
    steps: &[Step],
    format: Option<&str>,
) -> Result<()> {
    let config = config_manager.load_config()?;
    let recipe = resolve_recipe(&config, recipe_name, steps)?;
    let format = match format {
        Some(name) => OutputFormat::parse(name)?,
        None => config.output.format,
    };

    let product = build_recipe(&recipe)?;
    let output = exporter::export(&product, format)
        .with_context(|| format!("Failed to export product from recipe {recipe:?}"))?;
    print!("{output}");
    Ok(())
}

pub fn list_recipes(config_manager: &ConfigManager) -> Result<()> {
    let config = config_manager.load_config()?;
    ConsoleReporter::new().report_recipes(&config)
}

pub fn initialize_config(config_manager: &ConfigManager) -> Result<()> {
    config_manager.initialize()?;
    info!(path = %config_manager.config_path().display(), "config initialized");
    println!("✓ Initialized {}", config_manager.config_path().display());
    Ok(())
}
