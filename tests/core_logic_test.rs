use product_builder::builders::concrete::ConcreteBuilder;
use product_builder::builders::exporter;
use product_builder::core::builder::{Builder, Step};
use product_builder::core::config::{BuilderConfig, ConfigManager, ConfigProvider, OutputFormat};
use product_builder::core::director::{Director, Recipe};
use product_builder::core::error::BuildError;
use std::fs;

#[test]
fn test_core_workflow() {
    let mut builder = ConcreteBuilder::new();

    // 1. Minimal recipe through the director
    Director::with_builder(&mut builder)
        .build_minimal_viable_product()
        .unwrap();
    assert_eq!(builder.get_product().list_parts(), "Product parts: PartA1\n");

    // 2. Full-featured recipe on the same builder
    Director::with_builder(&mut builder)
        .build_full_featured_product()
        .unwrap();
    assert_eq!(
        builder.get_product().list_parts(),
        "Product parts: PartA1, PartB1, PartC1\n"
    );

    // 3. Custom product without the director
    builder.build_part_a();
    builder.build_part_c();
    assert_eq!(builder.get_product().list_parts(), "Product parts: PartA1, PartC1\n");

    // 4. The builder is empty again
    assert!(builder.get_product().is_empty());
}

#[test]
fn test_reset_then_get_product_is_empty() {
    let mut builder = ConcreteBuilder::new();
    builder.build_part_a();
    builder.build_part_b();
    builder.reset();
    let product = builder.get_product();
    assert_eq!(product.len(), 0);
    assert_eq!(product.list_parts(), "Product parts: \n");
}

#[test]
fn test_director_without_builder() {
    let mut director = Director::new();
    assert_eq!(
        director.build(&Recipe::FullFeatured),
        Err(BuildError::NoBuilderConfigured)
    );
}

#[test]
fn test_config_file_drives_build_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipes.toml");
    fs::write(
        &path,
        "version = \"1.0\"\n\n[output]\nformat = \"json\"\n\n[recipes]\nsandwich = [\"part-b\", \"part-a\", \"part-b\"]\n",
    )
    .unwrap();

    let config = ConfigManager::new_at(&path).load_config().unwrap();
    let recipe = config.recipe("sandwich").unwrap();
    assert_eq!(recipe.steps(), vec![Step::PartB, Step::PartA, Step::PartB]);

    let mut builder = ConcreteBuilder::new();
    Director::with_builder(&mut builder).build(&recipe).unwrap();
    let product = builder.get_product();

    let json = exporter::export(&product, config.output.format).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["parts"][1], "PartA1");
}

#[test]
fn test_unknown_format_and_recipe() {
    assert_eq!(
        OutputFormat::parse("xml"),
        Err(BuildError::UnsupportedFormat("xml".to_string()))
    );
    assert!(matches!(
        BuilderConfig::default().recipe("deluxe"),
        Err(BuildError::UnknownRecipe(name)) if name == "deluxe"
    ));
}
