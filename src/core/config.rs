use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::builder::Step;
use crate::core::director::Recipe;
use crate::core::error::BuildError;

/// File name looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "product-builder.toml";

/// Recipe names that always exist and cannot be redefined in the config file.
pub const BUILTIN_RECIPES: [&str; 2] = ["minimal", "full"];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Toml,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Result<Self, BuildError> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "toml" => Ok(OutputFormat::Toml),
            other => Err(BuildError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    pub version: String,
    #[serde(default)]
    pub output: OutputSettings,
    /// Named step sequences, e.g. `custom = ["part-a", "part-c"]`.
    #[serde(default)]
    pub recipes: BTreeMap<String, Vec<Step>>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        let mut recipes = BTreeMap::new();
        recipes.insert("custom".to_string(), vec![Step::PartA, Step::PartC]);

        Self {
            version: "1.0".to_string(),
            output: OutputSettings::default(),
            recipes,
        }
    }
}

impl BuilderConfig {
    /// Resolves a recipe by name. Built-in names win over configured ones.
    pub fn recipe(&self, name: &str) -> Result<Recipe, BuildError> {
        match name {
            "minimal" => Ok(Recipe::MinimalViable),
            "full" => Ok(Recipe::FullFeatured),
            other => self
                .recipes
                .get(other)
                .map(|steps| Recipe::Custom(steps.clone()))
                .ok_or_else(|| BuildError::UnknownRecipe(other.to_string())),
        }
    }

    /// Every recipe name available, built-ins first.
    pub fn recipe_names(&self) -> Vec<String> {
        BUILTIN_RECIPES
            .iter()
            .map(|name| name.to_string())
            .chain(
                self.recipes
                    .keys()
                    .filter(|name| !BUILTIN_RECIPES.contains(&name.as_str()))
                    .cloned(),
            )
            .collect()
    }
}

pub trait ConfigProvider {
    fn load_config(&self) -> Result<BuilderConfig>;
    fn save_config(&self, config: &BuilderConfig) -> Result<()>;
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Uses [`DEFAULT_CONFIG_FILE`] in the current directory.
    pub fn new() -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to read current directory")?;
        Ok(Self::new_at(current_dir.join(DEFAULT_CONFIG_FILE)))
    }

    pub fn new_at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Writes the default config unless a file already exists.
    pub fn initialize(&self) -> Result<()> {
        if self.config_path.exists() {
            return Ok(());
        }

        let default_config = BuilderConfig::default();
        self.save_config(&default_config)?;
        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

impl ConfigProvider for ConfigManager {
    fn load_config(&self) -> Result<BuilderConfig> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(BuilderConfig::default());
        }

        let content =
            fs::read_to_string(&self.config_path).context("Failed to read config file")?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    fn save_config(&self, config: &BuilderConfig) -> Result<()> {
        let content = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, content).context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new_at(dir.path().join("absent.toml"));
        assert_eq!(manager.load_config().unwrap(), BuilderConfig::default());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "version = \"2.0\"\n").unwrap();

        let manager = ConfigManager::new_at(&path);
        manager.initialize().unwrap();

        let config = manager.load_config().unwrap();
        assert_eq!(config.version, "2.0");
        assert!(config.recipes.is_empty());
    }

    #[test]
    fn test_parses_recipes_and_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            "version = \"1.0\"\n[output]\nformat = \"json\"\n[recipes]\nbacks = [\"part-b\", \"part-b\"]\n",
        )
        .unwrap();

        let config = ConfigManager::new_at(&path).load_config().unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(
            config.recipe("backs").unwrap(),
            Recipe::Custom(vec![Step::PartB, Step::PartB])
        );
    }

    #[test]
    fn test_unknown_step_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "version = \"1.0\"\n[recipes]\nbad = [\"part-z\"]\n").unwrap();

        assert!(ConfigManager::new_at(&path).load_config().is_err());
    }

    #[test]
    fn test_builtin_recipes_cannot_be_shadowed() {
        let mut config = BuilderConfig::default();
        config.recipes.insert("full".to_string(), vec![Step::PartC]);

        assert_eq!(config.recipe("full").unwrap(), Recipe::FullFeatured);
        assert_eq!(config.recipe_names(), vec!["minimal", "full", "custom"]);
        assert_eq!(
            config.recipe("nope"),
            Err(BuildError::UnknownRecipe("nope".to_string()))
        );
    }
}
