use anyhow::{Context, Result};

use crate::core::config::OutputFormat;
use crate::core::error::BuildError;
use crate::core::product::Product;

/// Renders a finished product in the requested format.
///
/// `Text` is the plain `list_parts` description. The structured formats
/// serialize the product with serde. Empty products are refused with
/// [`BuildError::EmptyProduct`].
pub fn export(product: &Product, format: OutputFormat) -> Result<String> {
    if product.is_empty() {
        return Err(BuildError::EmptyProduct.into());
    }

    let content = match format {
        OutputFormat::Text => product.list_parts(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(product).context("Failed to serialize to JSON")?
        }
        OutputFormat::Yaml => serde_yaml::to_string(product).context("Failed to serialize to YAML")?,
        OutputFormat::Toml => {
            toml::to_string_pretty(product).context("Failed to serialize to TOML")?
        }
    };

    Ok(content)
}
