use anyhow::{Context, Result};
use std::io::{self, Stdout, Write};

use crate::core::config::BuilderConfig;
use crate::core::product::Product;

/// Output surface for finished products and recipe listings.
pub trait ProductReporter {
    /// Writes a titled product block.
    fn report_product(&mut self, title: &str, product: &Product) -> Result<()>;

    /// Writes every recipe the config knows about, with its steps.
    fn report_recipes(&mut self, config: &BuilderConfig) -> Result<()>;
}

/// Writes reports to a console-like sink, standard output by default.
pub struct ConsoleReporter<W: Write = Stdout> {
    out: W,
}

impl ConsoleReporter<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleReporter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Formats one line of the recipe listing, e.g. `full: part-a -> part-b -> part-c`.
    fn format_recipe_line(&self, name: &str, steps: &[String]) -> String {
        if steps.is_empty() {
            format!("{name}: (no steps)")
        } else {
            format!("{name}: {}", steps.join(" -> "))
        }
    }
}

impl<W: Write> ProductReporter for ConsoleReporter<W> {
    fn report_product(&mut self, title: &str, product: &Product) -> Result<()> {
        // `list_parts` carries its own newline, so each block ends with a blank line.
        writeln!(self.out, "{title}:\n{}", product.list_parts())
            .context("Failed to write product report")?;
        Ok(())
    }

    fn report_recipes(&mut self, config: &BuilderConfig) -> Result<()> {
        writeln!(self.out, "Available recipes:").context("Failed to write recipe list")?;
        for name in config.recipe_names() {
            let recipe = config.recipe(&name)?;
            let steps: Vec<String> = recipe.steps().iter().map(ToString::to_string).collect();
            let line = self.format_recipe_line(&name, &steps);
            writeln!(self.out, "  {line}").context("Failed to write recipe list")?;
        }
        Ok(())
    }
}
