use tracing::{debug, warn};

use crate::core::builder::{Builder, Step};
use crate::core::error::BuildError;

/// A named construction sequence the [`Director`] can replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipe {
    /// A single `PartA`.
    MinimalViable,
    /// `PartA`, `PartB`, `PartC`, in that order.
    FullFeatured,
    /// Any sequence of steps, typically loaded from the config file.
    Custom(Vec<Step>),
}

impl Recipe {
    /// The steps this recipe runs, in order.
    pub fn steps(&self) -> Vec<Step> {
        match self {
            Recipe::MinimalViable => vec![Step::PartA],
            Recipe::FullFeatured => vec![Step::PartA, Step::PartB, Step::PartC],
            Recipe::Custom(steps) => steps.clone(),
        }
    }
}

/// The `Director` knows the canonical build orders and drives whichever
/// [`Builder`] it is currently pointed at.
///
/// It owns no product state. The builder is borrowed, so the caller keeps
/// the concrete type and collects the result from it once the director is
/// done with it.
#[derive(Default)]
pub struct Director<'a> {
    builder: Option<&'a mut dyn Builder>,
}

impl<'a> Director<'a> {
    pub fn new() -> Self {
        Self { builder: None }
    }

    pub fn with_builder(builder: &'a mut dyn Builder) -> Self {
        Self {
            builder: Some(builder),
        }
    }

    /// Replaces the builder the recipes run against.
    pub fn set_builder(&mut self, builder: &'a mut dyn Builder) {
        self.builder = Some(builder);
    }

    pub fn clear_builder(&mut self) {
        self.builder = None;
    }

    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    pub fn build_minimal_viable_product(&mut self) -> Result<(), BuildError> {
        self.build(&Recipe::MinimalViable)
    }

    pub fn build_full_featured_product(&mut self) -> Result<(), BuildError> {
        self.build(&Recipe::FullFeatured)
    }

    pub fn build(&mut self, recipe: &Recipe) -> Result<(), BuildError> {
        debug!(?recipe, "director running recipe");
        self.build_steps(&recipe.steps())
    }

    /// Replays `steps` on the configured builder.
    ///
    /// Fails with [`BuildError::NoBuilderConfigured`] before touching anything
    /// when no builder is set.
    pub fn build_steps(&mut self, steps: &[Step]) -> Result<(), BuildError> {
        let builder = self.builder()?;
        for &step in steps {
            builder.apply(step);
        }
        Ok(())
    }

    fn builder(&mut self) -> Result<&mut (dyn Builder + 'a), BuildError> {
        match self.builder.as_deref_mut() {
            Some(builder) => Ok(builder),
            None => {
                warn!("recipe requested but no builder is configured");
                Err(BuildError::NoBuilderConfigured)
            }
        }
    }
}
