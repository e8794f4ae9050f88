use thiserror::Error;

/// Errors raised by the construction core.
///
/// All of these are usage errors. They are returned to the caller as soon as
/// they are detected and nothing retries them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("no builder configured on the director")]
    NoBuilderConfigured,

    #[error("product has no parts")]
    EmptyProduct,

    #[error("unknown recipe: '{0}'")]
    UnknownRecipe(String),

    #[error("unknown build step: '{0}'")]
    UnknownStep(String),

    #[error("unsupported export format: '{0}'")]
    UnsupportedFormat(String),
}
