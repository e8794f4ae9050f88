use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of every rendered product description.
const LIST_PREFIX: &str = "Product parts: ";

/// The value a builder assembles: an ordered list of part labels.
///
/// A `Product` is created empty by a builder, filled through [`Product::add`]
/// and handed to the caller by value once the build is done.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    /// Creates an empty product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a part label. Insertion order is kept and duplicates are allowed.
    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Renders the product as `"Product parts: p1, p2, ..., pn\n"`.
    ///
    /// An empty product renders as `"Product parts: \n"`.
    pub fn list_parts(&self) -> String {
        format!("{LIST_PREFIX}{}\n", self.parts.join(", "))
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.list_parts())
    }
}
