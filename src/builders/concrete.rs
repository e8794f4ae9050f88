use std::mem;
use tracing::debug;

use crate::core::builder::Builder;
use crate::core::product::Product;

/// Label appended by each build step.
const PART_A: &str = "PartA1";
const PART_B: &str = "PartB1";
const PART_C: &str = "PartC1";

/// The one concrete [`Builder`]: every step appends a fixed label to the
/// product it owns.
///
/// There is no ordering or deduplication, so client code can drive the steps
/// directly to assemble products no recipe describes.
#[derive(Debug, Default)]
pub struct ConcreteBuilder {
    product: Product,
}

impl ConcreteBuilder {
    /// Constructs a builder holding a fresh, empty product.
    pub fn new() -> Self {
        Self {
            product: Product::new(),
        }
    }

    /// Throws away the in-progress product and starts an empty one.
    pub fn reset(&mut self) {
        debug!(discarded_parts = self.product.len(), "resetting builder");
        self.product = Product::new();
    }

    /// Hands the finished product to the caller and leaves an empty one behind.
    pub fn get_product(&mut self) -> Product {
        let product = mem::take(&mut self.product);
        debug!(parts = product.len(), "product handed off");
        product
    }

    /// Read-only view of the product being assembled.
    pub fn product(&self) -> &Product {
        &self.product
    }

    fn add_part(&mut self, part: &str) {
        debug!(part, "adding part");
        self.product.add(part);
    }
}

impl Builder for ConcreteBuilder {
    fn build_part_a(&mut self) {
        self.add_part(PART_A);
    }

    fn build_part_b(&mut self) {
        self.add_part(PART_B);
    }

    fn build_part_c(&mut self) {
        self.add_part(PART_C);
    }
}
