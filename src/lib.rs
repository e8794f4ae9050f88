//! A small construction kit built around the Builder pattern.
//!
//! A [`Builder`](crate::core::builder::Builder) exposes discrete build steps, the
//! [`ConcreteBuilder`](crate::builders::concrete::ConcreteBuilder) turns them into
//! labelled parts of a [`Product`](crate::core::product::Product), and the
//! [`Director`](crate::core::director::Director) knows the canonical recipes.
pub mod builders;
pub mod core;
pub mod utils;
