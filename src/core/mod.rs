// This file is the module declaration file for the `core` module.
// It declares the construction core: the product value, the `Builder`
// capability trait, the `Director` that replays recipes, the error
// taxonomy, and the optional config file.

// `product` module:
// `Product`, an ordered list of part labels with its `list_parts` rendering.
pub mod product;

// `builder` module:
// The `Builder` trait and the `Step` enum recipes are written in.
pub mod builder;

// `director` module:
// `Director` and `Recipe`, the canonical build orders run against any builder.
pub mod director;

pub mod config;
pub mod error;
