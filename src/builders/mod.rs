// This file is the module declaration file for the `builders` module.
// It holds the concrete side of the construction core: the builders that
// implement the `Builder` trait and the helpers that turn their products
// into output.

// `concrete` module:
// `ConcreteBuilder`, the builder whose steps append the `PartA1`, `PartB1`
// and `PartC1` labels to the product it owns.
pub mod concrete;

// `exporter` module:
// Serializes a finished `Product` as text, JSON, YAML or TOML for the
// `build --format` command.
pub mod exporter;

// `reporter` module:
// The `ProductReporter` trait and its `ConsoleReporter`, which prints the
// titled demo blocks and the recipe listing.
pub mod reporter;
