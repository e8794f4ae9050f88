use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::BuildError;

/// A single construction step a [`Builder`] knows how to perform.
///
/// Steps are what configured recipes are written in, e.g. `["part-a", "part-c"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    PartA,
    PartB,
    PartC,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::PartA => write!(f, "part-a"),
            Step::PartB => write!(f, "part-b"),
            Step::PartC => write!(f, "part-c"),
        }
    }
}

impl FromStr for Step {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "part-a" => Ok(Step::PartA),
            "part-b" => Ok(Step::PartB),
            "part-c" => Ok(Step::PartC),
            other => Err(BuildError::UnknownStep(other.to_string())),
        }
    }
}

/// The `Builder` trait declares the construction steps every builder supports.
///
/// Retrieving the finished result is deliberately left out: each concrete
/// builder decides what it yields, so `get_product` lives on the concrete type.
/// Steps may be called in any order and any number of times.
pub trait Builder {
    fn build_part_a(&mut self);

    fn build_part_b(&mut self);

    fn build_part_c(&mut self);

    /// Runs the build step matching `step`.
    fn apply(&mut self, step: Step) {
        match step {
            Step::PartA => self.build_part_a(),
            Step::PartB => self.build_part_b(),
            Step::PartC => self.build_part_c(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<&'static str>);

    impl Builder for Recorder {
        fn build_part_a(&mut self) {
            self.0.push("a");
        }

        fn build_part_b(&mut self) {
            self.0.push("b");
        }

        fn build_part_c(&mut self) {
            self.0.push("c");
        }
    }

    #[test]
    fn test_apply_dispatches_to_matching_step() {
        let mut recorder = Recorder::default();
        recorder.apply(Step::PartC);
        recorder.apply(Step::PartA);
        recorder.apply(Step::PartB);
        assert_eq!(recorder.0, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_step_parsing() {
        assert_eq!("part-b".parse::<Step>().unwrap(), Step::PartB);
        assert_eq!(Step::PartC.to_string(), "part-c");
        assert_eq!(
            "part-d".parse::<Step>(),
            Err(BuildError::UnknownStep("part-d".to_string()))
        );
    }
}
