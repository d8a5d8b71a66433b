use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// One of the equivalent ways of chaining steps over a possibly-absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Formulation {
    /// Explicit presence checks between every step.
    Manual,
    /// `Maybe::map` chaining.
    Container,
    /// Nested `conditional_apply` calls.
    FreeFunction,
    /// Composition of `lift_to_optional` functions.
    Composed,
}

impl Formulation {
    pub const ALL: [Formulation; 4] = [
        Formulation::Manual,
        Formulation::Container,
        Formulation::FreeFunction,
        Formulation::Composed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Formulation::Manual => "manual",
            Formulation::Container => "container",
            Formulation::FreeFunction => "free_function",
            Formulation::Composed => "composed",
        }
    }
}

impl Display for Formulation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
