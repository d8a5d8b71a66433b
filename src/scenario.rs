use itertools::Itertools;
use serde::Deserialize;
use tracing::debug;

use crate::apply::{conditional_apply, lift_to_optional};
use crate::error::{MResult, MaybeError};
use crate::formulation::Formulation;
use crate::Maybe;

/// Integer division that yields [`Maybe::Nothing`] for a zero divisor.
pub fn divide(dividend: i64, divisor: i64) -> Maybe<i64> {
    match divisor {
        0 => {
            debug!(dividend, "division by zero yields nothing");
            Maybe::Nothing
        }
        _ => Maybe::Value(dividend.wrapping_div(divisor)),
    }
}

pub fn square(input: i64) -> i64 {
    input.wrapping_mul(input)
}

pub fn to_string(input: i64) -> String {
    format!("{input}")
}

/// Divide, square, then stringify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    pub dividend: i64,
    pub divisor: i64,
}

impl Scenario {
    pub fn new(dividend: i64, divisor: i64) -> Self {
        Self { dividend, divisor }
    }

    /// Parses `{"dividend": .., "divisor": ..}`.
    pub fn from_json(input: &str) -> MResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn evaluate(&self, formulation: Formulation) -> Option<String> {
        let out = match formulation {
            Formulation::Manual => self.manual(),
            Formulation::Container => divide(self.dividend, self.divisor)
                .map(square)
                .map(to_string)
                .into_option(),
            Formulation::FreeFunction => {
                let division = divide(self.dividend, self.divisor).into_option();
                conditional_apply(conditional_apply(division, square), to_string)
            }
            Formulation::Composed => {
                let if_present_square = lift_to_optional(square);
                let if_present_to_string = lift_to_optional(to_string);
                let division = divide(self.dividend, self.divisor).into_option();
                if_present_to_string(if_present_square(division))
            }
        };

        debug!(
            dividend = self.dividend,
            divisor = self.divisor,
            %formulation,
            result = ?out,
            "evaluated formulation"
        );
        out
    }

    pub fn run(&self) -> Report {
        let outcomes = Formulation::ALL
            .into_iter()
            .map(|formulation| (formulation, self.evaluate(formulation)))
            .collect();
        Report::new(*self, outcomes)
    }

    fn manual(&self) -> Option<String> {
        let division = divide(self.dividend, self.divisor).into_option();

        let mut squared = None;
        if let Some(d) = division {
            squared = Some(square(d));
        }

        let mut rendered = None;
        if let Some(s) = squared {
            rendered = Some(to_string(s));
        }

        rendered
    }
}

/// Results of every [`Formulation`] for a single [`Scenario`].
#[derive(Debug, Clone)]
pub struct Report {
    scenario: Scenario,
    outcomes: Vec<(Formulation, Option<String>)>,
}

impl Report {
    fn new(scenario: Scenario, outcomes: Vec<(Formulation, Option<String>)>) -> Self {
        Self { scenario, outcomes }
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn outcomes(&self) -> &[(Formulation, Option<String>)] {
        &self.outcomes
    }

    pub fn agrees(&self) -> bool {
        self.outcomes.iter().map(|(_, out)| out).all_equal()
    }

    /// The value every formulation agreed on.
    pub fn result(self) -> MResult<Maybe<String>> {
        if !self.agrees() {
            return Err(MaybeError::Disagreement(self.describe()));
        }

        Ok(self
            .outcomes
            .into_iter()
            .next()
            .and_then(|(_, out)| out)
            .into())
    }

    fn describe(&self) -> String {
        self.outcomes
            .iter()
            .map(|(formulation, out)| format!("{formulation}: {}", Maybe::from(out.as_deref())))
            .join(", ")
    }
}
