use crate::error::Error;
use crate::eval_str;

pub const EXAMPLES: [&str; 2] = [
    "( 1 + 2 ) * ( 3 / 4 ) ^ ( 5 + 6 )",
    "1 + 2 * 3 / 4 ^ 5 + 6",
];

/// Expressions paired with the exact value they must produce.
pub const SELF_TESTS: [(&str, f64); 15] = [
    ("1 + 2", 3.0),
    ("1 - 2", -1.0),
    ("2 - 1", 1.0),
    ("4 * 3", 12.0),
    ("3 * 4", 12.0),
    ("10 / 5", 2.0),
    ("5 / 10", 0.5),
    ("2 ^ 5", 32.0),
    ("2 ^ ( 5 - 3 )", 4.0),
    ("2 ^ 5 - 3", 29.0),
    ("4 - 2 ^ 3", -4.0),
    ("( 4 - 2 ) ^ 3", 8.0),
    ("( 6 + 2 ) ^ ( 2 - 3 )", 0.125),
    ("6 + 2 ^ 2 - 3 * 5 / 5", 7.0),
    ("( 6 + 2 ) ^ ( ( 2 - 3 ) * 5 / 5 )", 0.125),
];

#[derive(Debug, PartialEq, Clone)]
pub enum Outcome {
    Passed(f64),
    Failed(f64),
    Errored(Error),
}

#[derive(Debug, Clone)]
pub struct Case {
    pub expr: &'static str,
    pub expected: f64,
    pub outcome: Outcome,
}

impl Case {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Passed(_))
    }
}

pub fn run_self_tests() -> Vec<Case> {
    SELF_TESTS
        .iter()
        .map(|&(expr, expected)| {
            let outcome = match eval_str(expr) {
                Ok(r) if r == expected => Outcome::Passed(r),
                Ok(r) => Outcome::Failed(r),
                Err(e) => Outcome::Errored(e),
            };
            Case { expr, expected, outcome }
        })
        .collect()
}
