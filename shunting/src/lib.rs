#![deny(warnings)]

mod error;
pub use error::{Error, EvalErr, ParseError};

mod token;
pub use token::{tokenize, Operator, Token};

pub mod optable;
pub use optable::{Assoc, OpTable};

mod parser;
pub use parser::{RPNExpr, ShuntingParser};

mod rpneval;
pub use rpneval::Evaluator;
#[cfg(test)]
mod rpneval_test;

mod rpnprint;

pub mod fixtures;

/// Infix tokens to postfix using the standard operator table.
pub fn convert(tokens: &[Token]) -> Result<RPNExpr, ParseError> {
    ShuntingParser::parse(tokens.iter().copied())
}

/// Evaluate postfix tokens with the default evaluator.
pub fn evaluate(rpn: &RPNExpr) -> Result<f64, EvalErr> {
    Evaluator::new().eval(rpn)
}

/// Tokenize, convert and evaluate in one go.
pub fn eval_str(expr: &str) -> Result<f64, Error> {
    let rpn = ShuntingParser::parse_str(expr)?;
    Ok(evaluate(&rpn)?)
}
