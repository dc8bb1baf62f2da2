use crate::token::Operator;
use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum ParseError {
    BadToken(String),
    InvalidOperator(Operator),
    UnbalancedParentheses,
}

#[derive(Debug, PartialEq, Clone)]
pub enum EvalErr {
    InvalidOperator(Operator),
    DivisionByZero,
    StackUnderflow,
    MalformedExpression,
    EmptyExpression,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    Parse(ParseError),
    Eval(EvalErr),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::BadToken(lexeme) => write!(f, "bad token: {:?}", lexeme),
            ParseError::InvalidOperator(op) => write!(f, "no descriptor for operator {}", op),
            ParseError::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
        }
    }
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalErr::InvalidOperator(op) => write!(f, "no descriptor for operator {}", op),
            EvalErr::DivisionByZero => write!(f, "divide by 0"),
            EvalErr::StackUnderflow => write!(f, "operator is missing operands"),
            EvalErr::MalformedExpression => write!(f, "expression has too many values"),
            EvalErr::EmptyExpression => write!(f, "empty expression"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Eval(e) => write!(f, "Eval error: {}", e),
        }
    }
}

impl std::error::Error for ParseError {}
impl std::error::Error for EvalErr {}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<EvalErr> for Error {
    fn from(e: EvalErr) -> Self {
        Error::Eval(e)
    }
}
