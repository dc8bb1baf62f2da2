use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    pub fn symbol(&self) -> &'static str {
        match *self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
        }
    }

    pub fn from_symbol(sym: &str) -> Option<Operator> {
        Self::ALL.iter().copied().find(|op| op.symbol() == sym)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Token {
    Number(f64),
    Op(Operator),
    OParen,
    CParen,
}

impl FromStr for Token {
    type Err = ParseError;

    fn from_str(lexeme: &str) -> Result<Token, ParseError> {
        match lexeme {
            "(" => Ok(Token::OParen),
            ")" => Ok(Token::CParen),
            _ => match Operator::from_symbol(lexeme) {
                Some(op) => Ok(Token::Op(op)),
                None => f64::from_str(lexeme)
                    .map(Token::Number)
                    .map_err(|_| ParseError::BadToken(lexeme.to_string())),
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Op(op) => write!(f, "{}", op),
            Token::OParen => write!(f, "("),
            Token::CParen => write!(f, ")"),
        }
    }
}

/// Split an expression on whitespace and classify each piece.
/// Tokens must be separated: `(1+2)` is a single bad token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    input.split_whitespace().map(Token::from_str).collect()
}
