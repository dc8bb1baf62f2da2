use crate::error::ParseError;
use crate::token::{Operator, Token};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

/// Precedence and associativity for each operator the parser accepts.
/// Higher precedence binds tighter.
#[derive(Clone, Debug, PartialEq)]
pub struct OpTable {
    ops: [Option<(usize, Assoc)>; 5],
}

/// `+ -` < `* /` < `^`, with `^` grouping right to left.
pub static STANDARD: OpTable = OpTable {
    ops: [
        Some((2, Assoc::Left)),  // +
        Some((2, Assoc::Left)),  // -
        Some((3, Assoc::Left)),  // *
        Some((3, Assoc::Left)),  // /
        Some((4, Assoc::Right)), // ^
    ],
};

fn slot(op: Operator) -> usize {
    match op {
        Operator::Add => 0,
        Operator::Sub => 1,
        Operator::Mul => 2,
        Operator::Div => 3,
        Operator::Pow => 4,
    }
}

impl OpTable {
    /// Build a table from `(operator, precedence, assoc)` triples.
    /// Operators left out are rejected by the parser and evaluator.
    pub fn new<I>(descriptors: I) -> Result<OpTable, String>
    where
        I: IntoIterator<Item = (Operator, usize, Assoc)>,
    {
        let mut ops = [None; 5];
        for (op, prec, assoc) in descriptors {
            let entry = &mut ops[slot(op)];
            if entry.is_some() {
                return Err(format!("Duplicate descriptor for {}", op));
            }
            *entry = Some((prec, assoc));
        }
        Ok(OpTable { ops })
    }

    pub fn standard() -> &'static OpTable {
        &STANDARD
    }

    pub fn descriptor(&self, op: Operator) -> Option<(usize, Assoc)> {
        self.ops[slot(op)]
    }

    /// Like `descriptor` but a missing entry is an `InvalidOperator`.
    pub fn resolve(&self, op: Operator) -> Result<(usize, Assoc), ParseError> {
        self.descriptor(op).ok_or(ParseError::InvalidOperator(op))
    }

    pub fn precedence(&self, op: Operator) -> Result<usize, ParseError> {
        self.resolve(op).map(|(prec, _)| prec)
    }

    pub fn associativity(&self, op: Operator) -> Result<Assoc, ParseError> {
        self.resolve(op).map(|(_, assoc)| assoc)
    }

    /// Resolve an operator symbol that this table has a descriptor for.
    pub fn lookup(&self, symbol: &str) -> Result<Operator, ParseError> {
        match Operator::from_symbol(symbol) {
            Some(op) if self.descriptor(op).is_some() => Ok(op),
            Some(op) => Err(ParseError::InvalidOperator(op)),
            None => Err(ParseError::BadToken(symbol.to_string())),
        }
    }

    pub fn is_operator(&self, token: &Token) -> bool {
        match *token {
            Token::Op(op) => self.descriptor(op).is_some(),
            _ => false,
        }
    }
}

impl Default for OpTable {
    fn default() -> Self {
        STANDARD.clone()
    }
}
