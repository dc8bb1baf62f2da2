use crate::error::EvalErr;
use crate::optable::{OpTable, STANDARD};
use crate::parser::RPNExpr;
use crate::token::{Operator, Token};

/// Stack machine over an `RPNExpr`.
///
/// By default a zero exponent is refused with `DivisionByZero`, the same
/// check that guards `/`. So `2 ^ 0` fails unless `reject_zero_exponent`
/// is turned off.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator<'t> {
    table: &'t OpTable,
    reject_zero_exponent: bool,
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Evaluator::new()
    }
}

impl Evaluator<'static> {
    pub fn new() -> Evaluator<'static> {
        Evaluator::with_table(&STANDARD)
    }
}

impl<'t> Evaluator<'t> {
    pub fn with_table(table: &'t OpTable) -> Evaluator<'t> {
        Evaluator { table, reject_zero_exponent: true }
    }

    pub fn reject_zero_exponent(mut self, reject: bool) -> Self {
        self.reject_zero_exponent = reject;
        self
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in rpn.iter() {
            match *token {
                Token::Number(num) => operands.push(num),
                Token::Op(op) if self.table.is_operator(token) => {
                    let r = operands.pop().ok_or(EvalErr::StackUnderflow)?;
                    let l = operands.pop().ok_or(EvalErr::StackUnderflow)?;
                    operands.push(self.apply(op, l, r)?);
                }
                Token::Op(op) => return Err(EvalErr::InvalidOperator(op)),
                // parens never survive conversion
                Token::OParen | Token::CParen => return Err(EvalErr::MalformedExpression),
            }
        }
        let result = operands.pop().ok_or(EvalErr::EmptyExpression)?;
        if !operands.is_empty() {
            return Err(EvalErr::MalformedExpression);
        }
        Ok(result)
    }

    fn apply(&self, op: Operator, l: f64, r: f64) -> Result<f64, EvalErr> {
        match op {
            Operator::Add => Ok(l + r),
            Operator::Sub => Ok(l - r),
            Operator::Mul => Ok(l * r),
            Operator::Div if r == 0.0 => Err(EvalErr::DivisionByZero),
            Operator::Div => Ok(l / r),
            Operator::Pow if r == 0.0 && self.reject_zero_exponent => {
                Err(EvalErr::DivisionByZero)
            }
            Operator::Pow => Ok(l.powf(r)),
        }
    }
}
