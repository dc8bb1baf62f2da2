use crate::error::ParseError;
use crate::optable::{Assoc, OpTable};
use crate::token::{tokenize, Token};
use std::ops::Deref;

/// Tokens in postfix order.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<Token>);

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(tokenize(expr)?)
    }

    pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<RPNExpr, ParseError> {
        Self::parse_with(&crate::optable::STANDARD, tokens)
    }

    pub fn parse_with(
        table: &OpTable,
        tokens: impl IntoIterator<Item = Token>,
    ) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in tokens {
            match token {
                Token::Number(_) => out.push(token),
                Token::OParen => stack.push(token),
                Token::CParen => {
                    loop {
                        match stack.pop() {
                            Some(Token::OParen) => break, // peel matching OParen
                            Some(top) => out.push(top),
                            None => return Err(ParseError::UnbalancedParentheses),
                        }
                    }
                }
                Token::Op(op) => {
                    let (prec_rhs, assoc_rhs) = table.resolve(op)?;
                    while let Some(&Token::Op(top)) = stack.last() {
                        let (prec_lhs, _) = table.resolve(top)?;
                        let yields = match assoc_rhs {
                            Assoc::Left => prec_rhs <= prec_lhs,
                            Assoc::Right => prec_rhs < prec_lhs,
                        };
                        if !yields {
                            break;
                        }
                        out.push(Token::Op(top));
                        stack.pop();
                    }
                    stack.push(token);
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::OParen => return Err(ParseError::UnbalancedParentheses),
                token => out.push(token),
            }
        }
        Ok(RPNExpr(out))
    }
}
