use crate::fixtures::{run_self_tests, Outcome, EXAMPLES, SELF_TESTS};
use crate::optable::{Assoc, OpTable};
use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::Evaluator;
use crate::token::{Operator, Token};
use crate::{eval_str, evaluate, Error, EvalErr, ParseError};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

fn eval(expr: &str) -> Result<f64, EvalErr> {
    evaluate(&ShuntingParser::parse_str(expr).unwrap())
}

#[test]
fn test_eval1() {
    fuzzy_eq!(eval("3 + 4 * 2 / ( 1 - 5 ) ^ 2 ^ 3").unwrap(), 3.0001220703125);
}

#[test]
fn test_eval2() {
    fuzzy_eq!(eval("( 1 + 2 ) * ( 3 / 4 ) ^ ( 5 + 6 )").unwrap(), 0.12670540809631348);
    fuzzy_eq!(eval("1 + 2 * 3 / 4 ^ 5 + 6").unwrap(), 7.005859375);
}

#[test]
fn associativity() {
    assert_eq!(eval("2 ^ 3 ^ 2"), Ok(512.0));
    assert_eq!(eval("2 ^ 5 - 3"), Ok(29.0));
    assert_eq!(eval("4 - 2 ^ 3"), Ok(-4.0));
    assert_eq!(eval("8 - 4 - 2"), Ok(2.0));
    assert_eq!(eval("3 / 2 / 4"), Ok(0.375));
    assert_eq!(eval("( 4 - 2 ) ^ 3"), Ok(8.0));
}

#[test]
fn scenarios() {
    assert_eq!(eval("1 + 2"), Ok(3.0));
    assert_eq!(eval("10 / 5"), Ok(2.0));
    assert_eq!(eval("5 / 10"), Ok(0.5));
    assert_eq!(eval("2 ^ 5"), Ok(32.0));
    assert_eq!(eval("( 6 + 2 ) ^ ( 2 - 3 )"), Ok(0.125));
    assert_eq!(eval("6 + 2 ^ 2 - 3 * 5 / 5"), Ok(7.0));
    assert_eq!(eval("-3 * -2"), Ok(6.0));
}

#[test]
fn parenthesized_matches_direct_arithmetic() {
    fuzzy_eq!(eval("( ( 1.5 + 2 ) * ( 7 - 3 ) ) / ( 2 ^ ( 1 + 1 ) )").unwrap(),
              ((1.5 + 2.0) * (7.0 - 3.0)) / 2f64.powf(1.0 + 1.0));
    fuzzy_eq!(eval("( 9 - ( 8 - ( 7 - 6 ) ) )").unwrap(), 9.0 - (8.0 - (7.0 - 6.0)));
}

#[test]
fn division_by_zero() {
    assert_eq!(eval("5 / 0"), Err(EvalErr::DivisionByZero));
    assert_eq!(eval("5 / ( 2 - 2 )"), Err(EvalErr::DivisionByZero));
    assert_eq!(eval("5 / -0"), Err(EvalErr::DivisionByZero));
    assert_eq!(eval("0 / 5"), Ok(0.0));
}

#[test]
fn zero_exponent_policy() {
    assert_eq!(eval("2 ^ 0"), Err(EvalErr::DivisionByZero));
    assert_eq!(eval("0 ^ 0"), Err(EvalErr::DivisionByZero));
    assert_eq!(eval("0 ^ 5"), Ok(0.0));

    let lenient = Evaluator::new().reject_zero_exponent(false);
    let rpn = ShuntingParser::parse_str("2 ^ 0").unwrap();
    assert_eq!(lenient.eval(&rpn), Ok(1.0));
    let rpn = ShuntingParser::parse_str("5 / 0").unwrap();
    assert_eq!(lenient.eval(&rpn), Err(EvalErr::DivisionByZero));
}

#[test]
fn operand_count_errors() {
    assert_eq!(eval("1 +"), Err(EvalErr::StackUnderflow));
    assert_eq!(eval("+"), Err(EvalErr::StackUnderflow));
    assert_eq!(eval("1 + + 2"), Err(EvalErr::StackUnderflow));
    assert_eq!(eval("1 2"), Err(EvalErr::MalformedExpression));
    assert_eq!(eval("( 1 ) ( 2 )"), Err(EvalErr::MalformedExpression));
    assert_eq!(eval(""), Err(EvalErr::EmptyExpression));
    assert_eq!(eval("( )"), Err(EvalErr::EmptyExpression));
}

#[test]
fn evaluator_checks_table() {
    let table = OpTable::new(vec![(Operator::Add, 1, Assoc::Left)]).unwrap();
    let rpn = RPNExpr(vec![Token::Number(2.0), Token::Number(3.0), Token::Op(Operator::Mul)]);
    assert_eq!(
        Evaluator::with_table(&table).eval(&rpn),
        Err(EvalErr::InvalidOperator(Operator::Mul))
    );
    assert_eq!(Evaluator::default().eval(&rpn), Ok(6.0));

    let rpn = RPNExpr(vec![Token::Number(2.0), Token::OParen]);
    assert_eq!(Evaluator::new().eval(&rpn), Err(EvalErr::MalformedExpression));
}

#[test]
fn eval_str_chains_errors() -> Result<(), Error> {
    assert_eq!(eval_str("1 + 2 * 3")?, 7.0);
    assert_eq!(eval_str("( 1 + 2"), Err(Error::Parse(ParseError::UnbalancedParentheses)));
    assert_eq!(eval_str("1 + x"), Err(Error::Parse(ParseError::BadToken(format!("x")))));
    assert_eq!(eval_str("1 / 0"), Err(Error::Eval(EvalErr::DivisionByZero)));
    assert_eq!(
        format!("{}", eval_str("1 1").unwrap_err()),
        "Eval error: expression has too many values"
    );
    Ok(())
}

#[test]
fn fixtures_pass() {
    let cases = run_self_tests();
    assert_eq!(cases.len(), SELF_TESTS.len());
    for case in cases.iter() {
        assert!(case.passed(), "{} gave {:?}", case.expr, case.outcome);
        assert_eq!(case.outcome, Outcome::Passed(case.expected));
    }
    for expr in EXAMPLES.iter() {
        assert!(eval_str(expr).is_ok());
    }
}
