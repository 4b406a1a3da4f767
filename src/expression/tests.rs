use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

fn num(n: i64) -> Expression {
    Expression::Number(n)
}

#[test]
fn test_number_evaluates_to_itself() {
    for v in [-7, 0, 1, 25, 100, i64::MAX] {
        assert_eq!(num(v).evaluate(), Ok(v));
    }
}

#[test]
fn test_division_by_zero() {
    let expr = Expression::binary(Operator::Div, num(5), num(0));
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_inexact_division() {
    let expr = Expression::binary(Operator::Div, num(7), num(2));
    assert_eq!(expr.evaluate(), Err(ExpressionError::InexactDivision));
}

#[test]
fn test_exact_division() {
    let expr = Expression::binary(Operator::Div, num(8), num(2));
    assert_eq!(expr.evaluate(), Ok(4));
}

#[test]
fn test_subtraction_may_go_negative() {
    let expr = Expression::binary(Operator::Sub, num(2), num(9));
    assert_eq!(expr.evaluate(), Ok(-7));
}

#[test]
fn test_nested_failure_propagates() {
    // 6 * (3 / 0)
    let expr = Expression::binary(
        Operator::Mul,
        num(6),
        Expression::binary(Operator::Div, num(3), num(0)),
    );
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_classic_952() {
    // ((100 + 6) * 3 * 75 - 50) / 25
    let expr = Expression::binary(
        Operator::Div,
        Expression::binary(
            Operator::Sub,
            Expression::binary(
                Operator::Mul,
                Expression::binary(
                    Operator::Mul,
                    Expression::binary(Operator::Add, num(100), num(6)),
                    num(3),
                ),
                num(75),
            ),
            num(50),
        ),
        num(25),
    );
    assert_eq!(expr.evaluate(), Ok(952));
    assert_eq!(expr.to_string(), "((((100 + 6) * 3) * 75) - 50) / 25");
    assert_eq!(expr.leaves(), vec![100, 6, 3, 75, 50, 25]);
}

#[test]
fn test_evaluate_is_deterministic() {
    let expr = Expression::binary(
        Operator::Add,
        Expression::binary(Operator::Mul, num(4), num(5)),
        num(1),
    );
    let first = expr.evaluate();
    assert_eq!(first, expr.evaluate());
    assert_eq!(first, Ok(21));
}

#[test]
fn test_display_leaf() {
    assert_eq!(num(1).to_string(), "1");
}

#[test]
fn test_display_parenthesises_operator_operands() {
    let expr = Expression::binary(
        Operator::Mul,
        Expression::binary(Operator::Add, num(100), num(50)),
        Expression::binary(Operator::Add, num(6), num(1)),
    );
    assert_eq!(expr.to_string(), "(100 + 50) * (6 + 1)");

    let expr = Expression::binary(
        Operator::Sub,
        num(9),
        Expression::binary(Operator::Div, num(8), num(2)),
    );
    assert_eq!(expr.to_string(), "9 - (8 / 2)");
}

#[test]
fn test_identical_trees_render_identically() {
    let build = || {
        Expression::binary(
            Operator::Div,
            num(75),
            Expression::binary(Operator::Sub, num(28), num(3)),
        )
    };
    assert_eq!(build(), build());
    assert_eq!(build().to_string(), build().to_string());
    assert_eq!(build().evaluate(), Ok(3));
}

#[test]
fn test_leaves_of_single_number() {
    assert_eq!(num(42).leaves(), vec![42]);
}

#[test]
fn test_operator_order_and_symbols() {
    let symbols: String = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, "+-*/");
}
