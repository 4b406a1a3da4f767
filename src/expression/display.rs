use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_operand(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(_) => fmt_expression(f, expr),
                Expression::Binary(..) => {
                    write!(f, "(")?;
                    fmt_expression(f, expr)?;
                    write!(f, ")")
                }
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Binary(op, l, r) => {
                    write_operand(f, l)?;
                    write!(f, " {} ", op.symbol())?;
                    write_operand(f, r)
                }
            }
        }

        fmt_expression(f, self)
    }
}
