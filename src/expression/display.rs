use std::fmt;

use crate::expression::ast::{Expression, Term};

/// Literal the base constant renders as
const BASE_LITERAL: &str = "True";

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.term() {
            Term::Base => write!(f, "{}", BASE_LITERAL),
            Term::Unary(op, operand) => write!(f, "{}({})", op.symbol(), operand),
            Term::Binary(op, lhs, rhs) => write!(f, "({}) {} ({})", lhs, op.symbol(), rhs),
        }
    }
}
