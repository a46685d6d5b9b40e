use thiserror::Error;

use crate::operator::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Operator `{operator}` takes {expected} operand(s), but {got} were given")]
    TypeMismatch {
        operator: Operator,
        expected: usize,
        got: usize,
    },
}
