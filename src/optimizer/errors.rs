use num_bigint::BigInt;
use thiserror::Error;

use crate::operator::ArithmeticError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizerError {
    #[error("Scores start at 1")]
    InvalidScore,
    #[error("Score {score} is above the current ceiling {ceiling}")]
    ScoreNotReached { score: usize, ceiling: usize },
    #[error("No expression found yet for value {0}")]
    ValueNotFound(BigInt),
    #[error("Round aborted: {0}")]
    Arithmetic(#[from] ArithmeticError),
}
