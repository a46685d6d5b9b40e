use thiserror::Error;

/// Errors raised while applying an operator to integer operands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Negative shift count")]
    NegativeShift,
    #[error("Result does not fit in {limit} bits")]
    Overflow { limit: u64 },
}

impl ArithmeticError {
    /// Whether this error marks a magnitude too large to materialize
    pub fn is_overflow(&self) -> bool {
        matches!(self, ArithmeticError::Overflow { .. })
    }
}
