use log::trace;
use num_bigint::BigInt;
use num_traits::One;

use crate::expression::ast::{Expression, Term};
use crate::operator::ArithmeticError;

impl Expression {
    /// Evaluate the expression, memoizing the result.
    ///
    /// # Errors
    ///
    /// Returns an error when any operator application fails:
    /// - Division or modulo by zero
    /// - Shift by a negative amount
    /// - A result wider than the value limit
    pub fn evaluate(&self) -> Result<&BigInt, ArithmeticError> {
        self.0
            .value
            .get_or_init(|| self.compute())
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Memoized value if it has been evaluated successfully
    pub fn cached_value(&self) -> Option<&BigInt> {
        self.0.value.get().and_then(|value| value.as_ref().ok())
    }

    fn compute(&self) -> Result<BigInt, ArithmeticError> {
        let result = match self.term() {
            Term::Base => Ok(BigInt::one()),
            Term::Unary(op, operand) => op.apply(operand.evaluate()?),
            Term::Binary(op, lhs, rhs) => op.apply(lhs.evaluate()?, rhs.evaluate()?),
        };

        if let Err(e) = &result {
            trace!("Evaluation of {} failed: {}", self, e);
        }

        result
    }
}
