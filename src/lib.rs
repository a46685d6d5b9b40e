//! Minexpr - cheapest expressions built from `True` for every reachable integer
//!
//! Starting from the single base constant `True` (evaluating to 1), the optimizer
//! grows expressions one operator at a time. After each round it knows, for every
//! integer reachable with at most `ceiling` units of score, the first cheapest
//! expression that reaches it.

pub mod expression;
pub mod index;
pub mod operator;
pub mod optimizer;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Term};
pub use index::{ScoreIndex, TargetIndex};
pub use operator::{ArithmeticError, BinaryOperator, Operator, OperatorKind, UnaryOperator};
pub use optimizer::{Optimizer, OptimizerError, OverflowPolicy, SearchConfig};

use std::collections::BTreeMap;

use num_bigint::BigInt;

/// Cheapest expression for every value reachable with a score of at most `ceiling`
///
/// This is a convenience function that runs a default optimizer up to `ceiling`.
///
/// # Errors
///
/// Returns an error if a round produces a value too large to materialize before
/// `ceiling` is reached.
///
/// # Examples
///
/// ```
/// use minexpr::cheapest_expressions;
/// use num_bigint::BigInt;
///
/// let found = cheapest_expressions(3).unwrap();
/// assert_eq!(found[&BigInt::from(2)].text(), "-(~(True))");
/// ```
pub fn cheapest_expressions(ceiling: usize) -> Result<BTreeMap<BigInt, Expression>, OptimizerError> {
    let mut optimizer = Optimizer::new();
    optimizer.run_to(ceiling)?;
    Ok(optimizer.snapshot_by_value())
}
