use std::collections::BTreeMap;

use log::{debug, info, trace, warn};
use num_bigint::BigInt;
use num_traits::{One, Signed};
use rayon::prelude::*;

use crate::expression::Expression;
use crate::index::{ScoreIndex, TargetIndex};
use crate::operator::{ArithmeticError, BinaryOperator, UnaryOperator};
use crate::optimizer::config::{OverflowPolicy, SearchConfig};
use crate::optimizer::errors::OptimizerError;

/// Binary candidates pairing `lhs` with every expression in `rights`.
///
/// Commutative operators only see pairs with `lhs <= rhs` by value, and shifts
/// need a strictly positive right operand.
fn pair_candidates(lhs: &Expression, rights: &[Expression]) -> Vec<Expression> {
    let Ok(left_value) = lhs.evaluate() else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    for rhs in rights {
        let Ok(right_value) = rhs.evaluate() else {
            continue;
        };

        if left_value <= right_value {
            candidates.extend(
                BinaryOperator::COMMUTATIVE
                    .iter()
                    .map(|&op| Expression::from_binary(op, lhs, rhs)),
            );
        }

        candidates.extend(
            BinaryOperator::NONCOMMUTATIVE
                .iter()
                .filter(|op| !op.is_shift() || right_value.is_positive())
                .map(|&op| Expression::from_binary(op, lhs, rhs)),
        );
    }
    candidates
}

/// Overflow raised while evaluating `candidate`, if any
fn overflow_of(candidate: &Expression) -> Option<ArithmeticError> {
    candidate
        .evaluate()
        .err()
        .filter(ArithmeticError::is_overflow)
}

/// Iterative-deepening search for the cheapest expression of every reachable integer
#[derive(Debug, Clone)]
pub struct Optimizer {
    ceiling: usize,
    by_score: ScoreIndex,
    by_value: TargetIndex,
    config: SearchConfig,
}

impl Optimizer {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create an optimizer seeded with the base expression at score 1
    pub fn with_config(config: SearchConfig) -> Self {
        let base = Expression::base();
        let mut by_score = ScoreIndex::new();
        let mut by_value = TargetIndex::new();
        by_value.admit(BigInt::one(), base.clone());
        by_score.insert(base);

        Self {
            ceiling: 1,
            by_score,
            by_value,
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Highest score searched so far
    pub fn current_ceiling(&self) -> usize {
        self.ceiling
    }

    /// Number of distinct values found so far
    pub fn discovered(&self) -> usize {
        self.by_value.len()
    }

    /// Every candidate of score `ceiling + 1`, in admission order
    pub(crate) fn generate_candidates(&self) -> Vec<Expression> {
        let ceiling = self.ceiling;

        let mut candidates: Vec<Expression> = self
            .by_score
            .at(ceiling)
            .iter()
            .flat_map(|expr| {
                UnaryOperator::ALL
                    .into_iter()
                    .map(move |op| Expression::from_unary(op, expr))
            })
            .collect();

        for left_score in 1..ceiling {
            let lefts = self.by_score.at(left_score);
            let rights = self.by_score.at(ceiling - left_score);

            if self.config.parallel {
                candidates.par_extend(
                    lefts
                        .par_iter()
                        .flat_map_iter(|lhs| pair_candidates(lhs, rights)),
                );
            } else {
                candidates.extend(lefts.iter().flat_map(|lhs| pair_candidates(lhs, rights)));
            }
        }

        candidates
    }

    /// Search every expression one score above the ceiling and admit the ones
    /// reaching new values, then raise the ceiling.
    ///
    /// Returns the number of newly admitted expressions.
    ///
    /// # Errors
    ///
    /// With `OverflowPolicy::Abort`, returns the first overflow among the
    /// candidates. Nothing is committed and the ceiling stays put.
    pub fn advance_round(&mut self) -> Result<usize, OptimizerError> {
        let score = self.ceiling + 1;
        let candidates = self.generate_candidates();
        debug!(
            "Generated {} candidates for score {}",
            candidates.len(),
            score
        );

        match self.config.overflow_policy {
            OverflowPolicy::Abort => {
                let first_overflow = if self.config.parallel {
                    candidates.par_iter().find_map_first(overflow_of)
                } else {
                    candidates.iter().find_map(overflow_of)
                };
                if let Some(err) = first_overflow {
                    warn!("Round for score {} aborted: {}", score, err);
                    return Err(err.into());
                }
            }
            OverflowPolicy::Skip if self.config.parallel => {
                candidates.par_iter().for_each(|candidate| {
                    candidate.evaluate().ok();
                });
            }
            OverflowPolicy::Skip => {}
        }

        let mut admitted = 0;
        let mut dropped = 0;
        for candidate in candidates {
            let value = match candidate.evaluate() {
                Ok(value) => value.clone(),
                Err(e) => {
                    trace!("Dropping {}: {}", candidate, e);
                    dropped += 1;
                    continue;
                }
            };

            if self.by_value.admit(value, candidate.clone()) {
                self.by_score.insert(candidate);
                admitted += 1;
            }
        }

        self.ceiling = score;
        if dropped > 0 {
            debug!("Dropped {} candidates that failed to evaluate", dropped);
        }
        info!(
            "Ceiling {}: {} new values, {} total",
            self.ceiling,
            admitted,
            self.by_value.len()
        );

        Ok(admitted)
    }

    /// Advance rounds until the ceiling reaches `ceiling`.
    ///
    /// Returns the number of expressions admitted along the way.
    ///
    /// # Errors
    ///
    /// Stops at the first failing round. Rounds completed before it are kept.
    pub fn run_to(&mut self, ceiling: usize) -> Result<usize, OptimizerError> {
        let mut admitted = 0;
        while self.ceiling < ceiling {
            admitted += self.advance_round()?;
        }
        Ok(admitted)
    }

    /// Expressions admitted with exactly this score.
    ///
    /// # Errors
    ///
    /// Returns an error for score 0 or a score above the current ceiling.
    pub fn expressions_at(&self, score: usize) -> Result<&[Expression], OptimizerError> {
        if score == 0 {
            return Err(OptimizerError::InvalidScore);
        }
        if score > self.ceiling {
            return Err(OptimizerError::ScoreNotReached {
                score,
                ceiling: self.ceiling,
            });
        }
        Ok(self.by_score.at(score))
    }

    /// Cheapest expression found for `value`.
    ///
    /// # Errors
    ///
    /// Returns `ValueNotFound` if no expression reaches `value` yet.
    pub fn expression_for(&self, value: &BigInt) -> Result<&Expression, OptimizerError> {
        self.by_value
            .get(value)
            .ok_or_else(|| OptimizerError::ValueNotFound(value.clone()))
    }

    /// Independent copy of the expressions grouped by score
    pub fn snapshot_by_score(&self) -> BTreeMap<usize, Vec<Expression>> {
        self.by_score.snapshot()
    }

    /// Independent copy of the cheapest expression per value
    pub fn snapshot_by_value(&self) -> BTreeMap<BigInt, Expression> {
        self.by_value.snapshot()
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}
