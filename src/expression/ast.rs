use std::sync::{Arc, OnceLock};

use num_bigint::BigInt;

use crate::expression::errors::ExpressionError;
use crate::operator::{ArithmeticError, BinaryOperator, Operator, UnaryOperator};

/// Shape of an expression: the base constant, or one operator over its operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Base,
    Unary(UnaryOperator, Expression),
    Binary(BinaryOperator, Expression, Expression),
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) term: Term,
    pub(crate) score: usize,
    pub(crate) value: OnceLock<Result<BigInt, ArithmeticError>>,
}

/// Immutable arithmetic expression built from the base constant `True`.
///
/// Cloning is cheap: children are shared between every expression built on top
/// of them, and the evaluated value is memoized on first use.
#[derive(Debug, Clone)]
pub struct Expression(pub(crate) Arc<Node>);

impl Expression {
    fn from_term(term: Term, score: usize) -> Self {
        Expression(Arc::new(Node {
            term,
            score,
            value: OnceLock::new(),
        }))
    }

    /// The base constant, evaluating to 1 with score 1
    pub fn base() -> Self {
        Self::from_term(Term::Base, 1)
    }

    pub fn from_unary(op: UnaryOperator, operand: &Expression) -> Self {
        Self::from_term(Term::Unary(op, operand.clone()), operand.score() + 1)
    }

    pub fn from_binary(op: BinaryOperator, lhs: &Expression, rhs: &Expression) -> Self {
        Self::from_term(
            Term::Binary(op, lhs.clone(), rhs.clone()),
            lhs.score() + rhs.score() + 1,
        )
    }

    /// # Errors
    ///
    /// Returns `TypeMismatch` if `op` is a binary operator.
    pub fn unary(op: Operator, operand: &Expression) -> Result<Self, ExpressionError> {
        match op {
            Operator::Unary(op) => Ok(Self::from_unary(op, operand)),
            Operator::Binary(_) => Err(ExpressionError::TypeMismatch {
                operator: op,
                expected: op.arity(),
                got: 1,
            }),
        }
    }

    /// # Errors
    ///
    /// Returns `TypeMismatch` if `op` is a unary operator.
    pub fn binary(
        op: Operator,
        lhs: &Expression,
        rhs: &Expression,
    ) -> Result<Self, ExpressionError> {
        match op {
            Operator::Binary(op) => Ok(Self::from_binary(op, lhs, rhs)),
            Operator::Unary(_) => Err(ExpressionError::TypeMismatch {
                operator: op,
                expected: op.arity(),
                got: 2,
            }),
        }
    }

    /// Number of operators in the expression, plus one for each base constant
    pub fn score(&self) -> usize {
        self.0.score
    }

    pub fn term(&self) -> &Term {
        &self.0.term
    }

    /// Textual rendering, same as the `Display` output
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.score() == other.score() && self.term() == other.term())
    }
}

impl Eq for Expression {}
