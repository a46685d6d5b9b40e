use std::collections::BTreeMap;

use crate::expression::Expression;

/// Expressions bucketed by score, each bucket in discovery order
#[derive(Debug, Clone, Default)]
pub struct ScoreIndex {
    buckets: BTreeMap<usize, Vec<Expression>>,
}

impl ScoreIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expression to the bucket matching its score
    pub fn insert(&mut self, expr: Expression) {
        self.buckets.entry(expr.score()).or_default().push(expr);
    }

    /// Expressions with exactly this score (empty if none)
    pub fn at(&self, score: usize) -> &[Expression] {
        self.buckets.get(&score).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn max_score(&self) -> Option<usize> {
        self.buckets.keys().next_back().copied()
    }

    /// Total number of expressions across all buckets
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Expression])> {
        self.buckets
            .iter()
            .map(|(score, exprs)| (*score, exprs.as_slice()))
    }

    /// Independent copy of every bucket
    pub fn snapshot(&self) -> BTreeMap<usize, Vec<Expression>> {
        self.buckets.clone()
    }
}
