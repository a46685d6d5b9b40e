use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use num_bigint::BigInt;

use crate::expression::Expression;

/// Cheapest known expression for every value reached so far
#[derive(Debug, Clone, Default)]
pub struct TargetIndex {
    by_value: HashMap<BigInt, Expression>,
}

impl TargetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `expr` as the expression for `value` unless one is already known.
    ///
    /// Returns whether the expression was admitted. An admitted entry is never replaced.
    pub fn admit(&mut self, value: BigInt, expr: Expression) -> bool {
        match self.by_value.entry(value) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(expr);
                true
            }
        }
    }

    pub fn contains(&self, value: &BigInt) -> bool {
        self.by_value.contains_key(value)
    }

    pub fn get(&self, value: &BigInt) -> Option<&Expression> {
        self.by_value.get(value)
    }

    pub fn len(&self) -> usize {
        self.by_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }

    /// Independent copy, ordered by value
    pub fn snapshot(&self) -> BTreeMap<BigInt, Expression> {
        self.by_value
            .iter()
            .map(|(value, expr)| (value.clone(), expr.clone()))
            .collect()
    }
}
