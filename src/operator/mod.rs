//! Operator catalog: the fixed unary and binary operators expressions are built from.

mod arith;
pub mod constants;
mod errors;

pub use errors::ArithmeticError;

use std::fmt;

/// Which group of the catalog an operator belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Unary,
    BinaryCommutative,
    BinaryNoncommutative,
}

impl OperatorKind {
    pub fn arity(self) -> usize {
        match self {
            OperatorKind::Unary => 1,
            OperatorKind::BinaryCommutative | OperatorKind::BinaryNoncommutative => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Minus,
    BitwiseNot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Multiply,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    ShiftLeft,
    ShiftRight,
    Subtract,
    Exponentiate,
    IntDivide,
    Modulo,
}

/// Any catalog operator, tagged with its arity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

impl UnaryOperator {
    pub const ALL: [UnaryOperator; 2] = [UnaryOperator::Minus, UnaryOperator::BitwiseNot];

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Minus => "-",
            UnaryOperator::BitwiseNot => "~",
        }
    }
}

impl BinaryOperator {
    /// Operators where `a op b == b op a`, in catalog order
    pub const COMMUTATIVE: [BinaryOperator; 5] = [
        BinaryOperator::Add,
        BinaryOperator::Multiply,
        BinaryOperator::BitwiseAnd,
        BinaryOperator::BitwiseOr,
        BinaryOperator::BitwiseXor,
    ];

    /// Operators where operand order matters, in catalog order
    pub const NONCOMMUTATIVE: [BinaryOperator; 6] = [
        BinaryOperator::ShiftLeft,
        BinaryOperator::ShiftRight,
        BinaryOperator::Subtract,
        BinaryOperator::Exponentiate,
        BinaryOperator::IntDivide,
        BinaryOperator::Modulo,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Multiply => "*",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::BitwiseXor => "^",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Exponentiate => "**",
            BinaryOperator::IntDivide => "//",
            BinaryOperator::Modulo => "%",
        }
    }

    pub fn is_commutative(self) -> bool {
        Self::COMMUTATIVE.contains(&self)
    }

    /// Shifts are only generated with a strictly positive right operand
    pub fn is_shift(self) -> bool {
        matches!(self, BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight)
    }
}

impl Operator {
    /// Every operator of the given kind, in catalog order
    pub fn catalog(kind: OperatorKind) -> Vec<Operator> {
        match kind {
            OperatorKind::Unary => UnaryOperator::ALL.into_iter().map(Operator::from).collect(),
            OperatorKind::BinaryCommutative => BinaryOperator::COMMUTATIVE
                .into_iter()
                .map(Operator::from)
                .collect(),
            OperatorKind::BinaryNoncommutative => BinaryOperator::NONCOMMUTATIVE
                .into_iter()
                .map(Operator::from)
                .collect(),
        }
    }

    pub fn kind(self) -> OperatorKind {
        match self {
            Operator::Unary(_) => OperatorKind::Unary,
            Operator::Binary(op) if op.is_commutative() => OperatorKind::BinaryCommutative,
            Operator::Binary(_) => OperatorKind::BinaryNoncommutative,
        }
    }

    pub fn arity(self) -> usize {
        self.kind().arity()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Unary(op) => op.symbol(),
            Operator::Binary(op) => op.symbol(),
        }
    }
}

impl From<UnaryOperator> for Operator {
    fn from(op: UnaryOperator) -> Self {
        Operator::Unary(op)
    }
}

impl From<BinaryOperator> for Operator {
    fn from(op: BinaryOperator) -> Self {
        Operator::Binary(op)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
