use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::constants::MAX_VALUE_BITS;
use super::errors::ArithmeticError;
use super::{BinaryOperator, UnaryOperator};

#[inline]
fn overflow() -> ArithmeticError {
    ArithmeticError::Overflow {
        limit: MAX_VALUE_BITS,
    }
}

#[inline]
fn bounded(value: BigInt) -> Result<BigInt, ArithmeticError> {
    if value.bits() > MAX_VALUE_BITS {
        trace!("Result of {} bits exceeds the limit", value.bits());
        Err(overflow())
    } else {
        Ok(value)
    }
}

/// `1` for an even exponent, `-1` for an odd one
#[inline]
fn sign_of_minus_one_power(exponent: &BigInt) -> BigInt {
    if exponent.is_even() {
        BigInt::one()
    } else {
        -BigInt::one()
    }
}

fn shift_left(value: &BigInt, shift: &BigInt) -> Result<BigInt, ArithmeticError> {
    if shift.is_negative() {
        return Err(ArithmeticError::NegativeShift);
    }
    if value.is_zero() {
        return Ok(BigInt::zero());
    }
    let shift = shift.to_u64().ok_or_else(overflow)?;
    if value.bits().saturating_add(shift) > MAX_VALUE_BITS {
        return Err(overflow());
    }
    let shift = usize::try_from(shift).map_err(|_| overflow())?;
    Ok(value << shift)
}

fn shift_right(value: &BigInt, shift: &BigInt) -> Result<BigInt, ArithmeticError> {
    if shift.is_negative() {
        return Err(ArithmeticError::NegativeShift);
    }
    let width = value.bits();
    match shift.to_u64() {
        Some(shift) if shift < width => {
            let shift = usize::try_from(shift).map_err(|_| overflow())?;
            Ok(value >> shift)
        }
        // Everything shifted out: floor semantics leave the sign
        _ if value.is_negative() => Ok(-BigInt::one()),
        _ => Ok(BigInt::zero()),
    }
}

fn power(base: &BigInt, exponent: &BigInt) -> Result<BigInt, ArithmeticError> {
    if exponent.is_negative() {
        // Real-valued reciprocal, truncated toward zero
        return if base.is_zero() {
            Err(ArithmeticError::DivisionByZero)
        } else if base.is_one() {
            Ok(BigInt::one())
        } else if *base == -BigInt::one() {
            Ok(sign_of_minus_one_power(exponent))
        } else {
            Ok(BigInt::zero())
        };
    }

    if base.is_zero() {
        return Ok(if exponent.is_zero() {
            BigInt::one()
        } else {
            BigInt::zero()
        });
    }
    if base.is_one() {
        return Ok(BigInt::one());
    }
    if *base == -BigInt::one() {
        return Ok(sign_of_minus_one_power(exponent));
    }

    // |base| >= 2, so the result has at least (bits - 1) * exponent + 1 bits
    let exponent = exponent.to_u64().ok_or_else(overflow)?;
    if (base.bits() - 1).saturating_mul(exponent) >= MAX_VALUE_BITS {
        return Err(overflow());
    }
    let exponent = u32::try_from(exponent).map_err(|_| overflow())?;
    bounded(base.pow(exponent))
}

impl UnaryOperator {
    /// # Errors
    ///
    /// Returns `Overflow` if the result is wider than the value limit.
    pub fn apply(self, operand: &BigInt) -> Result<BigInt, ArithmeticError> {
        match self {
            UnaryOperator::Minus => bounded(-operand),
            UnaryOperator::BitwiseNot => bounded(-operand - BigInt::one()),
        }
    }
}

impl BinaryOperator {
    /// # Errors
    ///
    /// Returns an error when:
    /// - dividing or taking a modulo by zero, or raising zero to a negative power
    /// - shifting by a negative amount
    /// - the result is wider than the value limit
    pub fn apply(self, lhs: &BigInt, rhs: &BigInt) -> Result<BigInt, ArithmeticError> {
        match self {
            BinaryOperator::Add => bounded(lhs + rhs),
            BinaryOperator::Multiply => bounded(lhs * rhs),
            BinaryOperator::BitwiseAnd => bounded(lhs & rhs),
            BinaryOperator::BitwiseOr => bounded(lhs | rhs),
            BinaryOperator::BitwiseXor => bounded(lhs ^ rhs),
            BinaryOperator::ShiftLeft => shift_left(lhs, rhs),
            BinaryOperator::ShiftRight => shift_right(lhs, rhs),
            BinaryOperator::Subtract => bounded(lhs - rhs),
            BinaryOperator::Exponentiate => power(lhs, rhs),
            BinaryOperator::IntDivide => {
                if rhs.is_zero() {
                    Err(ArithmeticError::DivisionByZero)
                } else {
                    Ok(lhs.div_floor(rhs))
                }
            }
            BinaryOperator::Modulo => {
                if rhs.is_zero() {
                    Err(ArithmeticError::DivisionByZero)
                } else {
                    Ok(lhs.mod_floor(rhs))
                }
            }
        }
    }
}
