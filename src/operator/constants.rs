/// Widest integer (in bits) an evaluation may produce, about 4300 decimal digits
pub const MAX_VALUE_BITS: u64 = 14_284;
