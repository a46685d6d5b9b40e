//! Indices the optimizer grows round by round

mod score;
mod target;

pub use score::ScoreIndex;
pub use target::TargetIndex;
