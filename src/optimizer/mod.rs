mod config;
mod core;
mod errors;

pub use config::{OverflowPolicy, SearchConfig};
pub use core::Optimizer;
pub use errors::OptimizerError;
