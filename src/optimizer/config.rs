/// What a round does when a candidate's value is too large to materialize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Fail the whole round without committing anything
    #[default]
    Abort,
    /// Drop the candidate and keep going
    Skip,
}

/// Configuration for the optimizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub overflow_policy: OverflowPolicy,
    /// Generate and evaluate candidates on the rayon thread pool
    pub parallel: bool,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            overflow_policy: OverflowPolicy::Abort,
            parallel: true,
        }
    }

    pub fn with_overflow_policy(mut self, overflow_policy: OverflowPolicy) -> Self {
        self.overflow_policy = overflow_policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
