//! Solver configuration.

/// Configuration for a solve run.
///
/// # Examples
///
/// ```
/// use calsat::solver::SolveConfig;
///
/// let config = SolveConfig::default().with_max_steps(10_000);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveConfig {
    /// Maximum number of search nodes to expand (hard budget).
    /// 0 = no limit. Exceeding the budget stops the search with
    /// [`SolveStatus::StepLimit`](super::SolveStatus), not a failure proof.
    pub max_steps: usize,
}

impl SolveConfig {
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(SolveConfig::default().max_steps, 0);
    }

    #[test]
    fn test_with_max_steps() {
        assert_eq!(SolveConfig::default().with_max_steps(50).max_steps, 50);
    }
}
