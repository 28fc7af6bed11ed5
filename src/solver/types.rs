//! Solve outcomes and statistics.

use chrono::NaiveDate;

/// How a solve run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStatus {
    /// A schedule satisfying every constraint was found.
    Satisfiable,
    /// The search space is exhausted: no satisfying schedule exists.
    Unsatisfiable,
    /// The cancellation flag was raised before the search finished.
    /// Satisfiability of the problem remains unknown.
    Cancelled,
    /// The step budget ran out before the search finished.
    /// Satisfiability of the problem remains unknown.
    StepLimit,
}

/// Counters describing one solve run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveStats {
    /// Search nodes expanded (including the root).
    pub nodes: usize,
    /// Trial dates retracted during search.
    pub backtracks: usize,
    /// Dates removed by node consistency.
    pub pruned_by_node: usize,
    /// Dates removed by arc consistency.
    pub pruned_by_arc: usize,
    /// Wall-clock solve time in milliseconds.
    pub solve_time_ms: i64,
}

/// Outcome of a solve run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveOutcome {
    /// How the run ended.
    pub status: SolveStatus,
    /// The schedule, present exactly when `status` is
    /// [`SolveStatus::Satisfiable`]: position `i` holds meeting `i`'s
    /// date. Zero meetings yield `Some` of an empty vector.
    pub assignment: Option<Vec<NaiveDate>>,
    /// Run statistics.
    pub stats: SolveStats,
}

impl SolveOutcome {
    /// Whether a satisfying schedule was found.
    pub fn is_solution_found(&self) -> bool {
        self.status == SolveStatus::Satisfiable
    }
}
