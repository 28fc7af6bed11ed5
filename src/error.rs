//! Error types for calsat.

use chrono::NaiveDate;
use thiserror::Error;

/// Precondition violations detected before any solving work begins.
///
/// Unsatisfiability is *not* an error: a problem with no valid schedule
/// reports [`SolveStatus::Unsatisfiable`](crate::solver::SolveStatus)
/// through the normal outcome path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CspError {
    /// The candidate window is inverted (start date after end date).
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested start of the window.
        start: NaiveDate,
        /// Requested end of the window.
        end: NaiveDate,
    },

    /// A constraint references a meeting index outside `[0, n_meetings)`.
    #[error("constraint references meeting {index}, but only {n_meetings} meetings exist")]
    MeetingOutOfRange {
        /// The offending meeting index.
        index: usize,
        /// Number of meetings in the model.
        n_meetings: usize,
    },
}

/// Result type alias for calsat operations.
pub type Result<T> = std::result::Result<T, CspError>;
