//! Solver entry points: configuration, execution, and outcomes.
//!
//! [`SolveRunner`] runs the full pipeline (validate, filter, search) and
//! reports a [`SolveOutcome`] with status and statistics. [`solve`] is the
//! one-call convenience wrapper for the common case.

mod config;
mod runner;
mod types;

pub use config::SolveConfig;
pub use runner::SolveRunner;
pub use types::{SolveOutcome, SolveStats, SolveStatus};

use crate::error::Result;
use crate::model::{CalendarModel, DateConstraint};
use chrono::NaiveDate;

/// Schedules `n_meetings` meetings within `[range_start, range_end]`
/// (inclusive) subject to `constraints`.
///
/// Returns `Ok(Some(schedule))` with one date per meeting index when a
/// satisfying schedule exists, `Ok(None)` when the problem is proven
/// unsatisfiable, and `Err` when the input itself is invalid (inverted
/// range or a constraint referencing a meeting outside
/// `[0, n_meetings)`). Zero meetings with no constraints yield
/// `Ok(Some(vec![]))`, distinct from the no-solution case.
///
/// # Examples
///
/// ```
/// use calsat::model::{DateConstraint, DateOp};
/// use calsat::solver::solve;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
/// let constraints = [DateConstraint::binary(0, DateOp::Before, 1)];
///
/// let schedule = solve(2, start, end, &constraints).unwrap().unwrap();
/// assert!(schedule[0] < schedule[1]);
/// ```
pub fn solve(
    n_meetings: usize,
    range_start: NaiveDate,
    range_end: NaiveDate,
    constraints: &[DateConstraint],
) -> Result<Option<Vec<NaiveDate>>> {
    let mut model = CalendarModel::new(n_meetings, range_start, range_end);
    model.constraints = constraints.to_vec();
    let outcome = SolveRunner::run(&model, &SolveConfig::default())?;
    Ok(outcome.assignment)
}
