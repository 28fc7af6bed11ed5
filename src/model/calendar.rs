//! Problem container for one solve.

use super::constraint::{DateConstraint, DateOp};
use crate::error::{CspError, Result};
use chrono::NaiveDate;

/// A calendar satisfaction problem: `n_meetings` meetings, a shared
/// inclusive window of candidate dates, and a set of unary/binary
/// constraints over the meeting dates.
///
/// # Examples
///
/// ```
/// use calsat::model::{CalendarModel, DateOp};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
///
/// let mut model = CalendarModel::new(2, start, end);
/// model.add_binary(0, DateOp::Before, 1);
/// model.add_unary(1, DateOp::Equal, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
/// assert!(model.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarModel {
    /// Number of meetings, indexed `0..n_meetings`.
    pub n_meetings: usize,
    /// First candidate date (inclusive).
    pub range_start: NaiveDate,
    /// Last candidate date (inclusive).
    pub range_end: NaiveDate,
    /// Constraints over the meeting dates.
    pub constraints: Vec<DateConstraint>,
}

impl CalendarModel {
    /// Creates a model with no constraints.
    pub fn new(n_meetings: usize, range_start: NaiveDate, range_end: NaiveDate) -> Self {
        Self {
            n_meetings,
            range_start,
            range_end,
            constraints: Vec::new(),
        }
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: DateConstraint) {
        self.constraints.push(constraint);
    }

    /// Convenience: add a unary constraint `meeting(left) OP date`.
    pub fn add_unary(&mut self, left: usize, op: DateOp, date: NaiveDate) {
        self.constraints.push(DateConstraint::unary(left, op, date));
    }

    /// Convenience: add a binary constraint `meeting(left) OP meeting(right)`.
    pub fn add_binary(&mut self, left: usize, op: DateOp, right: usize) {
        self.constraints
            .push(DateConstraint::binary(left, op, right));
    }

    /// Returns the number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Validates the model.
    ///
    /// Checks that the date window is not inverted and that every
    /// constraint references meeting indices in `[0, n_meetings)`. The
    /// solver runs this before any filtering or search.
    pub fn validate(&self) -> Result<()> {
        if self.range_start > self.range_end {
            return Err(CspError::InvalidRange {
                start: self.range_start,
                end: self.range_end,
            });
        }
        for constraint in &self.constraints {
            let indices = match constraint {
                DateConstraint::Unary { left, .. } => [*left, *left],
                DateConstraint::Binary { left, right, .. } => [*left, *right],
            };
            for index in indices {
                if index >= self.n_meetings {
                    return Err(CspError::MeetingOutOfRange {
                        index,
                        n_meetings: self.n_meetings,
                    });
                }
            }
        }
        Ok(())
    }
}
