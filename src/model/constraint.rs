//! Date constraints and their comparison operators.

use chrono::NaiveDate;
use std::fmt;

/// Comparison operator between two dates.
///
/// Evaluation is always `left OP right`. [`DateOp::reversed`] produces the
/// operator for the argument-swapped comparison, which is how the reverse
/// direction of a binary constraint is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateOp {
    /// Both dates are the same day.
    Equal,
    /// The dates differ.
    NotEqual,
    /// Left is strictly earlier than right.
    Before,
    /// Left is earlier than or the same day as right.
    BeforeOrOn,
    /// Left is strictly later than right.
    After,
    /// Left is later than or the same day as right.
    AfterOrOn,
}

impl DateOp {
    /// Evaluates `left OP right`.
    pub fn eval(self, left: NaiveDate, right: NaiveDate) -> bool {
        match self {
            DateOp::Equal => left == right,
            DateOp::NotEqual => left != right,
            DateOp::Before => left < right,
            DateOp::BeforeOrOn => left <= right,
            DateOp::After => left > right,
            DateOp::AfterOrOn => left >= right,
        }
    }

    /// The operator obtained by swapping the argument order.
    ///
    /// For every pair of dates, `op.eval(a, b) == op.reversed().eval(b, a)`.
    pub fn reversed(self) -> DateOp {
        match self {
            DateOp::Equal => DateOp::Equal,
            DateOp::NotEqual => DateOp::NotEqual,
            DateOp::Before => DateOp::After,
            DateOp::BeforeOrOn => DateOp::AfterOrOn,
            DateOp::After => DateOp::Before,
            DateOp::AfterOrOn => DateOp::BeforeOrOn,
        }
    }
}

impl fmt::Display for DateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            DateOp::Equal => "==",
            DateOp::NotEqual => "!=",
            DateOp::Before => "<",
            DateOp::BeforeOrOn => "<=",
            DateOp::After => ">",
            DateOp::AfterOrOn => ">=",
        };
        write!(f, "{symbol}")
    }
}

/// A constraint on the dates of one or two meetings.
///
/// Meetings are identified by their index in `[0, n_meetings)`. A unary
/// constraint compares one meeting's date against a fixed literal date; a
/// binary constraint relates the dates of two meetings.
///
/// # Examples
///
/// ```
/// use calsat::model::{DateConstraint, DateOp};
/// use chrono::NaiveDate;
///
/// let deadline = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let c = DateConstraint::unary(0, DateOp::BeforeOrOn, deadline);
/// assert_eq!(c.arity(), 1);
/// assert_eq!(c.to_string(), "m0 <= 2024-03-15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateConstraint {
    /// `meeting(left) OP date`.
    Unary {
        /// Index of the constrained meeting.
        left: usize,
        /// Comparison operator.
        op: DateOp,
        /// Fixed literal date bound at construction.
        date: NaiveDate,
    },

    /// `meeting(left) OP meeting(right)`.
    Binary {
        /// Index of the left-hand meeting.
        left: usize,
        /// Comparison operator.
        op: DateOp,
        /// Index of the right-hand meeting.
        right: usize,
    },
}

impl DateConstraint {
    /// Creates a unary constraint `meeting(left) OP date`.
    pub fn unary(left: usize, op: DateOp, date: NaiveDate) -> Self {
        DateConstraint::Unary { left, op, date }
    }

    /// Creates a binary constraint `meeting(left) OP meeting(right)`.
    pub fn binary(left: usize, op: DateOp, right: usize) -> Self {
        DateConstraint::Binary { left, op, right }
    }

    /// Number of meeting variables this constraint touches (1 or 2).
    pub fn arity(&self) -> usize {
        match self {
            DateConstraint::Unary { .. } => 1,
            DateConstraint::Binary { .. } => 2,
        }
    }

    /// Index of the left-hand meeting.
    pub fn left(&self) -> usize {
        match self {
            DateConstraint::Unary { left, .. } | DateConstraint::Binary { left, .. } => *left,
        }
    }

    /// Whether the constraint holds for the given left/right dates.
    ///
    /// For unary constraints the caller passes the stored literal as
    /// `right`; see [`DateConstraint::Unary`].
    pub fn is_satisfied_by(&self, left: NaiveDate, right: NaiveDate) -> bool {
        match self {
            DateConstraint::Unary { op, .. } | DateConstraint::Binary { op, .. } => {
                op.eval(left, right)
            }
        }
    }
}

impl fmt::Display for DateConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateConstraint::Unary { left, op, date } => write!(f, "m{left} {op} {date}"),
            DateConstraint::Binary { left, op, right } => write!(f, "m{left} {op} m{right}"),
        }
    }
}
