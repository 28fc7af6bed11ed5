//! Modeling layer: meetings, candidate date domains, and constraints.
//!
//! A problem is a [`CalendarModel`]: some number of meetings (identified
//! by index), a shared inclusive window of candidate dates, and a list of
//! [`DateConstraint`]s. Each meeting's [`MeetingDomain`] starts as the
//! full window and is narrowed by the consistency filters before search.

mod calendar;
mod constraint;
mod domain;

pub use calendar::CalendarModel;
pub use constraint::{DateConstraint, DateOp};
pub use domain::MeetingDomain;
