//! Calendar satisfaction solver.
//!
//! Schedules some number of meetings within a shared window of candidate
//! dates, subject to unary and binary date constraints, or proves that no
//! such schedule exists. The pipeline is the classic CSP recipe:
//!
//! - **Model**: [`model::CalendarModel`] — meetings, the candidate date
//!   window, and [`model::DateConstraint`]s built from six comparison
//!   operators (equals, not-equals, before, before-or-on, after,
//!   after-or-on).
//! - **Node consistency**: [`filtering::node_consistency`] — prunes each
//!   meeting's domain against its unary constraints.
//! - **Arc consistency**: [`filtering::arc_consistency`] — AC-3
//!   propagation of the binary constraints until no domain can shrink
//!   further.
//! - **Search**: [`solver::SolveRunner`] — chronological backtracking
//!   over the pruned domains with incremental constraint checking.
//!
//! # Architecture
//!
//! Each solve owns its domains and trial schedule exclusively; the whole
//! pipeline is synchronous, single-threaded, and deterministic. Filtering
//! only ever removes dates, so nothing is restored on backtrack — the
//! search layers its own append/remove-last schedule on top of read-only
//! domains. Callers wanting a deadline pass a cancellation flag or a step
//! budget; both surface as distinct outcome statuses rather than as
//! unsatisfiability.
//!
//! # Examples
//!
//! ```
//! use calsat::model::{DateConstraint, DateOp};
//! use calsat::solver::solve;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! let constraints = [
//!     DateConstraint::unary(1, DateOp::Equal, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()),
//!     DateConstraint::binary(0, DateOp::After, 1),
//! ];
//!
//! let schedule = solve(2, start, end, &constraints).unwrap().unwrap();
//! assert_eq!(schedule[1], NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
//! assert!(schedule[0] > schedule[1]);
//! ```

pub mod error;
pub mod filtering;
pub mod model;
pub mod solver;
