//! Solve execution: consistency filtering followed by backtracking search.

use super::config::SolveConfig;
use super::types::{SolveOutcome, SolveStats, SolveStatus};
use crate::error::Result;
use crate::filtering::{arc_consistency, node_consistency};
use crate::model::{CalendarModel, DateConstraint, MeetingDomain};
use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Executes a solve: validate, build one domain per meeting, filter with
/// node and arc consistency, then search the pruned domains.
///
/// The search is chronological depth-first backtracking: meetings are
/// assigned in increasing index order, each trial date is checked against
/// the constraints the partial schedule fully instantiates, and a failed
/// branch retracts only its own trial date. The first complete schedule
/// found is returned; exhausting the space proves unsatisfiability.
pub struct SolveRunner;

impl SolveRunner {
    /// Runs a solve to completion.
    pub fn run(model: &CalendarModel, config: &SolveConfig) -> Result<SolveOutcome> {
        Self::run_with_cancel(model, config, None)
    }

    /// Runs a solve with an optional cancellation token.
    ///
    /// The flag is checked once per search node. Cancellation reports
    /// [`SolveStatus::Cancelled`]; it never masquerades as
    /// unsatisfiability.
    pub fn run_with_cancel(
        model: &CalendarModel,
        config: &SolveConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolveOutcome> {
        model.validate()?;

        let started = Instant::now();
        let mut domains: Vec<MeetingDomain> = (0..model.n_meetings)
            .map(|_| MeetingDomain::new(model.range_start, model.range_end))
            .collect();

        let mut stats = SolveStats {
            pruned_by_node: node_consistency(&mut domains, &model.constraints),
            ..SolveStats::default()
        };
        stats.pruned_by_arc = arc_consistency(&mut domains, &model.constraints);

        let mut search = Search {
            constraints: &model.constraints,
            domains: &domains,
            n_meetings: model.n_meetings,
            max_steps: config.max_steps,
            cancel,
            assignment: Vec::with_capacity(model.n_meetings),
            nodes: 0,
            backtracks: 0,
        };
        let status = match search.extend() {
            Walk::Solved => SolveStatus::Satisfiable,
            Walk::Exhausted => SolveStatus::Unsatisfiable,
            Walk::Cancelled => SolveStatus::Cancelled,
            Walk::OutOfSteps => SolveStatus::StepLimit,
        };

        stats.nodes = search.nodes;
        stats.backtracks = search.backtracks;
        stats.solve_time_ms = started.elapsed().as_millis() as i64;

        let assignment = (status == SolveStatus::Satisfiable).then_some(search.assignment);
        Ok(SolveOutcome {
            status,
            assignment,
            stats,
        })
    }
}

/// How one branch of the search ended.
enum Walk {
    /// The assignment is complete and consistent.
    Solved,
    /// Every candidate below this node failed.
    Exhausted,
    /// The cancellation flag was raised.
    Cancelled,
    /// The node budget ran out.
    OutOfSteps,
}

/// Live state of one search. Domains are read-only here; the trial
/// schedule is a strict append/remove-last stack layered on top.
struct Search<'a> {
    constraints: &'a [DateConstraint],
    domains: &'a [MeetingDomain],
    n_meetings: usize,
    max_steps: usize,
    cancel: Option<Arc<AtomicBool>>,
    assignment: Vec<NaiveDate>,
    nodes: usize,
    backtracks: usize,
}

impl Search<'_> {
    /// Tries to extend the partial schedule to a complete one.
    ///
    /// On [`Walk::Solved`] the full schedule is left in `assignment`;
    /// every other outcome leaves it as it was on entry.
    fn extend(&mut self) -> Walk {
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Walk::Cancelled;
            }
        }
        if self.max_steps > 0 && self.nodes >= self.max_steps {
            return Walk::OutOfSteps;
        }
        self.nodes += 1;

        if self.assignment.len() == self.n_meetings {
            return Walk::Solved;
        }
        if self.domains.iter().any(MeetingDomain::is_empty) {
            return Walk::Exhausted;
        }

        let index = self.assignment.len();
        for candidate in self.domains[index].snapshot() {
            self.assignment.push(candidate);
            if self.partial_consistent() {
                match self.extend() {
                    Walk::Solved => return Walk::Solved,
                    Walk::Exhausted => {}
                    interrupted => {
                        self.assignment.pop();
                        return interrupted;
                    }
                }
            }
            self.assignment.pop();
            self.backtracks += 1;
        }
        Walk::Exhausted
    }

    /// Checks every constraint whose meetings are all assigned by the
    /// current partial schedule. Constraints still mentioning an
    /// unassigned meeting are deferred to deeper nodes.
    fn partial_consistent(&self) -> bool {
        let assigned = self.assignment.len();
        self.constraints.iter().all(|constraint| match constraint {
            DateConstraint::Unary { left, op, date } => {
                *left >= assigned || op.eval(self.assignment[*left], *date)
            }
            DateConstraint::Binary { left, op, right } => {
                *left >= assigned
                    || *right >= assigned
                    || op.eval(self.assignment[*left], self.assignment[*right])
            }
        })
    }
}
