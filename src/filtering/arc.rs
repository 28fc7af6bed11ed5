//! Arc consistency: the AC-3 algorithm over binary constraints.
//!
//! Every binary constraint contributes two directed arcs, one per
//! direction (the reverse uses the argument-swapped operator). Arcs sit in
//! a work queue; revising an arc deletes every tail date with no
//! supporting head date, and any deletion re-enqueues the arcs pointing
//! into the revised tail. The queue draining to empty is the fixed point:
//! all domains are then pairwise consistent with the binary constraints.
//!
//! Pairwise propagation is sound but not complete — an arc-consistent
//! problem can still be globally unsatisfiable, which the search settles.

use crate::model::{DateConstraint, DateOp, MeetingDomain};
use std::collections::VecDeque;
use std::fmt;

/// Directed enforcement of a binary constraint from a tail meeting
/// against a head meeting.
///
/// The operator is oriented for `op.eval(tail_date, head_date)`, so the
/// reverse arc of a constraint carries [`DateOp::reversed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateArc {
    /// Meeting whose domain this arc prunes.
    pub tail: usize,
    /// Meeting that must offer a supporting date.
    pub head: usize,
    /// Operator, evaluated as `op.eval(tail_date, head_date)`.
    pub op: DateOp,
}

impl fmt::Display for DateArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.tail, self.head)
    }
}

/// Builds both directed arcs for every binary constraint. Unary
/// constraints contribute none.
fn build_arcs(constraints: &[DateConstraint]) -> Vec<DateArc> {
    let mut arcs = Vec::new();
    for constraint in constraints {
        let DateConstraint::Binary { left, op, right } = constraint else {
            continue;
        };
        arcs.push(DateArc {
            tail: *left,
            head: *right,
            op: *op,
        });
        arcs.push(DateArc {
            tail: *right,
            head: *left,
            op: op.reversed(),
        });
    }
    arcs
}

/// Deletes every date in the tail's domain without a supporting date in
/// the head's domain. Returns the number of dates deleted.
fn revise(domains: &mut [MeetingDomain], arc: DateArc) -> usize {
    // Snapshot the head first: tail and head may be the same meeting.
    let head_dates = domains[arc.head].snapshot();
    let tail = &mut domains[arc.tail];
    let mut removed = 0;
    for candidate in tail.snapshot() {
        let supported = head_dates.iter().any(|&h| arc.op.eval(candidate, h));
        if !supported && tail.remove(candidate) {
            removed += 1;
        }
    }
    removed
}

/// Enforces arc consistency over the binary constraints (AC-3).
///
/// Mutates the domains in place and returns the total number of dates
/// removed. Afterwards, for every binary-constraint arc `(tail -> head)`
/// and every date left in the tail's domain, some date in the head's
/// domain satisfies the arc. Unary constraints are ignored here. A domain
/// emptied during revision is left empty for the search to detect; the
/// queue still drains fully.
///
/// # Panics
///
/// Panics if a constraint references a meeting index with no domain;
/// [`CalendarModel::validate`](crate::model::CalendarModel::validate)
/// rules that out beforehand.
pub fn arc_consistency(domains: &mut [MeetingDomain], constraints: &[DateConstraint]) -> usize {
    let arcs = build_arcs(constraints);

    // Index from meeting -> ids of arcs pointing into it, computed once
    // instead of rescanning the arc list on every revision.
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); domains.len()];
    for (id, arc) in arcs.iter().enumerate() {
        incoming[arc.head].push(id);
    }

    let mut queue: VecDeque<usize> = (0..arcs.len()).collect();
    let mut in_queue = vec![true; arcs.len()];
    let mut removed = 0;

    while let Some(id) = queue.pop_front() {
        in_queue[id] = false;
        let arc = arcs[id];
        let deleted = revise(domains, arc);
        if deleted > 0 {
            removed += deleted;
            for &neighbor in &incoming[arc.tail] {
                if !in_queue[neighbor] {
                    queue.push_back(neighbor);
                    in_queue[neighbor] = true;
                }
            }
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DateConstraint, DateOp};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn domains(n: usize, first: u32, last: u32) -> Vec<MeetingDomain> {
        (0..n)
            .map(|_| MeetingDomain::new(date(first), date(last)))
            .collect()
    }

    /// Every remaining tail date must have a supporting head date.
    fn assert_fixed_point(domains: &[MeetingDomain], constraints: &[DateConstraint]) {
        for arc in build_arcs(constraints) {
            for t in domains[arc.tail].iter() {
                assert!(
                    domains[arc.head].iter().any(|h| arc.op.eval(t, h)),
                    "arc {arc}: {t} has no support"
                );
            }
        }
    }

    #[test]
    fn test_inequality_on_single_day_wipes_both_domains() {
        let mut doms = domains(2, 1, 1);
        let constraints = [DateConstraint::binary(0, DateOp::NotEqual, 1)];

        arc_consistency(&mut doms, &constraints);

        assert!(doms[0].is_empty());
        assert!(doms[1].is_empty());
    }

    #[test]
    fn test_chain_of_strict_precedences_pins_every_domain() {
        let mut doms = domains(3, 1, 3);
        let constraints = [
            DateConstraint::binary(0, DateOp::Before, 1),
            DateConstraint::binary(1, DateOp::Before, 2),
        ];

        arc_consistency(&mut doms, &constraints);

        assert_eq!(doms[0].snapshot(), vec![date(1)]);
        assert_eq!(doms[1].snapshot(), vec![date(2)]);
        assert_eq!(doms[2].snapshot(), vec![date(3)]);
        assert_fixed_point(&doms, &constraints);
    }

    #[test]
    fn test_unary_constraints_are_ignored() {
        let mut doms = domains(1, 1, 5);
        let constraints = [DateConstraint::unary(0, DateOp::Equal, date(3))];

        let removed = arc_consistency(&mut doms, &constraints);

        assert_eq!(removed, 0);
        assert_eq!(doms[0].len(), 5);
    }

    #[test]
    fn test_idempotent() {
        let mut doms = domains(2, 1, 4);
        let constraints = [DateConstraint::binary(0, DateOp::Before, 1)];

        arc_consistency(&mut doms, &constraints);
        let snapshot: Vec<_> = doms.iter().map(MeetingDomain::snapshot).collect();
        let removed_again = arc_consistency(&mut doms, &constraints);

        assert_eq!(removed_again, 0);
        let after: Vec<_> = doms.iter().map(MeetingDomain::snapshot).collect();
        assert_eq!(after, snapshot);
    }

    #[test]
    fn test_self_loop_inequality_wipes_single_candidate_domain() {
        let mut doms = domains(1, 1, 1);
        let constraints = [DateConstraint::binary(0, DateOp::NotEqual, 0)];

        arc_consistency(&mut doms, &constraints);

        assert!(doms[0].is_empty());
    }

    #[test]
    fn test_self_loop_inequality_keeps_multi_candidate_domain() {
        // Pairwise revision sees a different date in the same domain as
        // support, so the contradiction is only caught by the search.
        let mut doms = domains(1, 1, 3);
        let constraints = [DateConstraint::binary(0, DateOp::NotEqual, 0)];

        let removed = arc_consistency(&mut doms, &constraints);

        assert_eq!(removed, 0);
        assert_eq!(doms[0].len(), 3);
    }

    #[test]
    fn test_arc_display() {
        let arc = DateArc {
            tail: 0,
            head: 1,
            op: DateOp::Before,
        };
        assert_eq!(arc.to_string(), "(0 -> 1)");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arbitrary_op() -> impl Strategy<Value = DateOp> {
            prop_oneof![
                Just(DateOp::Equal),
                Just(DateOp::NotEqual),
                Just(DateOp::Before),
                Just(DateOp::BeforeOrOn),
                Just(DateOp::After),
                Just(DateOp::AfterOrOn),
            ]
        }

        fn arbitrary_binary(n: usize) -> impl Strategy<Value = DateConstraint> {
            (0..n, arbitrary_op(), 0..n)
                .prop_map(|(l, op, r)| DateConstraint::binary(l, op, r))
        }

        proptest! {
            #[test]
            fn fixed_point_and_monotonicity(
                constraints in proptest::collection::vec(arbitrary_binary(3), 0..6)
            ) {
                let mut doms = domains(3, 1, 5);
                let before: Vec<usize> = doms.iter().map(MeetingDomain::len).collect();

                arc_consistency(&mut doms, &constraints);

                for (dom, &size) in doms.iter().zip(&before) {
                    prop_assert!(dom.len() <= size);
                }
                assert_fixed_point(&doms, &constraints);
            }
        }
    }
}
