//! Node consistency: unary-constraint domain filtering.

use crate::model::{DateConstraint, MeetingDomain};

/// Removes from each meeting's domain every date that violates a unary
/// constraint on that meeting. Binary constraints are skipped entirely.
///
/// Mutates the domains in place and returns the number of dates removed.
/// Idempotent: a second application removes nothing.
///
/// # Panics
///
/// Panics if a constraint references a meeting index with no domain;
/// [`CalendarModel::validate`](crate::model::CalendarModel::validate)
/// rules that out beforehand.
pub fn node_consistency(domains: &mut [MeetingDomain], constraints: &[DateConstraint]) -> usize {
    let mut removed = 0;
    for constraint in constraints {
        let DateConstraint::Unary { left, op, date } = constraint else {
            continue;
        };
        let domain = &mut domains[*left];
        for candidate in domain.snapshot() {
            if !op.eval(candidate, *date) && domain.remove(candidate) {
                removed += 1;
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

    #[test]
    fn test_prunes_to_fixed_date() {
        let mut doms = domains(1, 1, 5);
        let constraints = [DateConstraint::unary(0, DateOp::Equal, date(3))];

        let removed = node_consistency(&mut doms, &constraints);

        assert_eq!(removed, 4);
        assert_eq!(doms[0].snapshot(), vec![date(3)]);
    }

    #[test]
    fn test_only_named_meeting_is_touched() {
        let mut doms = domains(2, 1, 5);
        let constraints = [DateConstraint::unary(0, DateOp::Before, date(3))];

        node_consistency(&mut doms, &constraints);

        assert_eq!(doms[0].len(), 2);
        assert_eq!(doms[1].len(), 5);
    }

    #[test]
    fn test_binary_constraints_are_skipped() {
        let mut doms = domains(2, 1, 5);
        let constraints = [DateConstraint::binary(0, DateOp::Before, 1)];

        let removed = node_consistency(&mut doms, &constraints);

        assert_eq!(removed, 0);
        assert_eq!(doms[0].len(), 5);
        assert_eq!(doms[1].len(), 5);
    }

    #[test]
    fn test_bound_outside_window_empties_domain() {
        let mut doms = domains(1, 1, 5);
        let constraints = [DateConstraint::unary(0, DateOp::Equal, date(20))];

        node_consistency(&mut doms, &constraints);

        assert!(doms[0].is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut doms = domains(1, 1, 10);
        let constraints = [
            DateConstraint::unary(0, DateOp::After, date(2)),
            DateConstraint::unary(0, DateOp::BeforeOrOn, date(7)),
        ];

        node_consistency(&mut doms, &constraints);
        let snapshot = doms[0].snapshot();
        let removed_again = node_consistency(&mut doms, &constraints);

        assert_eq!(removed_again, 0);
        assert_eq!(doms[0].snapshot(), snapshot);
    }

    #[test]
    fn test_no_constraints_no_change() {
        let mut doms = domains(2, 1, 4);
        assert_eq!(node_consistency(&mut doms, &[]), 0);
        assert_eq!(doms[0].len(), 4);
    }
}
