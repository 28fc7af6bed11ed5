//! Per-meeting candidate date sets.

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// The set of dates still considered possible for one meeting.
///
/// Domains are created from the shared candidate window and then only ever
/// shrink: consistency filtering removes a date exactly when it is proven
/// infeasible, and removed dates are never added back. The backing set is
/// ordered, so domain iteration (and therefore the schedule the search
/// returns among equally valid ones) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingDomain {
    values: BTreeSet<NaiveDate>,
}

impl MeetingDomain {
    /// Creates a domain holding every day in `[range_start, range_end]`
    /// inclusive. An inverted range yields an empty domain.
    pub fn new(range_start: NaiveDate, range_end: NaiveDate) -> Self {
        Self {
            values: range_start
                .iter_days()
                .take_while(|d| *d <= range_end)
                .collect(),
        }
    }

    /// Number of candidate dates remaining.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no candidate dates remain.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `date` is still a candidate.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.values.contains(&date)
    }

    /// Removes `date` from the domain. Returns whether it was present.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.values.remove(&date)
    }

    /// Iterates the remaining candidates in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.values.iter().copied()
    }

    /// Snapshot of the remaining candidates, used by the filters to
    /// iterate while mutating the domain itself.
    pub fn snapshot(&self) -> Vec<NaiveDate> {
        self.values.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_range_is_inclusive() {
        let domain = MeetingDomain::new(date(3), date(7));
        assert_eq!(domain.len(), 5);
        assert!(domain.contains(date(3)));
        assert!(domain.contains(date(7)));
        assert!(!domain.contains(date(8)));
    }

    #[test]
    fn test_single_day_range() {
        let domain = MeetingDomain::new(date(5), date(5));
        assert_eq!(domain.len(), 1);
        assert!(domain.contains(date(5)));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let domain = MeetingDomain::new(date(7), date(3));
        assert!(domain.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut domain = MeetingDomain::new(date(1), date(3));
        assert!(domain.remove(date(2)));
        assert!(!domain.remove(date(2)));
        assert_eq!(domain.len(), 2);
        assert!(!domain.contains(date(2)));
    }

    #[test]
    fn test_iter_is_ascending() {
        let domain = MeetingDomain::new(date(1), date(4));
        let days: Vec<NaiveDate> = domain.iter().collect();
        assert_eq!(days, vec![date(1), date(2), date(3), date(4)]);
    }

    #[test]
    fn test_crosses_month_boundary() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
        let domain = MeetingDomain::new(start, end);
        assert_eq!(domain.len(), 4);
    }
}
