use super::{group_by, Bucket, Buckets};
use crate::model::{CommitRecord, WeekKey};
use chrono::{Days, NaiveDate};

/// A bucket key with a well-defined next period.
pub trait CalendarKey: Ord + Copy {
    fn succ(&self) -> Option<Self>;
}

impl CalendarKey for NaiveDate {
    fn succ(&self) -> Option<Self> {
        self.succ_opt()
    }
}

impl CalendarKey for WeekKey {
    fn succ(&self) -> Option<Self> {
        self.monday()?
            .checked_add_days(Days::new(7))
            .map(WeekKey::from_date)
    }
}

/// Insert an empty bucket for every period between the first and last key.
///
/// Existing buckets are left untouched and an empty map is returned as is.
pub fn fill_gaps<K: CalendarKey>(mut buckets: Buckets<K>) -> Buckets<K> {
    let (first, last) = match (buckets.keys().next(), buckets.keys().next_back()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return buckets,
    };

    let mut current = first;
    while current < last {
        buckets
            .entry(current)
            .or_insert_with(|| Bucket::empty(current));
        match current.succ() {
            Some(next) => current = next,
            None => break,
        }
    }

    buckets
}

/// Group commits by local calendar day, filling days without commits.
pub fn group_by_day(commits: Vec<CommitRecord>) -> Buckets<NaiveDate> {
    fill_gaps(group_by(commits, CommitRecord::date))
}
