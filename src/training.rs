// 🏋️ Training Index - secondary lookup of training sessions by date and member
//
// Every registered session lands in exactly one date bucket and one member
// bucket, so the two indexes always agree on the total count. Buckets hold
// copies of the member's record; the member keeps the original.
//
// Ranking ties (most active days/members) are broken by ascending date/id.

use crate::members::{MemberId, Role, TrainingRecord};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct TrainingIndex {
    by_date: BTreeMap<NaiveDate, Vec<TrainingRecord>>,
    by_member: BTreeMap<MemberId, Vec<TrainingRecord>>,
}

impl TrainingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one session into both indexes, creating buckets on first use
    pub fn register(&mut self, member_id: MemberId, record: &TrainingRecord) {
        self.by_date
            .entry(record.date)
            .or_default()
            .push(record.clone());
        self.by_member
            .entry(member_id)
            .or_default()
            .push(record.clone());
    }

    pub fn by_date(&self, date: NaiveDate) -> &[TrainingRecord] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn by_member(&self, id: MemberId) -> &[TrainingRecord] {
        self.by_member.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count_by_date(&self) -> BTreeMap<NaiveDate, usize> {
        self.by_date.iter().map(|(d, v)| (*d, v.len())).collect()
    }

    pub fn count_by_member(&self) -> BTreeMap<MemberId, usize> {
        self.by_member.iter().map(|(id, v)| (*id, v.len())).collect()
    }

    pub fn average_intensity_by_date(&self, date: NaiveDate) -> f64 {
        mean(self.by_date(date).iter().map(|r| r.intensity as f64))
    }

    pub fn average_duration_by_date(&self, date: NaiveDate) -> f64 {
        mean(self.by_date(date).iter().map(|r| r.duration_minutes as f64))
    }

    /// Dates with the most sessions, busiest first
    pub fn most_active_days(&self, limit: usize) -> Vec<NaiveDate> {
        top_by_count(self.count_by_date(), limit)
    }

    /// Members with the most sessions, busiest first
    pub fn most_active_members(&self, limit: usize) -> Vec<MemberId> {
        top_by_count(self.count_by_member(), limit)
    }

    /// Sessions per role. Members the lookup cannot resolve are skipped.
    pub fn distribution_by_role<F>(&self, role_lookup: F) -> BTreeMap<Role, usize>
    where
        F: Fn(MemberId) -> Option<Role>,
    {
        let mut result = BTreeMap::new();
        for (id, records) in &self.by_member {
            if let Some(role) = role_lookup(*id) {
                *result.entry(role).or_insert(0) += records.len();
            }
        }
        result
    }

    /// Sum of all date buckets
    pub fn total_trainings(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_date.clear();
        self.by_member.clear();
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Keys ordered by descending count. The sort is stable over the map's
/// ascending key order, which makes ascending key the tie-break.
fn top_by_count<K: Copy + Ord>(counts: BTreeMap<K, usize>, limit: usize) -> Vec<K> {
    let mut entries: Vec<(K, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.into_iter().take(limit).map(|(k, _)| k).collect()
}

// ============================================================================
// TESTS
// ============================================================================
