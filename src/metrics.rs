//! Derived display metrics.
//!
//! Pure rollups over the in-memory lists, recomputed on every render. No
//! caching and no incremental update; the lists are small.

use crate::models::{Apiary, HarvestRecord, Hive, HiveStatus};

/// Sum of the hive counts across all apiaries.
///
pub fn total_hives(apiaries: &[Apiary]) -> u32 {
    apiaries.iter().map(|apiary| apiary.hives_count).sum()
}

/// Sum of honey production across all apiaries. Production is stored as a
/// quantity string ("45 kg"); only the leading integer counts.
///
pub fn total_honey(apiaries: &[Apiary]) -> u32 {
    apiaries
        .iter()
        .map(|apiary| leading_int(&apiary.honey_production))
        .sum()
}

/// Honey harvested by one hive in one month. Multiple harvests in the same
/// month are summed.
///
pub fn monthly_honey(records: &[HarvestRecord], hive_id: &str, month: &str) -> f64 {
    records
        .iter()
        .filter(|record| record.hive_id == hive_id && record.month == month)
        .map(|record| record.honey)
        .sum()
}

/// Total honey harvested by one hive across the selected year.
///
pub fn hive_total_honey(records: &[HarvestRecord], hive_id: &str) -> f64 {
    records
        .iter()
        .filter(|record| record.hive_id == hive_id)
        .map(|record| record.honey)
        .sum()
}

/// Total honey across all records of the selected year.
///
pub fn total_production(records: &[HarvestRecord]) -> f64 {
    records.iter().map(|record| record.honey).sum()
}

/// Average honey per distinct hive, or zero when there are no records.
///
pub fn average_production(records: &[HarvestRecord]) -> f64 {
    let mut hive_ids: Vec<&str> = records.iter().map(|r| r.hive_id.as_str()).collect();
    hive_ids.sort_unstable();
    hive_ids.dedup();
    if hive_ids.is_empty() {
        0.0
    } else {
        total_production(records) / hive_ids.len() as f64
    }
}

/// Distinct hive ids present in the records, in first-seen order. Drives the
/// rows of the monthly comparison table.
///
pub fn distinct_hives(records: &[HarvestRecord]) -> Vec<(String, String)> {
    let mut hives: Vec<(String, String)> = Vec::new();
    for record in records {
        if !hives.iter().any(|(id, _)| id == &record.hive_id) {
            hives.push((record.hive_id.clone(), record.hive_name.clone()));
        }
    }
    hives
}

/// Per-status hive counts for the filter tabs and summary cards.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HiveStatusCounts {
    pub active: usize,
    pub critical: usize,
    pub dead: usize,
}

impl HiveStatusCounts {
    pub fn total(&self) -> usize {
        self.active + self.critical + self.dead
    }
}

pub fn hive_status_counts(hives: &[Hive]) -> HiveStatusCounts {
    let mut counts = HiveStatusCounts::default();
    for hive in hives {
        match hive.status {
            HiveStatus::Active => counts.active += 1,
            HiveStatus::Critical => counts.critical += 1,
            HiveStatus::Dead => counts.dead += 1,
        }
    }
    counts
}

fn leading_int(value: &str) -> u32 {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
