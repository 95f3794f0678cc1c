//! In-memory seed data.
//!
//! There is no back end; every screen starts from these records and mutates
//! its own in-memory copy for the lifetime of the session.

use super::{Activity, Apiary, ApiaryStatus, HarvestRecord, Hive, HiveStatus};
use std::collections::HashMap;

/// Years offered by the harvest screen selector.
pub const HARVEST_YEARS: [i32; 3] = [2024, 2023, 2022];

/// Month labels covered by the seeded harvest comparison.
pub const HARVEST_MONTHS: [&str; 3] = ["January", "February", "March"];

pub fn seed_apiaries() -> Vec<Apiary> {
    vec![Apiary {
        id: 1,
        name: "Main Apiary".to_string(),
        location: "North Field".to_string(),
        hives_count: 24,
        notes: String::new(),
        status: ApiaryStatus::Active,
        last_inspection: "2024-01-15".to_string(),
        honey_production: "45 kg".to_string(),
    }]
}

pub fn seed_hives() -> Vec<Hive> {
    vec![
        Hive {
            id: 1,
            hive_id: "HIVE-001".to_string(),
            name: "Hive A-1".to_string(),
            incorporation_date: "2023-01-15".to_string(),
            notes: "Strong colony with good honey production. Young, active queen.".to_string(),
            status: HiveStatus::Active,
            last_inspection: "2024-01-15".to_string(),
            honey_production: "12 kg".to_string(),
            queen_age: "2 years".to_string(),
            frames_count: 10,
            brood_frames: 6,
            honey_frames: 4,
        },
        Hive {
            id: 2,
            hive_id: "HIVE-002".to_string(),
            name: "Hive A-2".to_string(),
            incorporation_date: "2023-03-20".to_string(),
            notes: "Needs attention. Queen replacement may be required.".to_string(),
            status: HiveStatus::Critical,
            last_inspection: "2024-01-10".to_string(),
            honey_production: "8 kg".to_string(),
            queen_age: "1 year".to_string(),
            frames_count: 8,
            brood_frames: 3,
            honey_frames: 5,
        },
    ]
}

fn harvest(
    id: u64,
    hive_id: &str,
    hive_name: &str,
    honey: f64,
    pollen: f64,
    propolis: f64,
    year: i32,
    month: &str,
) -> HarvestRecord {
    HarvestRecord {
        id,
        hive_id: hive_id.to_string(),
        hive_name: hive_name.to_string(),
        honey,
        pollen,
        propolis,
        harvest_date: String::new(),
        notes: String::new(),
        year,
        month: month.to_string(),
    }
}

pub fn seed_harvests() -> HashMap<i32, Vec<HarvestRecord>> {
    let mut by_year = HashMap::new();
    by_year.insert(
        2024,
        vec![
            harvest(1, "HIVE-001", "Hive A-1", 45.0, 8.0, 2.0, 2024, "January"),
            harvest(2, "HIVE-002", "Hive A-2", 38.0, 6.0, 1.5, 2024, "January"),
            harvest(3, "HIVE-003", "Hive B-1", 52.0, 9.0, 2.5, 2024, "January"),
            harvest(4, "HIVE-001", "Hive A-1", 62.0, 12.0, 3.0, 2024, "February"),
            harvest(5, "HIVE-002", "Hive A-2", 55.0, 10.0, 2.8, 2024, "February"),
            harvest(6, "HIVE-003", "Hive B-1", 68.0, 14.0, 3.2, 2024, "February"),
            harvest(7, "HIVE-001", "Hive A-1", 78.0, 15.0, 4.0, 2024, "March"),
            harvest(8, "HIVE-002", "Hive A-2", 72.0, 13.0, 3.5, 2024, "March"),
            harvest(9, "HIVE-003", "Hive B-1", 85.0, 18.0, 4.5, 2024, "March"),
        ],
    );
    by_year.insert(
        2023,
        vec![
            harvest(10, "HIVE-001", "Hive A-1", 40.0, 7.0, 1.8, 2023, "January"),
            harvest(11, "HIVE-002", "Hive A-2", 35.0, 5.0, 1.2, 2023, "January"),
            harvest(12, "HIVE-003", "Hive B-1", 48.0, 8.0, 2.2, 2023, "January"),
            harvest(13, "HIVE-001", "Hive A-1", 58.0, 11.0, 2.8, 2023, "February"),
            harvest(14, "HIVE-002", "Hive A-2", 52.0, 9.0, 2.5, 2023, "February"),
            harvest(15, "HIVE-003", "Hive B-1", 65.0, 13.0, 3.1, 2023, "February"),
            harvest(16, "HIVE-001", "Hive A-1", 75.0, 14.0, 3.8, 2023, "March"),
            harvest(17, "HIVE-002", "Hive A-2", 68.0, 12.0, 3.2, 2023, "March"),
            harvest(18, "HIVE-003", "Hive B-1", 82.0, 16.0, 4.2, 2023, "March"),
        ],
    );
    by_year
}

pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            kind: "Inspection".to_string(),
            apiary: "Main Apiary".to_string(),
            hive: "Hive A-1".to_string(),
            date: "2024-01-20".to_string(),
            status: "Completed".to_string(),
        },
        Activity {
            id: 2,
            kind: "Harvest".to_string(),
            apiary: "Mountain Apiary".to_string(),
            hive: "Hive B-3".to_string(),
            date: "2024-01-18".to_string(),
            status: "Completed".to_string(),
        },
        Activity {
            id: 3,
            kind: "Feeding".to_string(),
            apiary: "Garden Apiary".to_string(),
            hive: "Hive C-2".to_string(),
            date: "2024-01-16".to_string(),
            status: "Completed".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_harvests_cover_two_years() {
        let harvests = seed_harvests();
        assert_eq!(harvests.get(&2024).map(Vec::len), Some(9));
        assert_eq!(harvests.get(&2023).map(Vec::len), Some(9));
        assert!(harvests.get(&2022).is_none());
    }

    #[test]
    fn test_seed_records_are_consistent() {
        for (year, records) in seed_harvests() {
            for record in records {
                assert_eq!(record.year, year);
                assert!(HARVEST_MONTHS.contains(&record.month.as_str()));
            }
        }
        assert_eq!(seed_apiaries().len(), 1);
        assert_eq!(seed_hives().len(), 2);
        assert_eq!(seed_activities().len(), 3);
    }
}
