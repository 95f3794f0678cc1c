//! Domain data structures.
//!
//! Records live in in-memory lists for the session lifetime only; nothing
//! here is persisted. Ids are timestamp-derived at creation time.

pub mod mock;

use chrono::Utc;
use fake::Dummy;
use std::fmt;

/// Returns a monotonic-enough unique id for a newly created record.
///
pub fn next_record_id() -> u64 {
    Utc::now().timestamp_millis() as u64
}

/// Specifying apiary status values.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq)]
pub enum ApiaryStatus {
    Active,
    Inactive,
}

impl fmt::Display for ApiaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiaryStatus::Active => write!(f, "Active"),
            ApiaryStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// Specifying hive status values.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq)]
pub enum HiveStatus {
    Active,
    Critical,
    Dead,
}

impl fmt::Display for HiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HiveStatus::Active => write!(f, "Active"),
            HiveStatus::Critical => write!(f, "Critical"),
            HiveStatus::Dead => write!(f, "Dead"),
        }
    }
}

/// Queen assessment recorded during an inspection.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq)]
pub enum QueenStatus {
    Good,
    Fair,
    Poor,
}

impl QueenStatus {
    pub const ALL: [QueenStatus; 3] = [QueenStatus::Good, QueenStatus::Fair, QueenStatus::Poor];
}

impl fmt::Display for QueenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueenStatus::Good => write!(f, "Good"),
            QueenStatus::Fair => write!(f, "Fair"),
            QueenStatus::Poor => write!(f, "Poor"),
        }
    }
}

/// Brood assessment recorded during an inspection.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq)]
pub enum BroodStatus {
    Excellent,
    Normal,
    Scarce,
}

impl BroodStatus {
    pub const ALL: [BroodStatus; 3] = [
        BroodStatus::Excellent,
        BroodStatus::Normal,
        BroodStatus::Scarce,
    ];
}

impl fmt::Display for BroodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BroodStatus::Excellent => write!(f, "Excellent"),
            BroodStatus::Normal => write!(f, "Normal"),
            BroodStatus::Scarce => write!(f, "Scarce"),
        }
    }
}

/// Honey stores assessment recorded during an inspection.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq)]
pub enum HoneyStores {
    Adequate,
    Scarce,
    Excessive,
}

impl HoneyStores {
    pub const ALL: [HoneyStores; 3] = [
        HoneyStores::Adequate,
        HoneyStores::Scarce,
        HoneyStores::Excessive,
    ];
}

impl fmt::Display for HoneyStores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoneyStores::Adequate => write!(f, "Adequate"),
            HoneyStores::Scarce => write!(f, "Scarce"),
            HoneyStores::Excessive => write!(f, "Excessive"),
        }
    }
}

/// Overall colony health recorded during an inspection.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Fair,
    Critical,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 3] = [
        HealthStatus::Healthy,
        HealthStatus::Fair,
        HealthStatus::Critical,
    ];
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "Healthy"),
            HealthStatus::Fair => write!(f, "Fair"),
            HealthStatus::Critical => write!(f, "Critical"),
        }
    }
}

/// Defines apiary data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Apiary {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub hives_count: u32,
    pub notes: String,
    pub status: ApiaryStatus,
    pub last_inspection: String,
    pub honey_production: String, // quantity string, e.g. "45 kg"
}

/// Defines hive data structure. A hive belongs to exactly one apiary; the
/// link is carried by navigation, not stored here.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Hive {
    pub id: u64,
    pub hive_id: String, // external code, e.g. "HIVE-001"
    pub name: String,
    pub incorporation_date: String,
    pub notes: String,
    pub status: HiveStatus,
    pub last_inspection: String,
    pub honey_production: String,
    pub queen_age: String,
    pub frames_count: u32,
    pub brood_frames: u32,
    pub honey_frames: u32,
}

/// Defines harvest record data structure. Year and month are derived from
/// the harvest date at creation time and stored redundantly for grouping.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct HarvestRecord {
    pub id: u64,
    pub hive_id: String,
    pub hive_name: String,
    pub honey: f64,
    pub pollen: f64,
    pub propolis: f64,
    pub harvest_date: String,
    pub notes: String,
    pub year: i32,
    pub month: String,
}

/// Defines inspection record data structure. Created by the inspection form
/// and appended to the per-hive inspection log.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct InspectionRecord {
    pub date: String,
    pub observations: String,
    pub queen_status: QueenStatus,
    pub brood_status: BroodStatus,
    pub honey_status: HoneyStores,
    pub health_status: HealthStatus,
}

/// Defines a recent activity entry for the home dashboard.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Activity {
    pub id: u64,
    pub kind: String,
    pub apiary: String,
    pub hive: String,
    pub date: String,
    pub status: String,
}
