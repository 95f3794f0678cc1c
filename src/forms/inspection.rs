//! New-inspection form draft.

use super::{present, FieldErrors};
use crate::models::{BroodStatus, HealthStatus, HoneyStores, InspectionRecord, QueenStatus};

/// Draft for the new-inspection form. The status fields are selections with
/// defaults and cannot be invalid; only the date is free text.
///
#[derive(Debug, Clone)]
pub struct InspectionForm {
    pub date: String,
    pub observations: String,
    pub queen_status: QueenStatus,
    pub brood_status: BroodStatus,
    pub honey_status: HoneyStores,
    pub health_status: HealthStatus,
}

impl Default for InspectionForm {
    fn default() -> InspectionForm {
        InspectionForm {
            date: String::new(),
            observations: String::new(),
            queen_status: QueenStatus::Good,
            brood_status: BroodStatus::Normal,
            honey_status: HoneyStores::Adequate,
            health_status: HealthStatus::Healthy,
        }
    }
}

impl InspectionForm {
    /// Text fields plus the four status selectors.
    pub const FIELD_COUNT: usize = 6;
    pub const FIELD_NAMES: [&'static str; Self::FIELD_COUNT] = [
        "date",
        "observations",
        "queenStatus",
        "broodStatus",
        "honeyStores",
        "healthStatus",
    ];

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !present(&self.date) {
            errors.insert("date", "Inspection date is required".to_string());
        }
        errors
    }

    pub fn build(&self) -> InspectionRecord {
        InspectionRecord {
            date: self.date.trim().to_string(),
            observations: self.observations.trim().to_string(),
            queen_status: self.queen_status,
            brood_status: self.brood_status,
            honey_status: self.honey_status,
            health_status: self.health_status,
        }
    }

    pub fn cycle_queen_status(&mut self) {
        self.queen_status = next_in(&QueenStatus::ALL, self.queen_status);
    }

    pub fn cycle_brood_status(&mut self) {
        self.brood_status = next_in(&BroodStatus::ALL, self.brood_status);
    }

    pub fn cycle_honey_status(&mut self) {
        self.honey_status = next_in(&HoneyStores::ALL, self.honey_status);
    }

    pub fn cycle_health_status(&mut self) {
        self.health_status = next_in(&HealthStatus::ALL, self.health_status);
    }

    pub fn clear(&mut self) {
        *self = InspectionForm::default();
    }
}

fn next_in<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let index = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(index + 1) % all.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = InspectionForm::default();
        assert_eq!(form.queen_status, QueenStatus::Good);
        assert_eq!(form.brood_status, BroodStatus::Normal);
        assert_eq!(form.honey_status, HoneyStores::Adequate);
        assert_eq!(form.health_status, HealthStatus::Healthy);
    }

    #[test]
    fn test_missing_date_rejected() {
        let form = InspectionForm::default();
        assert!(form.validate().contains_key("date"));
    }

    #[test]
    fn test_populated_date_accepted() {
        let form = InspectionForm {
            date: "2024-02-01".to_string(),
            ..InspectionForm::default()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_status_cycling_wraps() {
        let mut form = InspectionForm::default();
        form.cycle_queen_status();
        assert_eq!(form.queen_status, QueenStatus::Fair);
        form.cycle_queen_status();
        assert_eq!(form.queen_status, QueenStatus::Poor);
        form.cycle_queen_status();
        assert_eq!(form.queen_status, QueenStatus::Good);
    }

    #[test]
    fn test_build_trims_text() {
        let form = InspectionForm {
            date: " 2024-02-01 ".to_string(),
            observations: " calm colony ".to_string(),
            ..InspectionForm::default()
        };
        let record = form.build();
        assert_eq!(record.date, "2024-02-01");
        assert_eq!(record.observations, "calm colony");
    }
}
