//! New-harvest form draft.

use super::{check_optional_amount, present, FieldErrors};
use crate::models::{next_record_id, HarvestRecord};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Draft for the new-harvest form. Honey is required; pollen and propolis
/// default to zero when left blank.
///
#[derive(Debug, Default, Clone)]
pub struct HarvestForm {
    pub hive_id: String,
    pub hive_name: String,
    pub honey_amount: String,
    pub pollen_amount: String,
    pub propolis_amount: String,
    pub harvest_date: String,
    pub notes: String,
}

impl HarvestForm {
    pub const FIELD_COUNT: usize = 7;
    pub const FIELD_NAMES: [&'static str; Self::FIELD_COUNT] = [
        "hiveId",
        "hiveName",
        "honeyAmount",
        "pollenAmount",
        "propolisAmount",
        "harvestDate",
        "notes",
    ];

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if !present(&self.hive_id) {
            errors.insert("hiveId", "Hive ID is required".to_string());
        }

        if !present(&self.hive_name) {
            errors.insert("hiveName", "Hive name is required".to_string());
        }

        if !present(&self.honey_amount) {
            errors.insert("honeyAmount", "Honey amount is required".to_string());
        } else {
            match self.honey_amount.trim().parse::<f64>() {
                Ok(amount) if amount >= 0.0 => {}
                _ => {
                    errors.insert(
                        "honeyAmount",
                        "Honey amount must be a valid number greater than or equal to 0"
                            .to_string(),
                    );
                }
            }
        }

        if let Some(message) = check_optional_amount(&self.pollen_amount, "Pollen amount") {
            errors.insert("pollenAmount", message);
        }

        if let Some(message) = check_optional_amount(&self.propolis_amount, "Propolis amount") {
            errors.insert("propolisAmount", message);
        }

        if !present(&self.harvest_date) {
            errors.insert("harvestDate", "Harvest date is required".to_string());
        } else if NaiveDate::parse_from_str(self.harvest_date.trim(), DATE_FORMAT).is_err() {
            // Year and month are derived from this field, so it must parse.
            errors.insert(
                "harvestDate",
                "Harvest date must be a valid date (YYYY-MM-DD)".to_string(),
            );
        }

        errors
    }

    /// Synthesize the record from an accepted draft, deriving year and month
    /// from the harvest date.
    ///
    pub fn build(&self) -> HarvestRecord {
        let date = NaiveDate::parse_from_str(self.harvest_date.trim(), DATE_FORMAT)
            .unwrap_or_default();
        HarvestRecord {
            id: next_record_id(),
            hive_id: self.hive_id.trim().to_string(),
            hive_name: self.hive_name.trim().to_string(),
            honey: self.honey_amount.trim().parse::<f64>().unwrap_or(0.0),
            pollen: self.pollen_amount.trim().parse::<f64>().unwrap_or(0.0),
            propolis: self.propolis_amount.trim().parse::<f64>().unwrap_or(0.0),
            harvest_date: self.harvest_date.trim().to_string(),
            notes: self.notes.trim().to_string(),
            year: date.format("%Y").to_string().parse().unwrap_or(0),
            month: date.format("%B").to_string(),
        }
    }

    pub fn fields_mut(&mut self) -> [&mut String; Self::FIELD_COUNT] {
        [
            &mut self.hive_id,
            &mut self.hive_name,
            &mut self.honey_amount,
            &mut self.pollen_amount,
            &mut self.propolis_amount,
            &mut self.harvest_date,
            &mut self.notes,
        ]
    }

    pub fn clear(&mut self) {
        *self = HarvestForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> HarvestForm {
        HarvestForm {
            hive_id: "HIVE-001".to_string(),
            hive_name: "Hive A-1".to_string(),
            honey_amount: "25.5".to_string(),
            pollen_amount: String::new(),
            propolis_amount: String::new(),
            harvest_date: "2024-03-18".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_form_accepted_with_blank_optionals() {
        let form = valid_form();
        assert!(form.validate().is_empty());
        let record = form.build();
        assert_eq!(record.honey, 25.5);
        assert_eq!(record.pollen, 0.0);
        assert_eq!(record.propolis, 0.0);
    }

    #[test]
    fn test_missing_required_fields() {
        let form = HarvestForm::default();
        let errors = form.validate();
        assert!(errors.contains_key("hiveId"));
        assert!(errors.contains_key("hiveName"));
        assert!(errors.contains_key("honeyAmount"));
        assert!(errors.contains_key("harvestDate"));
        assert!(!errors.contains_key("pollenAmount"));
        assert!(!errors.contains_key("propolisAmount"));
    }

    #[test]
    fn test_negative_honey_rejected() {
        let mut form = valid_form();
        form.honey_amount = "-2".to_string();
        assert!(form.validate().contains_key("honeyAmount"));
    }

    #[test]
    fn test_negative_pollen_rejected() {
        let mut form = valid_form();
        form.pollen_amount = "-0.5".to_string();
        assert!(form.validate().contains_key("pollenAmount"));
    }

    #[test]
    fn test_unparseable_date_rejected() {
        let mut form = valid_form();
        form.harvest_date = "March 18th".to_string();
        assert!(form.validate().contains_key("harvestDate"));
    }

    #[test]
    fn test_year_and_month_derived_from_date() {
        let record = valid_form().build();
        assert_eq!(record.year, 2024);
        assert_eq!(record.month, "March");
    }

    #[test]
    fn test_all_errors_collected_in_one_pass() {
        let form = HarvestForm {
            pollen_amount: "abc".to_string(),
            ..HarvestForm::default()
        };
        let errors = form.validate();
        assert!(errors.len() >= 5);
    }
}
