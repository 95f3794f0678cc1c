//! New-apiary form draft.

use super::{present, FieldErrors};
use crate::models::{next_record_id, Apiary, ApiaryStatus};
use chrono::Utc;

/// Draft for the new-apiary form. Hive count and notes are optional.
///
#[derive(Debug, Default, Clone)]
pub struct ApiaryForm {
    pub name: String,
    pub location: String,
    pub hives_count: String,
    pub notes: String,
}

impl ApiaryForm {
    pub const FIELD_COUNT: usize = 4;
    pub const FIELD_NAMES: [&'static str; Self::FIELD_COUNT] =
        ["name", "location", "hivesCount", "notes"];

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if !present(&self.name) {
            errors.insert("name", "Apiary name is required".to_string());
        }

        if !present(&self.location) {
            errors.insert("location", "Location is required".to_string());
        }

        if present(&self.hives_count) {
            match self.hives_count.trim().parse::<i64>() {
                Ok(count) if count > 0 => {}
                _ => {
                    errors.insert(
                        "hivesCount",
                        "Hive count must be a valid number greater than 0".to_string(),
                    );
                }
            }
        }

        errors
    }

    /// Synthesize the record from an accepted draft. Status, last inspection
    /// and honey production get their creation-time defaults.
    ///
    pub fn build(&self) -> Apiary {
        Apiary {
            id: next_record_id(),
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            hives_count: self
                .hives_count
                .trim()
                .parse::<u32>()
                .unwrap_or(0),
            notes: self.notes.trim().to_string(),
            status: ApiaryStatus::Active,
            last_inspection: Utc::now().format("%Y-%m-%d").to_string(),
            honey_production: "0 kg".to_string(),
        }
    }

    pub fn fields_mut(&mut self) -> [&mut String; Self::FIELD_COUNT] {
        [
            &mut self.name,
            &mut self.location,
            &mut self.hives_count,
            &mut self.notes,
        ]
    }

    pub fn clear(&mut self) {
        *self = ApiaryForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ApiaryForm {
        ApiaryForm {
            name: "Mountain Apiary".to_string(),
            location: "South Ridge".to_string(),
            hives_count: "10".to_string(),
            notes: "Windy site".to_string(),
        }
    }

    #[test]
    fn test_valid_form_accepted() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        let form = ApiaryForm::default();
        let errors = form.validate();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("location"));
        assert!(!errors.contains_key("hivesCount"));
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        assert!(form.validate().contains_key("name"));
    }

    #[test]
    fn test_negative_hive_count_rejected() {
        let mut form = valid_form();
        form.hives_count = "-3".to_string();
        assert!(form.validate().contains_key("hivesCount"));
    }

    #[test]
    fn test_zero_hive_count_rejected() {
        let mut form = valid_form();
        form.hives_count = "0".to_string();
        assert!(form.validate().contains_key("hivesCount"));
    }

    #[test]
    fn test_empty_hive_count_allowed() {
        let mut form = valid_form();
        form.hives_count = String::new();
        assert!(form.validate().is_empty());
        assert_eq!(form.build().hives_count, 0);
    }

    #[test]
    fn test_build_defaults() {
        let apiary = valid_form().build();
        assert_eq!(apiary.name, "Mountain Apiary");
        assert_eq!(apiary.hives_count, 10);
        assert_eq!(apiary.status, ApiaryStatus::Active);
        assert_eq!(apiary.honey_production, "0 kg");
        assert!(!apiary.last_inspection.is_empty());
        assert!(apiary.id > 0);
    }
}
