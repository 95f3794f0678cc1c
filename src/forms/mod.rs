//! Form drafts and validation.
//!
//! Every form holds its fields as raw text exactly as typed. `validate()`
//! evaluates each field independently and collects all applicable errors
//! into a field -> message mapping; an empty mapping means the draft is
//! accepted and `build()` may synthesize the record, including its derived
//! fields.

mod account;
mod apiary;
mod harvest;
mod inspection;

pub use account::{ForgotPasswordForm, LoginForm, NewPasswordForm, RegisterForm};
pub use apiary::ApiaryForm;
pub use harvest::HarvestForm;
pub use inspection::InspectionForm;

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Field name to error message. Ordered so inline errors render stably.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// True when the value is non-empty after trimming.
fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Basic `x@y.z` shape check.
fn is_valid_email(value: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());
    re.is_match(value.trim())
}

/// Parses an optional non-negative float field. Returns an error message
/// only when the field is present and does not parse or is negative.
fn check_optional_amount(value: &str, label: &str) -> Option<String> {
    if !present(value) {
        return None;
    }
    match value.trim().parse::<f64>() {
        Ok(amount) if amount >= 0.0 => None,
        _ => Some(format!(
            "{} must be a valid number greater than or equal to 0",
            label
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present() {
        assert!(present("x"));
        assert!(present("  x  "));
        assert!(!present(""));
        assert!(!present("   "));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("juan.perez@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_check_optional_amount() {
        assert!(check_optional_amount("", "Pollen").is_none());
        assert!(check_optional_amount("  ", "Pollen").is_none());
        assert!(check_optional_amount("2.5", "Pollen").is_none());
        assert!(check_optional_amount("0", "Pollen").is_none());
        assert!(check_optional_amount("-1", "Pollen").is_some());
        assert!(check_optional_amount("abc", "Pollen").is_some());
    }
}
