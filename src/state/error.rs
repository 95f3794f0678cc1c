//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Detail navigation requested without a selected apiary
    #[error("No apiary selected")]
    ApiaryNotSelected,

    /// Detail navigation requested without a selected hive
    #[error("No hive selected")]
    HiveNotSelected,

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::ApiaryNotSelected;
        assert!(error.to_string().contains("No apiary selected"));

        let error = StateError::HiveNotSelected;
        assert!(error.to_string().contains("No hive selected"));

        let error = StateError::Other("Generic error".to_string());
        assert!(error.to_string().contains("Generic error"));
    }
}
