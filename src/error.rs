#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StellarIdError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("invalid option '{field}': {reason}")]
    InvalidOptions { field: &'static str, reason: String },
}

impl StellarIdError {
    pub(crate) fn input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn option(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOptions {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending option, if this is an options error.
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { .. } => None,
            Self::InvalidOptions { field, .. } => Some(*field),
        }
    }
}

pub type Result<T> = std::result::Result<T, StellarIdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let error = StellarIdError::input("must not be empty");
        assert_eq!(error.to_string(), "invalid input: must not be empty");
    }

    #[test]
    fn test_invalid_options_display() {
        let error = StellarIdError::option("prefix", "must be at most 20 characters");
        assert_eq!(
            error.to_string(),
            "invalid option 'prefix': must be at most 20 characters"
        );
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(StellarIdError::option("salt", "too long").field(), Some("salt"));
        assert_eq!(StellarIdError::input("empty").field(), None);
    }

    #[test]
    fn test_error_debug() {
        let error = StellarIdError::input("test");
        assert!(format!("{:?}", error).contains("InvalidInput"));
    }

    #[test]
    fn test_error_clone_and_equality() {
        let error1 = StellarIdError::option("length", "out of range");
        let error2 = error1.clone();
        assert_eq!(error1, error2);
        assert_ne!(error1, StellarIdError::option("prefix", "out of range"));
    }

    #[test]
    fn test_result_type_err() {
        let error = StellarIdError::input("too long");
        let result: Result<i32> = Err(error.clone());
        assert_eq!(result, Err(error));
    }
}
