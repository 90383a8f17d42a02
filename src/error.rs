use thiserror::Error;

// =============================================================================
// Input errors: reading answers from the console or a script
// =============================================================================

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended before '{label}' was answered")]
    EndOfInput { label: String },

    #[error("Invalid value '{value}' for '{label}': {reason}")]
    Invalid {
        label: String,
        value: String,
        reason: String,
    },
}

impl InputError {
    pub fn invalid(
        label: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Invalid {
            label: label.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Creation errors: factories and menus
// =============================================================================

#[derive(Error, Debug)]
pub enum CreationError {
    #[error("Invalid choice!")]
    InvalidChoice(String),

    #[error(transparent)]
    Input(#[from] InputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_display() {
        let error = CreationError::InvalidChoice("9".to_string());
        assert_eq!(error.to_string(), "Invalid choice!");
    }

    #[test]
    fn test_invalid_input_display() {
        let error = InputError::invalid("Enter number of seats", "many", "not a number");
        let display = error.to_string();
        assert!(display.contains("many"));
        assert!(display.contains("Enter number of seats"));
        assert!(display.contains("not a number"));
    }

    #[test]
    fn test_input_error_converts_into_creation_error() {
        let error: CreationError = InputError::EndOfInput {
            label: "Enter car brand".to_string(),
        }
        .into();
        assert!(matches!(error, CreationError::Input(InputError::EndOfInput { .. })));
        assert!(error.to_string().contains("Enter car brand"));
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<CreationError>();
        assert_sync::<CreationError>();
    }
}
