/// Failures that end an inspection attempt.
///
/// The `Display` text is what the user sees in the alert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InspectError {
    #[error("Please select a CSV file first!")]
    UserInputMissing,

    #[error("Error reading the CSV file: {message}")]
    ParseFailure { message: String },

    #[error("No valid data found in the CSV file!")]
    EmptyDataset,
}

impl InspectError {
    pub fn parse(message: impl Into<String>) -> Self {
        InspectError::ParseFailure {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_messages() {
        assert_eq!(
            InspectError::UserInputMissing.to_string(),
            "Please select a CSV file first!"
        );
        assert_eq!(
            InspectError::parse("bad quote").to_string(),
            "Error reading the CSV file: bad quote"
        );
        assert_eq!(
            InspectError::EmptyDataset.to_string(),
            "No valid data found in the CSV file!"
        );
    }
}
