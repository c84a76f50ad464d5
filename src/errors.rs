/// Reasons a dropzone's options are rejected during initialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Missing attribute id in parameter options: options.id not found")]
    MissingId,

    #[error("Attribute id in parameter options must not be empty")]
    EmptyId,

    #[error("Invalid dropzone options: {0}")]
    InvalidOptions(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropzoneError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Unsupported dropzone type found: {0}")]
    UnsupportedType(String),
}

impl DropzoneError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, DropzoneError::Configuration(_))
    }

    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, DropzoneError::UnsupportedType(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_message_names_the_attribute() {
        let err: DropzoneError = ConfigurationError::MissingId.into();
        assert!(err.is_configuration());
        assert!(!err.is_unsupported_type());
        assert!(err.to_string().contains("options.id"));
    }

    #[test]
    fn unsupported_type_message_carries_the_type() {
        let err = DropzoneError::UnsupportedType("SomethingElse".into());
        assert!(err.is_unsupported_type());
        assert_eq!(err.to_string(), "Unsupported dropzone type found: SomethingElse");
    }

    #[test]
    fn configuration_errors_are_transparent() {
        let err: DropzoneError = ConfigurationError::EmptyId.into();
        assert_eq!(err.to_string(), "Attribute id in parameter options must not be empty");
    }
}
