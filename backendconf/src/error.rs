//! Error types for binding configuration profiles

/// Errors that can occur while binding a profile from the environment.
///
/// Both variants are startup failures: a service cannot run with an
/// incomplete configuration, so callers propagate them out of `main`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfError {
    /// A required environment variable is not set.
    ///
    /// Only fields declared with `#[conf(required)]` produce this error;
    /// other fields fall back to their default or zero value.
    #[error("environment variable '{key}' is required but not set")]
    MissingRequiredValue {
        /// Name of the missing environment variable
        key: String,
    },

    /// A value could not be converted into the field's declared type.
    ///
    /// Raised for values read from the environment as well as for declared
    /// default literals. A malformed value never falls back to the default.
    #[error("failed to convert environment variable '{key}' value {value:?} to {type_name}: {message}")]
    TypeConversion {
        /// Name of the environment variable being converted
        key: String,
        /// Raw string that failed to convert
        value: String,
        /// Target type name
        type_name: String,
        /// Reason reported by the converter
        message: String,
    },
}

impl ConfError {
    /// Create a conversion error for target type `T`
    pub fn conversion<T>(
        key: impl Into<String>,
        value: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::TypeConversion {
            key: key.into(),
            value: value.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a missing required value error
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingRequiredValue { key: key.into() }
    }

    /// Environment variable the error refers to
    pub fn key(&self) -> &str {
        match self {
            Self::MissingRequiredValue { key } | Self::TypeConversion { key, .. } => key,
        }
    }
}
