use thiserror::Error;

/// Why a registration was refused. The `Display` text is the message handed
/// back to callers alongside `success = false`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("invalid email")]
    InvalidEmail,

    #[error("invalid password")]
    InvalidPassword,

    #[error("email already registered")]
    DuplicateEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Configuration,
    System,
}

impl RegistrationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistrationError::InvalidEmail | RegistrationError::InvalidPassword => {
                ErrorCategory::Validation
            }
            RegistrationError::DuplicateEmail => ErrorCategory::Conflict,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RegistrationError::InvalidEmail => "Use the format example@domain.com",
            RegistrationError::InvalidPassword => {
                "Use at least 6 characters including at least 1 digit"
            }
            RegistrationError::DuplicateEmail => "Pick another email or look up the existing user",
        }
    }
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Registration rejected: {0}")]
    Registration(#[from] RegistrationError),
}

impl RegistryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::IoError(_) | RegistryError::SerializationError(_) => {
                ErrorCategory::System
            }
            RegistryError::ConfigError { .. }
            | RegistryError::InvalidConfigValueError { .. }
            | RegistryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RegistryError::Registration(e) => e.category(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::IoError(e) => format!("Could not read or write a file: {}", e),
            RegistryError::SerializationError(e) => format!("Could not encode output: {}", e),
            RegistryError::ConfigError { message } => format!("Configuration problem: {}", message),
            RegistryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            RegistryError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            RegistryError::Registration(e) => format!("Registration failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RegistryError::IoError(_) => "Check that the file exists and is readable".to_string(),
            RegistryError::SerializationError(_) => "Retry without --json".to_string(),
            RegistryError::ConfigError { .. } => {
                "Make sure the file is valid TOML with [registry], [password] and [[users]] sections"
                    .to_string()
            }
            RegistryError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration file", field)
            }
            RegistryError::MissingConfigError { field } => {
                format!("Set '{}' in the configuration file", field)
            }
            RegistryError::Registration(e) => e.recovery_suggestion().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
