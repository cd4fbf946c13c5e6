use crate::utils::error::RegistrationError;
use serde::Serialize;

pub const REGISTRATION_SUCCEEDED: &str = "registration succeeded";

/// A registered user. The email is the only key; records are never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// The `(success, message)` pair reported for a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    pub success: bool,
    pub message: String,
}

impl From<std::result::Result<(), RegistrationError>> for RegistrationOutcome {
    fn from(result: std::result::Result<(), RegistrationError>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                message: REGISTRATION_SUCCEEDED.to_string(),
            },
            Err(e) => Self {
                success: false,
                message: e.to_string(),
            },
        }
    }
}
