pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::RegistryConfig;
pub use crate::core::{demo::run_demo, registry::UserRegistry, shared::SharedRegistry};
pub use domain::model::{RegistrationOutcome, User};
pub use domain::validators::{validate_email, validate_password, PasswordPolicy};
pub use utils::error::{RegistrationError, RegistryError, Result};
