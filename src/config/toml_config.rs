use crate::core::registry::UserRegistry;
use crate::domain::model::RegistrationOutcome;
use crate::domain::validators::PasswordPolicy;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub registry: Option<RegistrySection>,
    pub password: Option<PasswordConfig>,
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    pub min_length: Option<usize>,
    pub require_digit: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntry {
    pub email: String,
    pub password: String,
}

impl RegistryConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RegistryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn name(&self) -> &str {
        self.registry
            .as_ref()
            .map(|r| r.name.as_str())
            .unwrap_or("user-registry")
    }

    pub fn password_policy(&self) -> PasswordPolicy {
        let defaults = PasswordPolicy::default();
        match &self.password {
            Some(p) => PasswordPolicy {
                min_length: p.min_length.unwrap_or(defaults.min_length),
                require_digit: p.require_digit.unwrap_or(defaults.require_digit),
            },
            None => defaults,
        }
    }

    pub fn build_registry(&self) -> UserRegistry {
        UserRegistry::with_policy(self.password_policy())
    }

    /// Registers the configured users in file order, returning each email with its outcome.
    pub fn register_users(&self, registry: &mut UserRegistry) -> Vec<(String, RegistrationOutcome)> {
        self.users
            .iter()
            .map(|entry| {
                let outcome =
                    RegistrationOutcome::from(registry.register(&entry.email, &entry.password));
                (entry.email.clone(), outcome)
            })
            .collect()
    }

    /// Registers the configured users in file order and stops at the first rejection.
    /// Users registered before the failing entry stay in the registry.
    pub fn try_register_users(&self, registry: &mut UserRegistry) -> Result<usize> {
        for entry in &self.users {
            registry.register(&entry.email, &entry.password).map_err(|e| {
                tracing::warn!("Stopped loading at '{}': {}", entry.email, e);
                e
            })?;
        }
        Ok(self.users.len())
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<()> {
        if let Some(registry) = &self.registry {
            validate_non_empty_string("registry.name", &registry.name)?;
        }

        if let Some(min_length) = self.password.as_ref().and_then(|p| p.min_length) {
            validate_positive_number("password.min_length", min_length, 1)?;
        }

        for (i, entry) in self.users.iter().enumerate() {
            if entry.email.is_empty() {
                return Err(RegistryError::MissingConfigError {
                    field: format!("users[{}].email", i),
                });
            }
            if entry.password.is_empty() {
                return Err(RegistryError::MissingConfigError {
                    field: format!("users[{}].password", i),
                });
            }
        }

        Ok(())
    }
}
