use crate::domain::model::User;
use crate::domain::validators::{validate_email, PasswordPolicy};
use crate::utils::error::RegistrationError;

/// In-memory, append-only store of registered users kept in insertion order.
///
/// Emails are compared exactly (case-sensitive, no trimming), so no two
/// stored records share the same email string.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<User>,
    policy: PasswordPolicy,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self {
            users: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Validates and stores a new user.
    ///
    /// Checks run in a fixed order: email format, password strength, then
    /// duplicate email. The store only changes when every check passes.
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
    ) -> std::result::Result<(), RegistrationError> {
        if !validate_email(email) {
            tracing::debug!("Rejected registration for '{}': invalid email", email);
            return Err(RegistrationError::InvalidEmail);
        }

        if !self.policy.check(password) {
            tracing::debug!("Rejected registration for '{}': invalid password", email);
            return Err(RegistrationError::InvalidPassword);
        }

        if self.find(email).is_some() {
            tracing::debug!("Rejected registration for '{}': already registered", email);
            return Err(RegistrationError::DuplicateEmail);
        }

        self.users.push(User::new(email, password));
        tracing::info!("Registered user {} ({} total)", email, self.users.len());

        Ok(())
    }

    /// First record whose email equals `email` exactly. The argument is not validated.
    pub fn find(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    /// Owned copy of every record, oldest first.
    pub fn list_all(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RegistrationOutcome;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = UserRegistry::new();
        assert_eq!(registry.count(), 0);
        assert!(registry.is_empty());
        assert!(registry.list_all().is_empty());
        assert_eq!(*registry.policy(), PasswordPolicy::default());
    }

    #[test]
    fn test_register_valid_user() {
        let mut registry = UserRegistry::new();
        let outcome = RegistrationOutcome::from(registry.register("teste@exemplo.com", "senha123"));

        assert!(outcome.success);
        assert_eq!(outcome.message, "registration succeeded");
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_email_check_takes_priority() {
        let mut registry = UserRegistry::new();
        assert_eq!(
            registry.register("email_invalido", "abc"),
            Err(RegistrationError::InvalidEmail)
        );
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_password_checked_before_duplicate() {
        let mut registry = UserRegistry::new();
        registry.register("duplicado@teste.com", "senha123").unwrap();

        assert_eq!(
            registry.register("duplicado@teste.com", "abc"),
            Err(RegistrationError::InvalidPassword)
        );
        assert_eq!(
            registry.register("duplicado@teste.com", "outrasenha456"),
            Err(RegistrationError::DuplicateEmail)
        );
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut registry = UserRegistry::new();
        registry.register("user@teste.com", "senha123").unwrap();
        registry.register("User@teste.com", "senha123").unwrap();

        assert_eq!(registry.count(), 2);
        assert!(registry.find("USER@TESTE.COM").is_none());
    }

    #[test]
    fn test_find_accepts_any_string() {
        let mut registry = UserRegistry::new();
        registry.register("usuario@teste.com", "senha123").unwrap();

        assert!(registry.find("").is_none());
        assert!(registry.find("not an email").is_none());
        assert!(registry.find(" usuario@teste.com").is_none());

        let user = registry.find("usuario@teste.com").unwrap();
        assert_eq!(user.email, "usuario@teste.com");
        assert_eq!(user.password, "senha123");
    }

    #[test]
    fn test_custom_policy_applies_to_register() {
        let mut registry = UserRegistry::with_policy(PasswordPolicy {
            min_length: 8,
            require_digit: false,
        });

        assert_eq!(
            registry.register("a@b.com", "senha12"),
            Err(RegistrationError::InvalidPassword)
        );
        assert!(registry.register("a@b.com", "semnumero").is_ok());
    }
}
