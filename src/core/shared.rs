use crate::core::registry::UserRegistry;
use crate::domain::model::User;
use crate::utils::error::RegistrationError;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle to one `UserRegistry` for use from several threads.
///
/// Each call takes a single exclusive lock for its whole duration, so a
/// registration's checks and insert happen without interleaving.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<UserRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: UserRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    // The registry never holds a half-applied registration, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, UserRegistry> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn register(
        &self,
        email: &str,
        password: &str,
    ) -> std::result::Result<(), RegistrationError> {
        self.lock().register(email, password)
    }

    pub fn find(&self, email: &str) -> Option<User> {
        self.lock().find(email).cloned()
    }

    pub fn list_all(&self) -> Vec<User> {
        self.lock().list_all()
    }

    pub fn count(&self) -> usize {
        self.lock().count()
    }
}

impl From<UserRegistry> for SharedRegistry {
    fn from(registry: UserRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_duplicate_registration() {
        let shared = SharedRegistry::default();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.register("same@teste.com", "senha123"))
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.is_ok())
            .count();

        assert_eq!(successes, 1);
        assert_eq!(shared.count(), 1);
    }

    #[test]
    fn test_concurrent_distinct_registrations() {
        let shared = SharedRegistry::new(UserRegistry::new());

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared
                        .register(&format!("user{}@teste.com", i), "senha123")
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.count(), 10);
        assert_eq!(shared.list_all().len(), 10);
        assert!(shared.find("user7@teste.com").is_some());
        assert!(shared.find("user10@teste.com").is_none());
    }
}
