use crate::core::registry::UserRegistry;
use crate::domain::model::{RegistrationOutcome, User};

#[derive(Debug, Clone)]
pub struct DemoStep {
    pub description: String,
    pub outcome: RegistrationOutcome,
}

#[derive(Debug, Clone)]
pub struct Lookup {
    pub email: String,
    pub found: bool,
}

/// Everything the walkthrough did, in order, for the caller to print.
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub registrations: Vec<DemoStep>,
    pub lookups: Vec<Lookup>,
    pub history: Vec<User>,
}

const REGISTRATIONS: [(&str, &str, &str); 5] = [
    ("valid registration", "usuario@exemplo.com", "senha123"),
    ("invalid email", "email_invalido", "senha123"),
    ("invalid password", "teste@exemplo.com", "abc12"),
    ("another valid user", "admin@empresa.com", "admin123"),
    ("another valid user", "cliente@loja.com", "cliente456"),
];

const LOOKUPS: [&str; 2] = ["usuario@exemplo.com", "naoexiste@teste.com"];

/// Drives the registry through the reference walkthrough: a valid signup, an
/// invalid email, a weak password, two more signups, one hit and one miss on
/// lookup, then the full history.
pub fn run_demo(registry: &mut UserRegistry) -> DemoReport {
    tracing::info!("Starting registration walkthrough");

    let registrations = REGISTRATIONS
        .iter()
        .map(|(description, email, password)| {
            let outcome = RegistrationOutcome::from(registry.register(email, password));
            tracing::debug!("{}: {}", description, outcome.message);
            DemoStep {
                description: description.to_string(),
                outcome,
            }
        })
        .collect();

    let lookups = LOOKUPS
        .iter()
        .map(|email| Lookup {
            email: email.to_string(),
            found: registry.find(email).is_some(),
        })
        .collect();

    let history = registry.list_all();
    tracing::info!("Walkthrough finished with {} registered users", history.len());

    DemoReport {
        registrations,
        lookups,
        history,
    }
}
