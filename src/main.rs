use clap::Parser;
use std::path::Path;
use user_registry::core::demo::DemoReport;
use user_registry::utils::{logger, validation::Validate};
use user_registry::{run_demo, CliConfig, Command, RegistryConfig, User, UserRegistry};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    match cli.command {
        Command::Demo => {
            let mut registry = UserRegistry::new();
            let report = run_demo(&mut registry);
            print_demo(&report);
        }
        Command::Load {
            config,
            json,
            strict,
        } => {
            if let Err(e) = load(&config, json, strict) {
                tracing::error!("Load failed: {} (Category: {:?})", e, e.category());
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn load(path: &Path, json: bool, strict: bool) -> user_registry::Result<()> {
    tracing::info!("Loading users from: {}", path.display());

    let config = RegistryConfig::from_file(path)?;
    config.validate()?;

    let mut registry = config.build_registry();

    let results = if strict {
        let loaded = config.try_register_users(&mut registry)?;
        tracing::info!("Loaded {} users", loaded);
        Vec::new()
    } else {
        config.register_users(&mut registry)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&registry.list_all())?);
        return Ok(());
    }

    println!("{}", config.name());
    for (email, outcome) in &results {
        let mark = if outcome.success { "✓" } else { "✗" };
        println!("   {} {}: {}", mark, email, outcome.message);
    }
    println!();
    print_history(&registry.list_all());

    Ok(())
}

fn print_demo(report: &DemoReport) {
    let rule = "=".repeat(50);
    println!("{}", rule);
    println!("User registration walkthrough");
    println!("{}", rule);

    for (i, step) in report.registrations.iter().enumerate() {
        println!("{}. {}", i + 1, step.description);
        println!("   Result: {}", step.outcome.message);
    }

    for lookup in &report.lookups {
        if lookup.found {
            println!("   ✓ Found: {}", lookup.email);
        } else {
            println!("   ✗ Not found: {}", lookup.email);
        }
    }
    println!();

    print_history(&report.history);
    println!("{}", rule);
}

fn print_history(history: &[User]) {
    println!("Registered users: {}", history.len());
    for (i, user) in history.iter().enumerate() {
        println!("   {}. {}", i + 1, user.email);
    }
}
