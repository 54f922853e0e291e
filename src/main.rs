//! PassVault console client.
//!
//! Entry point: signs in with credentials from the environment when
//! provided and prints the vault with its strength indicators. Without
//! credentials, runs an offline demonstration of the heuristic scorer.

use passvault::app::App;
use passvault::config::Config;
use passvault::services::heuristic_scorer;
use passvault::types::strength::Provenance;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    match (config.email.clone(), config.password.clone()) {
        (Some(email), Some(password)) => run_session(&config, &email, &password).await,
        _ => demo_heuristic(),
    }
}

async fn run_session(config: &Config, email: &str, password: &str) {
    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(err) => {
            error!("Client setup failed: {err}");
            return;
        }
    };

    if let Err(err) = app.login(email, password).await {
        error!("Login failed: {err}");
        return;
    }

    if let Err(err) = app.refresh_list().await {
        error!("Could not load the vault: {err}");
        return;
    }

    if app.list.is_empty() {
        println!("No passwords saved yet.");
        return;
    }

    println!("{:<20} {:<20} {:<10} strength", "service", "username", "secret");
    for credential in app.list.credentials() {
        let strength = app
            .list
            .strength_of(&credential.id)
            .map(|s| {
                let source = match s.provenance {
                    Provenance::Remote => "remote",
                    Provenance::Heuristic => "local",
                };
                format!("{} ({:.0}%, {})", s.label, s.percent, source)
            })
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<20} {:<20} {:<10} {}",
            credential.service, credential.username, "••••••••", strength
        );
    }
}

fn demo_heuristic() {
    println!(
        "PassVault v{} — offline strength demo (set PASSVAULT_EMAIL and PASSVAULT_PASSWORD to connect)",
        env!("CARGO_PKG_VERSION")
    );
    println!();

    for password in ["abc", "password", "Password1", "Abc123!@", "correct horse battery staple"] {
        let result = heuristic_scorer::evaluate(password);
        println!(
            "{:<30} {:<12} {:>4.0}%",
            password, result.label, result.percent
        );
    }
}
