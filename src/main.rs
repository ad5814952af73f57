//! PassVault — a personal password manager with identity-scoped live sync.
//!
//! Entry point: runs an interactive console demo of each component.

use passvault::app::App;
use passvault::services::auth_provider::AuthProviderTrait;
use passvault::services::strength_advisor::StrengthAdvisor;
use passvault::store::local_vault::LocalVault;
use passvault::types::credential::{CredentialDraft, PasswordGenOptions};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!();
    println!("PassVault v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    demo_auth_and_sync();
    demo_generator();
    demo_advisor_config();
    demo_local_vault();

    println!();
    println!("All components demonstrated.");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_auth_and_sync() {
    section("Authentication + Credential Sync");

    let mut app = App::new();

    let identity = app
        .auth
        .sign_up("demo@example.com", "hunter2-but-longer")
        .expect("sign-up");
    println!("  Signed up as {} (id {})", identity.email, identity.id);

    app.refresh_identity();
    println!("  Hook ready: {}, records: {}", app.sync.ready(), app.sync.records().len());

    let draft = CredentialDraft::from_form("https://github.com", "demo-user", "s3cr3t!");
    draft.validate().expect("draft validates");
    let id = app.sync.add(&draft).expect("add");
    app.refresh_identity();
    println!(
        "  Added record {} → list now holds {} entr{}",
        id,
        app.sync.records().len(),
        if app.sync.records().len() == 1 { "y" } else { "ies" }
    );

    for record in app.sync.filter_records("github") {
        println!("  Match: {} ({})", record.site_label, record.username);
    }

    app.auth.sign_out();
    app.refresh_identity();
    println!(
        "  Signed out → records: {}, ready: {}",
        app.sync.records().len(),
        app.sync.ready()
    );
    println!("  ✓ Auth + sync OK");
}

fn demo_generator() {
    use passvault::services::password_generator::PasswordGenerator;
    section("Password Generator");

    let generator = PasswordGenerator::new();
    let options = PasswordGenOptions::default();
    let password = generator.generate(&options).expect("generate");
    println!("  Generated ({} chars): {}", password.len(), password);
    println!("  ✓ Generator OK");
}

fn demo_advisor_config() {
    use passvault::types::advisor::AdvisorConfig;
    section("Strength Advisor");

    let advisor = StrengthAdvisor::new(AdvisorConfig::default());
    println!(
        "  Endpoint: {} (model {})",
        advisor.config().api_endpoint,
        advisor.config().model
    );
    println!("  Set an API key in AdvisorConfig to run a live analysis.");
    println!("  ✓ Advisor configured");
}

fn demo_local_vault() {
    section("Local Vault (legacy variant)");

    let vault = LocalVault::new(None);
    match vault.load() {
        Ok(records) => println!(
            "  {} → {} stored record(s)",
            vault.vault_path(),
            records.len()
        ),
        Err(e) => println!("  Vault unreadable: {}", e),
    }
    println!("  ✓ Local vault OK");
}
