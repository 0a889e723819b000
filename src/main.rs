#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![deny(warnings)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use launchrs::auth::AuthService;
use launchrs::models::{Credentials, VersionDecision};
use launchrs::server_info::fetch_server_information;
use launchrs::settings::LaunchrsSettings;
use launchrs::transport::ReqwestTransport;
use launchrs::update::UpdateResolver;

/// Headless run of the launcher's network layer: server info, update
/// check, and (when credentials are present in the environment) a login.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from Settings.toml and environment variables.
    // This also initializes the logger.
    let settings = LaunchrsSettings::load().context("Failed to load settings")?;

    let transport = ReqwestTransport::new(settings.http.timeout_secs, &settings.user_agent())
        .context("Failed to build HTTP transport")?;

    println!("launchrs v{}", launchrs::VERSION);

    match fetch_server_information(&transport, &settings.server.url).await {
        Ok(info) => {
            let name = info.server_name.unwrap_or_else(|| settings.server.name.clone());
            println!("Server: {name} ({}/{} online)", info.online_players, info.max_players);
            if let Some(message) = info.message {
                println!("{message}");
            }
        }
        Err(e) => println!("Server information unavailable: {e}"),
    }

    run_update_check(&transport, &settings).await;

    if let (Ok(email), Ok(password)) = (
        std::env::var("LAUNCHER_EMAIL"),
        std::env::var("LAUNCHER_PASSWORD"),
    ) {
        let service = AuthService::new(&transport, &settings.server.url);
        let outcome = service.login(&Credentials::new(&email, &password)).await;
        println!("{}", outcome.user_message(&settings.server.name));
    }

    Ok(())
}

async fn run_update_check(transport: &ReqwestTransport, settings: &LaunchrsSettings) {
    let resolver = UpdateResolver::new(
        transport,
        &settings.update.status_url,
        &settings.update.release_url,
    );
    let check = resolver
        .check(launchrs::VERSION, settings.ignored_version())
        .await;

    match &check.decision {
        VersionDecision::InsiderBuild => println!("Launcher Status:\n - Insider Build"),
        VersionDecision::UpToDate => println!("Launcher Status:\n - Current Version"),
        VersionDecision::UpdateAvailable { latest_version } => {
            println!("Launcher Status:\n - Update Available");
            println!("New Version: {latest_version}");
            if !check.should_prompt {
                println!("(prompt suppressed: this version was previously ignored)");
            }
        }
        VersionDecision::BackendError => println!("Launcher Status:\n - Backend Error"),
    }
    println!("Version: v{}", launchrs::VERSION);
}
