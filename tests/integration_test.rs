// Integration tests for the full login and update-check flows
use launchrs::models::{AuthOutcome, PreferenceUpdate, PromptResolution, VersionDecision};
use launchrs::settings::LaunchrsSettings;
use launchrs::testing::fixtures;
use launchrs::testing::mock::MockTransport;
use launchrs::update::preference_update;
use launchrs::{AuthService, Credentials, UpdateResolver};

#[tokio::test]
async fn test_login_flow_success_then_ban() {
    let settings = fixtures::test_settings();

    let transport = MockTransport::new().with_reply(
        "/User/authenticateUser",
        200,
        fixtures::login_success_body(),
    );
    let service = AuthService::new(&transport, &settings.server.url);
    let outcome = service
        .login(&Credentials::new("player@example.com", "secret"))
        .await;
    assert!(matches!(outcome, AuthOutcome::Success { .. }));

    // Same flow, banned account: the ban wins over everything else and
    // renders ready-to-display text.
    let transport = MockTransport::new().with_reply(
        "/User/authenticateUser",
        200,
        fixtures::login_banned_body(),
    );
    let service = AuthService::new(&transport, &settings.server.url);
    let outcome = service
        .login(&Credentials::new("player@example.com", "secret"))
        .await;
    assert_eq!(
        outcome,
        AuthOutcome::Banned {
            reason: "Cheating".to_string(),
            expires_at: Some("2026-09-01".to_string()),
        }
    );
    let message = outcome.user_message(&settings.server.name);
    assert!(message.contains("You got banned on World Revival."));
    assert!(message.contains("Ban expires 2026-09-01"));
}

#[tokio::test]
async fn test_login_flow_tampering_and_fallback_page() {
    let settings = fixtures::test_settings();

    let transport = MockTransport::new().with_reply(
        "/User/authenticateUser",
        200,
        fixtures::login_tampering_body(),
    );
    let service = AuthService::new(&transport, &settings.server.url);
    let outcome = service
        .login(&Credentials::new("player@example.com", "secret"))
        .await;
    assert_eq!(outcome, AuthOutcome::TamperingDetected);

    let transport = MockTransport::new().with_reply(
        "/User/authenticateUser",
        502,
        fixtures::login_fallback_page(),
    );
    let service = AuthService::new(&transport, &settings.server.url);
    let outcome = service
        .login(&Credentials::new("player@example.com", "secret"))
        .await;
    assert_eq!(
        outcome,
        AuthOutcome::ServerError {
            code: 502,
            message: "Bad Gateway".to_string(),
        }
    );
}

#[tokio::test]
async fn test_update_flow_primary_source() {
    let settings = fixtures::test_settings();
    let transport = MockTransport::new().with_reply(
        "update.php",
        200,
        &fixtures::update_metadata_body("2.0"),
    );

    let resolver = UpdateResolver::new(
        &transport,
        &settings.update.status_url,
        &settings.update.release_url,
    );
    let check = resolver.check("1.9", settings.ignored_version()).await;

    assert_eq!(
        check.decision,
        VersionDecision::UpdateAvailable {
            latest_version: "2.0".to_string(),
        }
    );
    assert!(check.should_prompt);
}

#[tokio::test]
async fn test_update_flow_falls_back_sequentially() {
    let settings = fixtures::test_settings();
    let transport =
        MockTransport::new().with_reply("releases/latest", 200, &fixtures::release_body("v3"));

    let resolver = UpdateResolver::new(
        &transport,
        &settings.update.status_url,
        &settings.update.release_url,
    );
    let check = resolver.check("1.0", settings.ignored_version()).await;

    assert_eq!(
        check.decision,
        VersionDecision::UpdateAvailable {
            latest_version: "v3".to_string(),
        }
    );

    // The secondary probe must come after the failed primary probe, and
    // the primary metadata fetch must never happen.
    let requests = transport.requests();
    assert!(requests[0].contains("update.php"));
    assert!(requests[1].contains("releases/latest"));
    assert_eq!(
        requests
            .iter()
            .filter(|url| url.contains("update.php"))
            .count(),
        1
    );
}

#[tokio::test]
async fn test_update_flow_dismiss_and_remember_round_trip() {
    let settings = fixtures::test_settings();
    let transport = MockTransport::new().with_reply(
        "update.php",
        200,
        &fixtures::update_metadata_body("2.0"),
    );

    let resolver = UpdateResolver::new(
        &transport,
        &settings.update.status_url,
        &settings.update.release_url,
    );
    let check = resolver.check("1.9", settings.ignored_version()).await;
    assert!(check.should_prompt);

    // User picks "dismiss and remember": the proposed write lands in the
    // settings store and the next check no longer prompts.
    let VersionDecision::UpdateAvailable { latest_version } = &check.decision else {
        panic!("expected an available update");
    };
    let proposed = preference_update(PromptResolution::DismissAndRemember, latest_version);
    assert_eq!(proposed, PreferenceUpdate::Remember("2.0".to_string()));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Settings.toml");
    let mut settings = settings;
    settings.apply_preference_update(&proposed);
    settings.store(&path).unwrap();

    let reloaded = LaunchrsSettings::load_from(&path).unwrap();
    let check = resolver.check("1.9", reloaded.ignored_version()).await;
    assert_eq!(
        check.decision,
        VersionDecision::UpdateAvailable {
            latest_version: "2.0".to_string(),
        }
    );
    assert!(!check.should_prompt);
}

#[tokio::test]
async fn test_update_flow_both_sources_down() {
    let settings = fixtures::test_settings();
    let transport = MockTransport::new();

    let resolver = UpdateResolver::new(
        &transport,
        &settings.update.status_url,
        &settings.update.release_url,
    );
    let check = resolver.check("1.0", settings.ignored_version()).await;

    // Distinct terminal state; the launcher must not pretend the build is
    // current when no source answered.
    assert_eq!(check.decision, VersionDecision::BackendError);
    assert!(!check.should_prompt);
}
