use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use fitcheck::config::{AnalysisMode, AppConfig};
use fitcheck::internal::catalog::{CLASSIC_CATALOG, STUDIO_CATALOG};
use fitcheck::internal::notification::NotificationKind;
use fitcheck::internal::pipeline::Phase;
use fitcheck::internal::ui::app::{Action, App};

fn test_config(mode: AnalysisMode) -> AppConfig {
    AppConfig {
        analysis_mode: mode,
        // Zero-duration clock so tests never wait on real timers.
        step_hold_ms: 0,
        instant_wait_ms: 0,
        sample_seed: Some(7),
        ..AppConfig::default()
    }
}

fn temp_image(name: &str, len: usize) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&vec![0u8; len]).unwrap();
    path
}

/// Pump the action channel into the app until it reaches `target` (or the
/// timeout trips).
async fn drive_until(app: &mut App, target: Phase) {
    while app.phase != target {
        let action = tokio::time::timeout(Duration::from_secs(5), app.action_rx.recv())
            .await
            .expect("timed out waiting for pipeline progress")
            .expect("action channel closed");
        app.update(action);
    }
}

#[tokio::test]
async fn guided_run_accepts_a_png_and_shows_four_cards() {
    let path = temp_image("fitcheck_e2e_guided.png", 2 * 1024 * 1024);
    let mut app = App::with_config(test_config(AnalysisMode::Guided));

    app.update(Action::SelectFile(path.clone()));
    drive_until(&mut app, Phase::Previewing).await;

    let meta = app.preview.as_ref().expect("preview metadata");
    assert_eq!(meta.media_type, "image/png");
    assert!(app.upload.has_preview());
    assert!(
        app.upload
            .preview
            .as_deref()
            .unwrap()
            .starts_with("data:image/png;base64,")
    );

    // Guided mode waits for the analyze keypress.
    assert!(app.results.is_empty());
    app.update(Action::StartAnalysis);
    drive_until(&mut app, Phase::ShowingResults).await;

    assert_eq!(app.results.len(), 4);
    for rec in &app.results {
        assert!(STUDIO_CATALOG.iter().any(|c| c == rec));
    }

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn instant_run_auto_analyzes_and_shows_whole_catalog() {
    let path = temp_image("fitcheck_e2e_instant.jpg", 64 * 1024);
    let mut app = App::with_config(test_config(AnalysisMode::Instant));

    app.update(Action::SelectFile(path.clone()));
    drive_until(&mut app, Phase::ShowingResults).await;

    assert_eq!(app.results.len(), 6);
    assert_eq!(app.results.as_slice(), CLASSIC_CATALOG.as_slice());

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn non_image_file_is_rejected_without_preview_or_analysis() {
    let path = temp_image("fitcheck_e2e_reject.txt", 0);
    let mut app = App::with_config(test_config(AnalysisMode::Guided));

    app.update(Action::SelectFile(path.clone()));

    assert_eq!(app.phase, Phase::ImagePending);
    assert!(!app.upload.has_preview());
    assert!(app.results.is_empty());

    let n = app.notification.as_ref().expect("rejection notification");
    assert_eq!(n.kind, NotificationKind::Error);
    assert_eq!(n.message, "Please select a valid image file.");

    // Nothing was spawned, so the channel stays quiet.
    assert!(app.action_rx.try_recv().is_err());

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn oversized_image_is_rejected() {
    // A small ceiling exercises the size branch without writing 10 MiB
    // to disk.
    let mut config = test_config(AnalysisMode::Guided);
    config.max_upload_bytes = 1024;
    let mut app = App::with_config(config);

    let path = temp_image("fitcheck_e2e_too_big.png", 2048);
    app.update(Action::SelectFile(path.clone()));

    let n = app.notification.as_ref().expect("rejection notification");
    assert_eq!(n.message, "File size must be less than 10MB.");
    assert!(!app.upload.has_preview());

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn new_upload_cancels_in_flight_analysis() {
    let first = temp_image("fitcheck_e2e_cancel_a.png", 1024);
    let second = temp_image("fitcheck_e2e_cancel_b.png", 1024);

    let mut config = test_config(AnalysisMode::Guided);
    // Long holds so the first run cannot finish on its own.
    config.step_hold_ms = 60_000;
    let mut app = App::with_config(config);

    app.update(Action::SelectFile(first.clone()));
    drive_until(&mut app, Phase::Previewing).await;
    app.update(Action::StartAnalysis);
    assert_eq!(app.phase, Phase::Analyzing);

    // Second selection supersedes the run in flight.
    app.update(Action::SelectFile(second.clone()));
    drive_until(&mut app, Phase::Previewing).await;

    // Drain anything still queued; the cancelled run must not complete.
    tokio::time::sleep(Duration::from_millis(50)).await;
    while let Ok(action) = app.action_rx.try_recv() {
        app.update(action);
    }
    assert_ne!(app.phase, Phase::ShowingResults);
    assert!(app.results.is_empty());

    let _ = std::fs::remove_file(first);
    let _ = std::fs::remove_file(second);
}
