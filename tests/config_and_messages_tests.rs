use chrono::{TimeZone, Utc};
use std::io::Write;
use time_blocks::http::{TimeBlockEnvelope, TimeBlockSubmission};
use time_blocks::Config;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_load_full() {
    let file = write_config(
        r#"
        [service]
        name = "tracker"

        [server]
        time_block_url = "http://localhost:4000/time_blocks"
        timeout_ms = 2500

        [page]
        csrf_token = "tok"
        "#,
    );

    let cfg = Config::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(cfg.service.name, "tracker");
    assert_eq!(cfg.server.time_block_url, "http://localhost:4000/time_blocks");
    assert_eq!(cfg.server.timeout().as_millis(), 2500);
    assert_eq!(cfg.page.csrf_token.as_deref(), Some("tok"));
}

#[test]
fn test_config_defaults() {
    let file = write_config(
        r#"
        [server]
        time_block_url = "http://localhost:4000/time_blocks"
        "#,
    );

    let cfg = Config::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(cfg.service.name, "time-blocks");
    assert_eq!(cfg.server.timeout_ms, 10_000);
    assert!(cfg.page.csrf_token.is_none());
}

#[test]
fn test_config_rejects_empty_url() {
    let file = write_config(
        r#"
        [server]
        time_block_url = "  "
        "#,
    );

    assert!(Config::load(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_url_override_beats_file() {
    let file = write_config(
        r#"
        [server]
        time_block_url = "http://localhost:4000/time_blocks"
        "#,
    );

    let cfg = Config::load_with_url(
        file.path().to_str().unwrap(),
        Some("http://staging:4000/time_blocks"),
    )
    .unwrap();
    assert_eq!(cfg.server.time_block_url, "http://staging:4000/time_blocks");
}

#[test]
fn test_url_override_cannot_be_empty() {
    let file = write_config(
        r#"
        [server]
        time_block_url = "http://localhost:4000/time_blocks"
        "#,
    );

    assert!(Config::load_with_url(file.path().to_str().unwrap(), Some("")).is_err());
}

#[test]
fn test_missing_explicit_config_file_is_an_error() {
    let result = Config::load_with_url("/nonexistent/typo", Some("http://localhost:4000/time_blocks"));
    assert!(result.is_err());
}

#[test]
fn test_timestamps_match_browser_json() {
    let envelope = TimeBlockEnvelope::from(TimeBlockSubmission {
        task_id: "42".to_string(),
        start: Utc.with_ymd_and_hms(2019, 3, 1, 9, 30, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2019, 3, 1, 9, 30, 0).unwrap()
            + chrono::Duration::milliseconds(1_234_567),
    });

    let json = serde_json::to_string(&envelope).unwrap();
    assert_eq!(
        json,
        r#"{"time_block":{"task_id":"42","start":"2019-03-01T09:30:00.000Z","end":"2019-03-01T09:50:34.567Z"}}"#
    );
}

#[test]
fn test_submission_accepts_offset_timestamps() {
    let json = r#"{"time_block":{"task_id":"7","start":"2019-03-01T10:30:00.000+01:00","end":"2019-03-01T09:45:00Z"}}"#;

    let envelope: TimeBlockEnvelope = serde_json::from_str(json).unwrap();
    assert_eq!(
        envelope.time_block.start,
        Utc.with_ymd_and_hms(2019, 3, 1, 9, 30, 0).unwrap()
    );
    assert_eq!(
        envelope.time_block.end,
        Utc.with_ymd_and_hms(2019, 3, 1, 9, 45, 0).unwrap()
    );
}
