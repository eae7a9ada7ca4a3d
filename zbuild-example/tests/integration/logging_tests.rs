use crate::common::{assert_contains, init_test_logging, run_example};

const EXPECTED_STDOUT_TAIL: &str = "Arguments:\n  [1]: one\n10 + 20 = 30\n";

#[test]
fn test_debug_logging_goes_to_stderr_only() {
    init_test_logging();
    crate::test_log!("TEST START: test_debug_logging_goes_to_stderr_only");

    let run = run_example(&["one"], &[("ZBUILD_LOG_LEVEL", "debug")]);

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.ends_with(EXPECTED_STDOUT_TAIL));
    assert_contains(&run.stderr, "demo runner finished");
    assert_contains(&run.stderr, "debug (from ZBUILD_LOG_LEVEL)");
    assert_contains(&run.stderr, "text (default)");
    crate::test_log!("TEST PASS: test_debug_logging_goes_to_stderr_only");
}

#[test]
fn test_verbose_enables_debug() {
    init_test_logging();

    let run = run_example(&["one"], &[("ZBUILD_VERBOSE", "yes")]);

    assert_eq!(run.code, Some(0));
    assert_contains(&run.stderr, "demo runner starting");
}

#[test]
fn test_json_log_format() {
    init_test_logging();
    crate::test_log!("TEST START: test_json_log_format");

    let run = run_example(
        &["one"],
        &[("ZBUILD_LOG_LEVEL", "debug"), ("ZBUILD_LOG_FORMAT", "json")],
    );

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.ends_with(EXPECTED_STDOUT_TAIL));
    let events: Vec<serde_json::Value> = run
        .stderr
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("stderr line should be JSON"))
        .collect();
    assert!(!events.is_empty());
    assert!(events.iter().any(|event| {
        event["fields"]["message"] == "demo runner finished" && event["fields"]["sum"] == 30
    }));
    crate::test_log!("TEST PASS: test_json_log_format");
}

#[test]
fn test_invalid_settings_warn_but_succeed() {
    init_test_logging();

    let run = run_example(
        &["one"],
        &[("ZBUILD_LOG_LEVEL", "chatty"), ("ZBUILD_LOG_FORMAT", "yaml")],
    );

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.ends_with(EXPECTED_STDOUT_TAIL));
    assert_contains(&run.stderr, "ZBUILD_LOG_LEVEL");
    assert_contains(&run.stderr, "ZBUILD_LOG_FORMAT");
}

#[test]
fn test_log_file_receives_events() {
    init_test_logging();
    crate::test_log!("TEST START: test_log_file_receives_events");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let log_path = dir.path().join("logs").join("zbuild.log");
    let log_path_str = log_path.to_string_lossy().into_owned();

    let run = run_example(
        &["one"],
        &[("ZBUILD_LOG_LEVEL", "debug"), ("ZBUILD_LOG_FILE", &log_path_str)],
    );

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.ends_with(EXPECTED_STDOUT_TAIL));
    let contents = std::fs::read_to_string(&log_path).expect("Failed to read log file");
    assert_contains(&contents, "demo runner finished");
    crate::test_log!("TEST PASS: test_log_file_receives_events");
}

#[test]
fn test_unusable_log_file_is_fail_open() {
    init_test_logging();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").expect("Failed to write blocker file");
    let log_path = blocker.join("zbuild.log");
    let log_path_str = log_path.to_string_lossy().into_owned();

    let run = run_example(&["one"], &[("ZBUILD_LOG_FILE", &log_path_str)]);

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.ends_with(EXPECTED_STDOUT_TAIL));
    assert_contains(&run.stderr, "logging disabled");
}
