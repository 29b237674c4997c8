use todo::config::LoggingConfig;
use todo::logger;

#[test]
fn test_logging_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("todo.log");
    let config = LoggingConfig::default();

    assert!(logger::dispatch(&config, &log_file, false).unwrap().is_none());
    assert!(!logger::init(&config, &log_file, false).unwrap());
    assert!(!log_file.exists());
}

#[test]
fn test_logging_enabled_creates_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("logs").join("todo.log");
    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
    };

    let dispatch = logger::dispatch(&config, &log_file, false).unwrap();
    assert!(dispatch.is_some());
    assert!(log_file.exists());
}

#[test]
fn test_verbose_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("todo.log");

    let dispatch = logger::dispatch(&LoggingConfig::default(), &log_file, true).unwrap();
    assert!(dispatch.is_some());
    assert!(!log_file.exists());
}

#[test]
fn test_format_line() {
    let line = logger::format_line(log::Level::Warn, "todo::ui", &format_args!("too small"));
    assert!(line.contains("WARN"));
    assert!(line.ends_with("todo::ui: too small"));
    assert!(line.starts_with('['));
}
