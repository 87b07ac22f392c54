use std::fs;

use rustylog::{
    config::LogConfig,
    log::{log_error::LogError, log_level::LogLevel, logger::Logger},
    log_debug, log_error, log_info_tagged, log_warn,
};

/// Strips the leading `[<digits>]` timestamp from every line.
fn without_timestamps(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            let rest = line.strip_prefix('[').expect("line starts with [");
            let end = rest.find(']').expect("timestamp is closed");
            assert!(
                rest[..end].bytes().all(|b| b.is_ascii_digit()),
                "non-numeric timestamp in {line:?}"
            );
            rest[end + 1..].to_owned()
        })
        .collect()
}

// The global logger is shared by every test in this binary, so the whole
// lifecycle runs as one sequence.
#[test]
fn global_logger_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.log");
    let logger = Logger::global();

    // Writing before init is a usage error.
    assert!(matches!(
        log_error!("too early"),
        Err(LogError::Uninitialized)
    ));

    rustylog::init_with_config(
        &LogConfig::default()
            .with_log_file(&path, false)
            .with_stdout(false),
    )
    .unwrap();
    assert_eq!(logger.verbosity(), LogLevel::Info.index());

    // Below the INFO default: nothing is written.
    log_debug!("x=%d", 5).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    log_error!("y=%d", 5).unwrap();
    log_info_tagged!("NET", "up on %s:%d", "127.0.0.1", 8080).unwrap();
    log_warn!("no args, 100%").unwrap();

    assert_eq!(
        without_timestamps(&fs::read_to_string(&path).unwrap()),
        vec![
            "[ERROR]: y=5".to_owned(),
            "[INFO][NET]: up on 127.0.0.1:8080".to_owned(),
            "[WARN]: no args, 100%".to_owned(),
        ]
    );

    // A second file is refused and the first keeps its content.
    let other = dir.path().join("other.log");
    assert!(matches!(
        rustylog::init_with_file(&other, false, false),
        Err(LogError::FileAlreadyInitialized)
    ));
    assert!(!other.exists());
    assert_eq!(
        without_timestamps(&fs::read_to_string(&path).unwrap()).len(),
        3
    );

    // Repeated init keeps the threshold.
    logger.set_verbosity_level(LogLevel::Debug);
    rustylog::init();
    assert_eq!(logger.verbosity(), LogLevel::Debug.index());

    logger.close_log_file();
    assert!(!logger.has_output_file());
}
