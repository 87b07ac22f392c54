use crate::{
    config::LogConfig,
    log::{
        log_error::LogError,
        log_format::render,
        log_level::{ANSI_RESET, LogLevel},
        log_msg::LogMsg,
        log_sink::LogSink,
        verbosity::{UNINITIALIZED, level_from_name, resolve_initial_threshold},
    },
};

use std::{
    fmt::Display,
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
    sync::{
        Mutex, MutexGuard, OnceLock, PoisonError,
        atomic::{AtomicBool, AtomicI32, Ordering},
    },
};

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Leveled logger writing to stdout and, optionally, one log file.
///
/// # Threshold
///
/// Records below the verbosity threshold are dropped silently. A logger whose
/// threshold was never set (see [`init`](Self::init) and the `set_verbosity*`
/// family) refuses to write and returns [`LogError::Uninitialized`] instead of
/// silently discarding output.
///
/// # Concurrency
///
/// Message rendering and the threshold check run without locking. The
/// console write and the file write of one record happen under a single
/// mutex, so concurrent records never interleave and lines appear in the
/// order threads acquire it.
///
/// The setters are meant for startup configuration; they are not ordered
/// against each other or against records already in flight.
pub struct Logger {
    threshold: AtomicI32,
    to_stdout: AtomicBool,
    sinks: Mutex<Sinks>,
}

struct Sinks {
    console: Box<dyn Write + Send>,
    file: Option<File>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// A fresh, uninitialized logger writing to process stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(Box::new(io::stdout()))
    }

    /// A fresh, uninitialized logger whose console output goes to `console`.
    #[must_use]
    pub fn with_console(console: Box<dyn Write + Send>) -> Self {
        Self {
            threshold: AtomicI32::new(UNINITIALIZED),
            to_stdout: AtomicBool::new(true),
            sinks: Mutex::new(Sinks {
                console,
                file: None,
            }),
        }
    }

    /// The process-wide logger, created on first use.
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(Logger::new)
    }

    /// Resolves the threshold if it has not been set yet.
    ///
    /// Order: a threshold already set stays, then `config.verbosity`, then
    /// [`INFO`](LogLevel::Info). Calling it again is a no-op.
    pub fn init(&self, config: &LogConfig) {
        let current = self.verbosity();
        let resolved = resolve_initial_threshold(current, config.verbosity.as_deref());
        self.threshold.store(resolved, Ordering::Relaxed);
    }

    /// Opens `path` as the log file, truncating it unless `append` is set.
    ///
    /// # Errors
    ///
    /// [`LogError::FileAlreadyInitialized`] if a file is already open (that
    /// file keeps receiving records), or [`LogError::Io`] if opening fails.
    pub fn set_output_file<P: AsRef<Path>>(&self, path: P, append: bool) -> Result<(), LogError> {
        let mut sinks = self.lock_sinks();
        if sinks.file.is_some() {
            return Err(LogError::FileAlreadyInitialized);
        }

        let mut opts = OpenOptions::new();
        opts.create(true);
        if append {
            opts.append(true);
        } else {
            opts.write(true).truncate(true);
        }
        sinks.file = Some(opts.open(path)?);
        Ok(())
    }

    #[must_use]
    pub fn has_output_file(&self) -> bool {
        self.lock_sinks().file.is_some()
    }

    /// Syncs and closes the log file. No-op without one.
    ///
    /// Every record is already flushed when written, so a failing sync at
    /// close has nothing left to lose; use [`try_close_log_file`](Self::try_close_log_file)
    /// to see the error.
    pub fn close_log_file(&self) {
        let _ = self.try_close_log_file();
    }

    /// Like [`close_log_file`](Self::close_log_file), reporting a failed sync.
    /// The file is closed either way.
    pub fn try_close_log_file(&self) -> Result<(), LogError> {
        match self.lock_sinks().file.take() {
            Some(file) => file.sync_all().map_err(LogError::from),
            None => Ok(()),
        }
    }

    /// Turns console output on or off; the log file is unaffected.
    pub fn set_stdout_enabled(&self, enabled: bool) {
        self.to_stdout.store(enabled, Ordering::Relaxed);
    }

    #[must_use]
    pub fn stdout_enabled(&self) -> bool {
        self.to_stdout.load(Ordering::Relaxed)
    }

    /// Overwrites the threshold. Any value above [`LogLevel::Assert`]
    /// filters out everything.
    ///
    /// # Errors
    ///
    /// [`LogError::InvalidVerbosity`] for negative values; the threshold is
    /// left as it was.
    pub fn set_verbosity(&self, level: i32) -> Result<(), LogError> {
        if level < 0 {
            return Err(LogError::InvalidVerbosity(level.to_string()));
        }
        self.threshold.store(level, Ordering::Relaxed);
        Ok(())
    }

    pub fn set_verbosity_level(&self, level: LogLevel) {
        self.threshold.store(level.index(), Ordering::Relaxed);
    }

    /// Sets the threshold from a level name or single digit.
    ///
    /// # Errors
    ///
    /// [`LogError::InvalidVerbosity`] for unknown names; the threshold is
    /// left as it was.
    pub fn set_verbosity_name(&self, name: &str) -> Result<(), LogError> {
        match level_from_name(name) {
            UNINITIALIZED => Err(LogError::InvalidVerbosity(name.to_owned())),
            level => self.set_verbosity(level),
        }
    }

    /// Current threshold, `-1` if never initialized.
    #[must_use]
    pub fn verbosity(&self) -> i32 {
        self.threshold.load(Ordering::Relaxed)
    }

    /// Whether a record at `level` would be written right now.
    ///
    /// # Errors
    ///
    /// [`LogError::Uninitialized`] if no threshold was set.
    pub fn enabled(&self, level: LogLevel) -> Result<bool, LogError> {
        let threshold = self.verbosity();
        if threshold < 0 {
            return Err(LogError::Uninitialized);
        }
        Ok(level.index() >= threshold)
    }

    /// Renders `format` with `args` and writes `[ts][LEVEL]: message`.
    ///
    /// Pass an empty `args` slice to log `format` verbatim.
    pub fn log(&self, level: LogLevel, format: &str, args: &[&dyn Display]) -> Result<(), LogError> {
        if !self.enabled(level)? {
            return Ok(());
        }
        let text = render(format, args);
        self.write_log(level, &LogMsg::new(level, None, &text).to_string())
    }

    /// Like [`log`](Self::log), written as `[ts][LEVEL][tag]: message`.
    pub fn log_tagged(
        &self,
        level: LogLevel,
        tag: &str,
        format: &str,
        args: &[&dyn Display],
    ) -> Result<(), LogError> {
        if !self.enabled(level)? {
            return Ok(());
        }
        let text = render(format, args);
        self.write_log(level, &LogMsg::new(level, Some(tag), &text).to_string())
    }

    /// Writes one fully formatted line to the enabled sinks.
    ///
    /// The console copy is wrapped in the level's color; [`LogLevel::Assert`]
    /// never reaches the console. The file copy is the literal line, flushed
    /// before returning.
    ///
    /// # Errors
    ///
    /// [`LogError::Uninitialized`] if no threshold was set, [`LogError::Io`]
    /// if a sink write fails. A failing console does not stop the file write.
    pub fn write_log(&self, level: LogLevel, line: &str) -> Result<(), LogError> {
        if !self.enabled(level)? {
            return Ok(());
        }

        let mut sinks = self.lock_sinks();

        let mut console_result = Ok(());
        if self.stdout_enabled()
            && let Some(color) = level.console_color()
        {
            console_result = write!(sinks.console, "{color}{line}{ANSI_RESET}")
                .and_then(|()| sinks.console.flush());
        }

        if let Some(file) = sinks.file.as_mut() {
            file.write_all(line.as_bytes())?;
            file.flush()?;
        }

        console_result.map_err(LogError::from)
    }

    /// A writer that panicked mid-record leaves the sinks usable.
    fn lock_sinks(&self) -> MutexGuard<'_, Sinks> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for Logger {
    fn log_line(&self, level: LogLevel, tag: Option<&str>, msg: &str) -> Result<(), LogError> {
        match tag {
            Some(tag) => self.log_tagged(level, tag, msg, &[]),
            None => self.log(level, msg, &[]),
        }
    }

    fn close(&self) {
        self.close_log_file();
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close_log_file();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use rand::Rng;
    use std::{fs, sync::Arc};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured() -> (Logger, Capture) {
        let cap = Capture::default();
        (Logger::with_console(Box::new(cap.clone())), cap)
    }

    /// Strips `[digits]` from the start of a line.
    fn strip_ts(line: &str) -> &str {
        let rest = line.strip_prefix('[').expect("line starts with [");
        let end = rest.find(']').expect("timestamp is closed");
        assert!(rest[..end].bytes().all(|b| b.is_ascii_digit()), "{line}");
        &rest[end + 1..]
    }

    #[test]
    fn starts_uninitialized_and_refuses_to_write() {
        let (logger, cap) = captured();
        assert_eq!(logger.verbosity(), -1);
        let err = logger.log(LogLevel::Error, "boom", &[]).unwrap_err();
        assert!(matches!(err, LogError::Uninitialized));
        assert!(cap.text().is_empty());
    }

    #[test]
    fn init_defaults_to_info_and_is_idempotent() {
        let (logger, _) = captured();
        logger.init(&LogConfig::default());
        assert_eq!(logger.verbosity(), LogLevel::Info.index());

        logger.init(&LogConfig::default().with_verbosity("ERROR"));
        assert_eq!(logger.verbosity(), LogLevel::Info.index());
    }

    #[test]
    fn init_takes_injected_override() {
        let (logger, _) = captured();
        logger.init(&LogConfig::default().with_verbosity("DANGER"));
        assert_eq!(logger.verbosity(), 4);
    }

    #[test]
    fn init_keeps_debug_threshold() {
        let (logger, _) = captured();
        logger.set_verbosity_level(LogLevel::Debug);
        logger.init(&LogConfig::default().with_verbosity("ERROR"));
        assert_eq!(logger.verbosity(), 0);
    }

    #[test]
    fn set_verbosity_name_accepts_names_and_digits() {
        let (logger, _) = captured();
        logger.set_verbosity_name("WARN").unwrap();
        assert_eq!(logger.verbosity(), 3);
        logger.set_verbosity_name("5").unwrap();
        assert_eq!(logger.verbosity(), 5);
    }

    #[test]
    fn unknown_name_keeps_ready_threshold() {
        let (logger, cap) = captured();
        logger.set_verbosity_level(LogLevel::Info);

        let err = logger.set_verbosity_name("verbose").unwrap_err();
        assert!(matches!(err, LogError::InvalidVerbosity(ref n) if n == "verbose"));
        assert_eq!(logger.verbosity(), LogLevel::Info.index());

        logger.log(LogLevel::Error, "x", &[]).unwrap();
        assert!(cap.text().contains("[ERROR]: x\n"));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let (logger, _) = captured();
        logger.set_verbosity_level(LogLevel::Warn);
        assert!(matches!(
            logger.set_verbosity(-1),
            Err(LogError::InvalidVerbosity(_))
        ));
        assert_eq!(logger.verbosity(), LogLevel::Warn.index());
    }

    #[test]
    fn unknown_name_on_fresh_logger_stays_uninitialized() {
        let (logger, _) = captured();
        assert!(logger.set_verbosity_name("12").is_err());
        assert_eq!(logger.verbosity(), -1);
    }

    #[test]
    fn console_line_is_colored_and_reset() {
        let (logger, cap) = captured();
        logger.set_verbosity_level(LogLevel::Debug);
        logger.log(LogLevel::Warn, "x=%d", &[&5]).unwrap();

        let out = cap.text();
        let body = out
            .strip_prefix("\x1b[33m")
            .and_then(|s| s.strip_suffix(ANSI_RESET))
            .expect("yellow prefix and reset suffix");
        assert_eq!(strip_ts(body), "[WARN]: x=5\n");
    }

    #[test]
    fn tagged_line_carries_tag() {
        let (logger, cap) = captured();
        logger.set_verbosity_level(LogLevel::Debug);
        logger
            .log_tagged(LogLevel::Debug, "MYTAG", "%d %s", &[&9, &"debug"])
            .unwrap();

        let out = cap.text();
        let body = out.strip_prefix("\x1b[36m").unwrap();
        assert!(strip_ts(body).starts_with("[DEBUG][MYTAG]: 9 debug\n"), "{out:?}");
    }

    #[test]
    fn zero_arg_log_keeps_percent_signs() {
        let (logger, cap) = captured();
        logger.set_verbosity_level(LogLevel::Debug);
        logger.log(LogLevel::Info, "100% done %d", &[]).unwrap();
        assert!(cap.text().contains("[INFO]: 100% done %d\n"));
    }

    #[test]
    fn assert_level_never_reaches_console() {
        let (logger, cap) = captured();
        logger.set_verbosity_level(LogLevel::Debug);
        logger.log(LogLevel::Assert, "hidden", &[]).unwrap();
        assert!(cap.text().is_empty());
    }

    #[test]
    fn stdout_toggle_silences_console() {
        let (logger, cap) = captured();
        logger.set_verbosity_level(LogLevel::Debug);
        logger.set_stdout_enabled(false);
        logger.log(LogLevel::Error, "quiet", &[]).unwrap();
        assert!(!logger.stdout_enabled());
        assert!(cap.text().is_empty());
    }

    #[test]
    fn records_below_threshold_produce_no_bytes() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let threshold = rng.gen_range(0..=6);
            let level = LogLevel::ALL[rng.gen_range(0..LogLevel::ALL.len())];

            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("sweep.log");
            let (logger, cap) = captured();
            logger.set_verbosity(threshold).unwrap();
            logger.set_output_file(&path, false).unwrap();
            logger.log(level, "m", &[]).unwrap();
            logger.close_log_file();

            let file = fs::read_to_string(&path).unwrap();
            let written = level.index() >= threshold;
            assert_eq!(!file.is_empty(), written, "{level} vs {threshold}");
            let console_expected = written && level != LogLevel::Assert;
            assert_eq!(!cap.text().is_empty(), console_expected, "{level} vs {threshold}");
        }
    }

    #[test]
    fn threshold_above_assert_drops_everything() {
        let (logger, cap) = captured();
        logger.set_verbosity_name("9").unwrap();
        for level in LogLevel::ALL {
            logger.log(level, "x", &[]).unwrap();
        }
        assert!(cap.text().is_empty());
    }

    #[test]
    fn file_gets_literal_line_without_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.log");
        let (logger, _) = captured();
        logger.set_output_file(&path, false).unwrap();
        logger.init(&LogConfig::default());

        logger.log(LogLevel::Debug, "x=%d", &[&5]).unwrap();
        logger.log(LogLevel::Error, "y=%d", &[&5]).unwrap();

        let file = fs::read_to_string(&path).unwrap();
        assert_eq!(strip_ts(&file), "[ERROR]: y=5\n");
    }

    #[test]
    fn second_output_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.log");
        let second = dir.path().join("second.log");
        let (logger, _) = captured();
        logger.set_verbosity_level(LogLevel::Info);

        logger.set_output_file(&first, false).unwrap();
        let err = logger.set_output_file(&second, false).unwrap_err();
        assert!(matches!(err, LogError::FileAlreadyInitialized));
        assert!(!second.exists());

        logger.log(LogLevel::Info, "still here", &[]).unwrap();
        assert!(fs::read_to_string(&first).unwrap().contains("still here"));
    }

    #[test]
    fn append_mode_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("append.log");
        fs::write(&path, "previous\n").unwrap();

        let (logger, _) = captured();
        logger.set_verbosity_level(LogLevel::Info);
        logger.set_output_file(&path, true).unwrap();
        logger.log(LogLevel::Info, "next", &[]).unwrap();

        let file = fs::read_to_string(&path).unwrap();
        assert!(file.starts_with("previous\n"));
        assert!(file.ends_with("[INFO]: next\n"));
    }

    #[test]
    fn truncate_mode_discards_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trunc.log");
        fs::write(&path, "previous\n").unwrap();

        let (logger, _) = captured();
        logger.set_verbosity_level(LogLevel::Info);
        logger.set_output_file(&path, false).unwrap();
        logger.log(LogLevel::Info, "fresh", &[]).unwrap();

        let file = fs::read_to_string(&path).unwrap();
        assert!(!file.contains("previous"));
    }

    #[test]
    fn try_close_syncs_and_reports_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sync.log");
        let (logger, _) = captured();
        logger.set_verbosity_level(LogLevel::Info);
        logger.set_output_file(&path, false).unwrap();
        logger.log(LogLevel::Info, "durable", &[]).unwrap();

        logger.try_close_log_file().unwrap();
        assert!(!logger.has_output_file());
        assert!(fs::read_to_string(&path).unwrap().ends_with("[INFO]: durable\n"));
        // Closing again is a no-op.
        logger.try_close_log_file().unwrap();
    }

    #[test]
    fn close_allows_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let (logger, _) = captured();
        logger.set_output_file(dir.path().join("a.log"), false).unwrap();
        assert!(logger.has_output_file());
        logger.close_log_file();
        assert!(!logger.has_output_file());
        logger.set_output_file(dir.path().join("b.log"), false).unwrap();
    }

    #[test]
    fn open_failure_is_reported() {
        let (logger, _) = captured();
        let err = logger
            .set_output_file("/nonexistent-dir/for/sure/x.log", false)
            .unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
        assert!(!logger.has_output_file());
    }
}
