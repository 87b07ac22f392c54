use std::{env, process};

use rustylog::{
    config::LogConfig,
    log::{log_error::LogError, log_level::LogLevel, logger::Logger},
    log_assert, log_danger, log_danger_tagged, log_debug, log_debug_tagged, log_error,
    log_error_tagged, log_info, log_info_tagged, log_success, log_success_tagged, log_warn,
    log_warn_tagged,
};

fn main() {
    // --- Parse CLI args ----------------------------------------------------
    //
    // Supported:
    //   cargo run
    //      -> logs to test.log (truncated) and stdout
    //
    //   cargo run -- out.log
    //      -> logs to out.log
    //
    //   cargo run -- --config logger.ini
    //      -> reads the [Logging] section of logger.ini

    let args: Vec<String> = env::args().collect();

    let config = match args.len() {
        1 => LogConfig::from_env().with_log_file("test.log", false),
        2 => LogConfig::from_env().with_log_file(&args[1], false),
        3 if args[1] == "--config" => match LogConfig::load(&args[2]) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage:");
            eprintln!("  {}                    # log to test.log", args[0]);
            eprintln!("  {} [FILE]             # log to FILE", args[0]);
            eprintln!("  {} --config [INI]     # read the [Logging] section", args[0]);
            eprintln!();
            eprintln!("SCLOG_VERBOSITY_LEVEL overrides the default INFO threshold.");
            process::exit(1);
        }
    };

    if let Err(e) = rustylog::init_with_config(&config) {
        eprintln!("[rustylog] failed to initialize logging: {e}");
        process::exit(1);
    }

    if let Err(e) = run_demo() {
        eprintln!("[rustylog] {e}");
        process::exit(1);
    }

    let x = 1;
    if let Err(failure) = log_assert!(x > 1, "demo assertion with x=%d", x) {
        eprintln!("{failure}");
    }
}

fn run_demo() -> Result<(), LogError> {
    log_debug!("HELLOWORLD from Logging %d", 1 + 2)?;
    log_debug_tagged!("MYTAG", "HELLOWORLD from Logging %d %s", 4 + 5, "debug")?;
    log_info!("HELLOWORLD from Logging %d", 1 + 2)?;
    log_info_tagged!("MYTAG", "HELLOWORLD from Logging %d %s", 4 + 5, "info")?;
    log_success!("HELLOWORLD from Logging %d", 1 + 2)?;
    log_success_tagged!("MYTAG", "HELLOWORLD from Logging %d %s", 4 + 5, "success")?;
    log_warn!("HELLOWORLD from Logging %d", 1 + 2)?;
    log_warn_tagged!("MYTAG", "HELLOWORLD from Logging %d %s", 4 + 5, "warn")?;
    log_danger!("HELLOWORLD from Logging %d", 1 + 2)?;
    log_danger_tagged!("MYTAG", "HELLOWORLD from Logging %d %s", 4 + 5, "danger")?;
    log_error!("HELLOWORLD from Logging %d", 1 + 2)?;
    log_error_tagged!("MYTAG", "HELLOWORLD from Logging %d %s", 4 + 5, "error")?;

    let threshold = Logger::global().verbosity();
    let name = LogLevel::from_index(threshold).map_or("none", LogLevel::name);
    log_info_tagged!("DEMO", "threshold is %d (%s)", threshold, name)
}
