//! Leveled logging macros for the global [`Logger`](crate::log::logger::Logger)
//! or any logger passed in explicitly.
//!
//! Messages use `printf`-style placeholders (`%d`, `%s`, ...), see
//! [`render`](crate::log::log_format::render). Every macro evaluates to
//! `Result<(), LogError>`.
//!
//! # Feature Flags
//! Levels are compiled in through cargo features:
//! `log-debug`, `log-info`, `log-success`, `log-warn`, `log-danger`, `log-error`.
//! Each one implies the more severe ones.
//!
//! If a feature is disabled, the corresponding macros expand to `Ok(())`,
//! removing all formatting and allocation overhead at compile time.
//! `log_assert!` is never compiled out.

// ============================================================================
// 1. GENERIC MACROS
// ============================================================================

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($lvl, $fmt, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! logger_log_tagged {
    ($logger:expr, $lvl:expr, $tag:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_tagged($lvl, $tag, $fmt, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_disabled {
    () => {
        ::core::result::Result::<(), $crate::log::log_error::LogError>::Ok(())
    };
}

/// Checks a condition against the global logger.
///
/// On failure the diagnostic is written to the log file at ASSERT level, the
/// file is closed, and `Err(AssertionFailure)` is returned. The message is
/// only rendered when the condition is false.
///
/// ```ignore
/// log_assert!(len > 0, "empty buffer from %s", peer)?;
/// ```
#[macro_export]
macro_rules! log_assert {
    ($cond:expr $(,)?) => {
        $crate::log_assert!($cond, "")
    };
    ($cond:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        let __ok: bool = $cond;
        if __ok {
            ::core::result::Result::<(), $crate::log::assertion::AssertionFailure>::Ok(())
        } else {
            $crate::log::assertion::check(
                $crate::log::logger::Logger::global(),
                false,
                stringify!($cond),
                file!(),
                line!(),
                &$crate::log::log_format::render(
                    $fmt,
                    &[$(&$arg as &dyn ::std::fmt::Display),*],
                ),
            )
        }
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug        { ($($arg:tt)*)           => { $crate::logger_log!($crate::log::logger::Logger::global(), $crate::log::log_level::LogLevel::Debug, $($arg)*) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug_tagged { ($tag:expr, $($arg:tt)*) => { $crate::logger_log_tagged!($crate::log::logger::Logger::global(), $crate::log::log_level::LogLevel::Debug, $tag, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::__log_disabled!()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug_tagged {
    ($($arg:tt)*) => {
        $crate::__log_disabled!()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info        { ($($arg:tt)*)           => { $crate::logger_log!($crate::log::logger::Logger::global(), $crate::log::log_level::LogLevel::Info, $($arg)*) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info_tagged { ($tag:expr, $($arg:tt)*) => { $crate::logger_log_tagged!($crate::log::logger::Logger::global(), $crate::log::log_level::LogLevel::Info, $tag, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::__log_disabled!()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info_tagged {
    ($($arg:tt)*) => {
        $crate::__log_disabled!()
    };
}

// ---------------------- SUCCESS ----------------------
#[cfg(feature = "log-success")]
#[macro_export]
macro_rules! log_success        { ($($arg:tt)*)           => { $crate::logger_log!($crate::log::logger::Logger::global(), $crate::log::log_level::LogLevel::Success, $($arg)*) } }
#[cfg(feature = "log-success")]
#[macro_export]
macro_rules! log_success_tagged { ($tag:expr, $($arg:tt)*) => { $crate::logger_log_tagged!($crate::log::logger::Logger::global(), $crate::log::log_level::LogLevel::Success, $tag, $($arg)*) } }

#[cfg(not(feature = "log-success"))]
#[macro_export]
macro_rules! log_success {
    ($($arg:tt)*) => {
        $crate::__log_disabled!()
    };
}
#[cfg(not(feature = "log-success"))]
#[macro_export]
macro_rules! log_success_tagged {
    ($($arg:tt)*) => {
        $crate::__log_disabled!()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! log_warn        { ($($arg:tt)*)           => { $crate::logger_log!($crate::log::logger::Logger::global(), $crate::log::log_level::LogLevel::Warn, $($arg)*) } }
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! log_warn_tagged { ($tag:expr, $($arg:tt)*) => { $crate::logger_log_tagged!($crate::log::logger::Logger::global(), $crate::log::log_level::LogLevel::Warn, $tag, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::__log_disabled!()
    };
}
#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! log_warn_tagged {
    ($($arg:tt)*) => {
        $crate::__log_disabled!()
    };
}

// ---------------------- DANGER ----------------------
#[cfg(feature = "log-danger")]
#[macro_export]
macro_rules! log_danger        { ($($arg:tt)*)           => { $crate::logger_log!($crate::log::logger::Logger::global(), $crate::log::log_level::LogLevel::Danger, $($arg)*) } }
#[cfg(feature = "log-danger")]
#[macro_export]
macro_rules! log_danger_tagged { ($tag:expr, $($arg:tt)*) => { $crate::logger_log_tagged!($crate::log::logger::Logger::global(), $crate::log::log_level::LogLevel::Danger, $tag, $($arg)*) } }

#[cfg(not(feature = "log-danger"))]
#[macro_export]
macro_rules! log_danger {
    ($($arg:tt)*) => {
        $crate::__log_disabled!()
    };
}
#[cfg(not(feature = "log-danger"))]
#[macro_export]
macro_rules! log_danger_tagged {
    ($($arg:tt)*) => {
        $crate::__log_disabled!()
    };
}

// ---------------------- ERROR ----------------------
// Generally always enabled, but consistent structure allows user to disable if really needed.
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error        { ($($arg:tt)*)           => { $crate::logger_log!($crate::log::logger::Logger::global(), $crate::log::log_level::LogLevel::Error, $($arg)*) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error_tagged { ($tag:expr, $($arg:tt)*) => { $crate::logger_log_tagged!($crate::log::logger::Logger::global(), $crate::log::log_level::LogLevel::Error, $tag, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::__log_disabled!()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error_tagged {
    ($($arg:tt)*) => {
        $crate::__log_disabled!()
    };
}
