//! `printf`-style message rendering.
//!
//! Placeholders are a `%` followed by any single character. The character
//! is not interpreted: `%d`, `%s` and `%x` all mean "the next argument",
//! rendered with its [`Display`] impl.

use std::fmt::{Display, Write};

/// Renders `format` against `args`.
///
/// Literal text is copied verbatim. Each placeholder takes the next argument.
/// Once the arguments run out the rest of the format is appended untouched,
/// placeholders included. Extra arguments beyond the last placeholder are
/// ignored, and a `%` at the very end takes an argument and stops the scan.
///
/// With no arguments the format is returned as is.
///
/// ```
/// use rustylog::log::log_format::render;
///
/// assert_eq!(render("%d-%s", &[&3, &"x"]), "3-x");
/// assert_eq!(render("100%", &[]), "100%");
/// ```
#[must_use]
pub fn render(format: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() {
        return format.to_owned();
    }

    let mut out = String::with_capacity(format.len() + args.len() * 8);
    let mut chars = format.chars();

    for arg in args {
        loop {
            match chars.next() {
                None => return out,
                Some('%') => break,
                Some(c) => out.push(c),
            }
        }

        let conversion = chars.next();
        // Writing into a String cannot fail.
        let _ = write!(out, "{arg}");
        if conversion.is_none() {
            return out;
        }
    }

    out.push_str(chars.as_str());
    out
}
