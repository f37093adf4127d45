//! Terminal logging with colored module prefixes.
//!
//! Log lines go to stderr so that command output on stdout (`list`) stays
//! clean when piped.
//!
//! # Example
//!
//! ```ignore
//! log!("build"; "rendering {} shops", shops.len());
//! log!("skip"; "line {}: no shop name", line);
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{IsTerminal, Write, stderr},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Length of brackets around module name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[module] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;

/// Total prefix length for a module name: `[`, `]` and trailing space.
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails (e.g. no terminal attached).
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix.
///
/// Long messages are truncated to fit the terminal width.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);
    let width = get_terminal_width() as usize;

    let stderr = stderr();
    let is_terminal = stderr.is_terminal();
    let mut stderr = stderr.lock();
    write_line(&mut stderr, is_terminal, &prefix, module.len(), message, width);
}

/// Write one prefixed line; the line-clearing sequence is for terminals only.
fn write_line(
    out: &mut impl Write,
    is_terminal: bool,
    prefix: &ColoredString,
    module_len: usize,
    message: &str,
    width: usize,
) {
    if is_terminal {
        execute!(out, Clear(ClearType::UntilNewLine)).ok();
    }

    let max_msg_len = width.saturating_sub(calc_prefix_len(module_len));
    let message = truncate_str(message, max_msg_len);

    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "error" => prefix.bright_red().bold(),
        "warn" | "skip" => prefix.bright_magenta().bold(),
        "prune" | "clean" => prefix.bright_blue().bold(),
        "done" => prefix.bright_green().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within `max_len` bytes on a char boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
