//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - `Report` for the pass/fail lines of the `validate` command
//!
//! # Example
//!
//! ```ignore
//! log!("build"; "rendered {} pages", count);
//! debug!("seo"; "no static metadata for {}", path);
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "build" | "sitemap" => prefix.bright_blue().bold().to_string(),
        "seo" | "schema" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Report (validate output)
// ============================================================================

/// Line-oriented pass/fail report.
///
/// Counts failures so the caller can decide on the exit status once all
/// checks ran.
///
/// # Example
///
/// ```ignore
/// let mut report = Report::new();
/// report.pass("/pricing");
/// report.fail("/about", "description is empty");
/// assert_eq!(report.failures(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Report {
    passed: usize,
    failed: usize,
    warned: usize,
}

impl Report {
    pub const fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
            warned: 0,
        }
    }

    /// Record a passing check (✓ prefix, green). Only printed when verbose.
    pub fn pass(&mut self, subject: &str) {
        self.passed += 1;
        if is_verbose() {
            Self::print(&format!("{}", "✓".green()), subject);
        }
    }

    /// Record a failing check (✗ prefix, red).
    pub fn fail(&mut self, subject: &str, detail: &str) {
        self.failed += 1;
        Self::print(&format!("{}", "✗".red()), &format!("{subject}: {detail}"));
    }

    /// Record a warning (⚠ prefix, yellow).
    pub fn warn(&mut self, subject: &str, detail: &str) {
        self.warned += 1;
        Self::print(&format!("{}", "⚠".yellow()), &format!("{subject}: {detail}"));
    }

    pub const fn passed(&self) -> usize {
        self.passed
    }

    pub const fn failures(&self) -> usize {
        self.failed
    }

    pub const fn warnings(&self) -> usize {
        self.warned
    }

    fn print(symbol: &str, message: &str) {
        let mut stdout = stdout().lock();
        writeln!(stdout, "{symbol} {message}").ok();
        stdout.flush().ok();
    }
}

// ============================================================================
// Tests
// ============================================================================
