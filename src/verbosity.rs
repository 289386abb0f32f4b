// Global verbosity level and the live status line
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};

static VERBOSITY_LEVEL: AtomicU8 = AtomicU8::new(0);

pub fn set_verbosity_level(level: u8) {
    VERBOSITY_LEVEL.store(level.min(2), Ordering::Relaxed);
    if level > 0 {
        println!("📢 Verbosity level: {} (0=quiet, 1=basic, 2=full)", level.min(2));
    }
}

pub fn get_verbosity_level() -> u8 {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

/// Rewrite the current terminal line in place.
///
/// The cursor is returned to column zero, the text written, and the rest of
/// the previous line cleared, so consecutive calls replace one another.
pub fn status_line(text: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\r{}\x1b[1K", text);
    let _ = stdout.flush();
}

/// `MM:SS` for the refresh countdown. Minutes are not wrapped at 60.
pub fn format_countdown(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[macro_export]
macro_rules! v_print {
    ($level:expr, $($arg:tt)*) => {
        if $crate::verbosity::get_verbosity_level() >= $level {
            println!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! v_info {
    ($($arg:tt)*) => { $crate::v_print!(1, $($arg)*); };
}

#[macro_export]
macro_rules! v_debug {
    ($($arg:tt)*) => { $crate::v_print!(2, $($arg)*); };
}

// Always print errors regardless of verbosity
#[macro_export]
macro_rules! v_error {
    ($($arg:tt)*) => { eprintln!($($arg)*); };
}
