// Timestamped greeting lines on stdout: `[HH:MM:SS] LOG: <message>`

use chrono::{DateTime, Local, TimeZone};
use std::io::{self, Write};

/// Wall-clock format for log lines (24-hour).
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Formats one log line (without trailing newline) for the given instant.
pub fn format_line<Tz>(at: &DateTime<Tz>, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("[{}] LOG: {}", at.format(TIME_FORMAT), message)
}

/// Writes one timestamped line to `w`, capturing local time at call time.
pub fn log_to<W: Write>(w: &mut W, message: &str) -> io::Result<()> {
    writeln!(w, "{}", format_line(&Local::now(), message))
}

/// Prints one timestamped line to stdout.
pub fn log(message: &str) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // stdout write failures (closed pipe) are not recoverable here
    if let Err(e) = log_to(&mut out, message) {
        tracing::debug!(error = %e, "stdout write failed");
    }
}
