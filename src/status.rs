// System health block: memory, threads, cores, OS / arch

use crate::models::SystemStatus;
use crate::sysinfo_repo::{StatsError, SysinfoRepo};
use std::io::{self, Write};

pub const HEADER: &str = "--- System Health Check ---";
pub const FOOTER: &str = "---------------------------";

/// Renders the bordered block, preceded by a blank line.
pub fn render<W: Write>(w: &mut W, status: &SystemStatus) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", HEADER)?;
    writeln!(w, "📦 Allocated Memory : {} MB", status.memory.allocated_mb())?;
    writeln!(w, "🧵 Total Threads    : {}", status.memory.thread_count)?;
    writeln!(w, "⚙️  CPU Cores        : {}", status.host.cpu_cores)?;
    writeln!(
        w,
        "💻 OS / Arch        : {} / {}",
        status.host.os, status.host.arch
    )?;
    writeln!(w, "{}", FOOTER)
}

/// Reads a fresh snapshot and prints it to stdout.
pub fn report(repo: &SysinfoRepo) -> Result<(), StatsError> {
    let status = repo.get_system_status()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = render(&mut out, &status) {
        tracing::debug!(error = %e, "stdout write failed");
    }
    Ok(())
}
