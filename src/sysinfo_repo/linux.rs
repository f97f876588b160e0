// Linux-specific helpers: /proc/self

/// Read the "Threads:" count from /proc/self/status (Linux).
pub(super) fn read_thread_count_linux() -> Option<u32> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/self/status").ok()?;
        parse_threads_line(&content)
    }
    #[cfg(not(target_os = "linux"))]
    None
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_threads_line(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("Threads:"))
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
}
