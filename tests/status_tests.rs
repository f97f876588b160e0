// System health block: megabyte truncation, layout, live snapshot

mod common;

use common::{capture, status_with_bytes};
use pulsecheck::models::MemoryStats;
use pulsecheck::status::{FOOTER, HEADER, render};
use pulsecheck::sysinfo_repo::SysinfoRepo;

fn mb(allocated_bytes: u64) -> u64 {
    MemoryStats {
        allocated_bytes,
        thread_count: 1,
    }
    .allocated_mb()
}

#[test]
fn test_allocated_mb_truncates() {
    assert_eq!(mb(0), 0);
    assert_eq!(mb(1_048_575), 0);
    assert_eq!(mb(1_048_576), 1);
    assert_eq!(mb(2_097_151), 1);
    assert_eq!(mb(2_097_152), 2);
}

#[test]
fn test_render_block_layout() {
    let out = capture(|w| render(w, &status_with_bytes(2_097_151)));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "",
            HEADER,
            "📦 Allocated Memory : 1 MB",
            "🧵 Total Threads    : 4",
            "⚙️  CPU Cores        : 8",
            "💻 OS / Arch        : linux / x86_64",
            FOOTER,
        ]
    );
}

#[test]
fn test_render_two_megabytes() {
    let out = capture(|w| render(w, &status_with_bytes(2_097_152)));
    assert!(out.contains("📦 Allocated Memory : 2 MB\n"));
}

/// Logical processors listed by the kernel, independent of sysinfo.
#[cfg(target_os = "linux")]
fn proc_cpuinfo_processors() -> usize {
    std::fs::read_to_string("/proc/cpuinfo")
        .expect("read /proc/cpuinfo")
        .lines()
        .filter(|line| {
            line.split(':')
                .next()
                .is_some_and(|key| key.trim() == "processor")
        })
        .count()
}

#[cfg(target_os = "linux")]
#[test]
fn test_cpu_cores_match_proc_cpuinfo() {
    let repo = SysinfoRepo::new();
    assert_eq!(repo.cpu_cores().unwrap(), proc_cpuinfo_processors());
}

#[test]
fn test_cpu_cores_nonzero() {
    let repo = SysinfoRepo::new();
    assert!(repo.cpu_cores().unwrap() >= 1);
}

#[test]
fn test_memory_stats_read_fresh() {
    let repo = SysinfoRepo::new();
    let stats = repo.get_memory_stats().expect("memory stats");
    assert!(stats.thread_count >= 1);
}

#[test]
fn test_get_system_status_reports_target_identity() {
    let repo = SysinfoRepo::new();
    let status = repo.get_system_status().expect("system status");
    assert_eq!(status.host.os, std::env::consts::OS);
    assert_eq!(status.host.arch, std::env::consts::ARCH);
    assert_eq!(status.host.cpu_cores, repo.cpu_cores().unwrap());
    let out = capture(|w| render(w, &status));
    assert!(out.contains(&format!(
        "💻 OS / Arch        : {} / {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    )));
}
