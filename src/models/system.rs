// Process memory, thread count and host identity models

/// Bytes in one megabyte (binary).
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Runtime counters read fresh on every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStats {
    /// Bytes currently allocated by the process heap allocator.
    pub allocated_bytes: u64,
    /// Live OS threads in the current process.
    pub thread_count: u32,
}

impl MemoryStats {
    /// Whole megabytes, truncated (1_048_575 bytes is 0 MB).
    pub fn allocated_mb(&self) -> u64 {
        self.allocated_bytes / BYTES_PER_MB
    }
}

/// Statically known host values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub cpu_cores: usize,
    pub os: String,
    pub arch: String,
}

impl HostInfo {
    /// Host identity for the compile target with the given logical core count.
    pub fn for_target(cpu_cores: usize) -> Self {
        Self {
            cpu_cores,
            os: std::env::consts::OS.into(),
            arch: std::env::consts::ARCH.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemStatus {
    pub memory: MemoryStats,
    pub host: HostInfo,
}
