// Process and host introspection via jemalloc stats and sysinfo

mod linux;

use crate::models::{HostInfo, MemoryStats, SystemStatus};
use std::sync::Mutex;
use sysinfo::{ProcessesToUpdate, System};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("allocator stats unavailable: {0}")]
    Allocator(String),
    #[error("sysinfo lock poisoned: {0}")]
    LockPoisoned(String),
}

pub struct SysinfoRepo {
    sys: Mutex<System>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        Self {
            sys: Mutex::new(sys),
        }
    }

    /// Logical CPU count as seen by sysinfo.
    pub fn cpu_cores(&self) -> Result<usize, StatsError> {
        let sys = self
            .sys
            .lock()
            .map_err(|e| StatsError::LockPoisoned(e.to_string()))?;
        Ok(sys.cpus().len())
    }

    /// Fresh allocation and thread counters; nothing is cached between calls.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_memory_stats"))]
    pub fn get_memory_stats(&self) -> Result<MemoryStats, StatsError> {
        let allocated_bytes = read_allocated_bytes()?;
        let thread_count = match linux::read_thread_count_linux() {
            Some(n) => n,
            None => self.thread_count_from_sysinfo()?,
        };
        tracing::debug!(allocated_bytes, thread_count, "memory stats read");
        Ok(MemoryStats {
            allocated_bytes,
            thread_count,
        })
    }

    /// Snapshot read on the calling thread; no helper thread is spawned.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "get_system_status"))]
    pub fn get_system_status(&self) -> Result<SystemStatus, StatsError> {
        let memory = self.get_memory_stats()?;
        let host = HostInfo::for_target(self.cpu_cores()?);
        Ok(SystemStatus { memory, host })
    }

    fn thread_count_from_sysinfo(&self) -> Result<u32, StatsError> {
        let Ok(pid) = sysinfo::get_current_pid() else {
            return Ok(1);
        };
        let mut sys = self
            .sys
            .lock()
            .map_err(|e| StatsError::LockPoisoned(e.to_string()))?;
        sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        let count = sys
            .process(pid)
            .map(|p| 1 + p.tasks().map(|t| t.len()).unwrap_or(0))
            .unwrap_or(1)
            .min(u32::MAX as usize) as u32;
        Ok(count)
    }
}

/// Bytes currently allocated through jemalloc. Stats are cached by jemalloc
/// until the epoch is advanced.
fn read_allocated_bytes() -> Result<u64, StatsError> {
    tikv_jemalloc_ctl::epoch::advance().map_err(|e| StatsError::Allocator(e.to_string()))?;
    let allocated = tikv_jemalloc_ctl::stats::allocated::read()
        .map_err(|e| StatsError::Allocator(e.to_string()))?;
    Ok(allocated as u64)
}
