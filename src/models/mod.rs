// Domain models: point-in-time snapshots, never stored

mod network;
mod system;

pub use network::NetworkResult;
pub use system::{BYTES_PER_MB, HostInfo, MemoryStats, SystemStatus};
