// Shared test helpers

use pulsecheck::models::*;

pub fn status_with_bytes(allocated_bytes: u64) -> SystemStatus {
    SystemStatus {
        memory: MemoryStats {
            allocated_bytes,
            thread_count: 4,
        },
        host: HostInfo {
            cpu_cores: 8,
            os: "linux".into(),
            arch: "x86_64".into(),
        },
    }
}

/// Runs a renderer against an in-memory buffer and returns the text.
pub fn capture<F>(render: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buf = Vec::new();
    render(&mut buf).expect("render");
    String::from_utf8(buf).expect("utf8 output")
}
