// Outcome of the public IP probe

/// Either the echoed public IP (raw response body) or a transport failure.
/// HTTP status codes are not inspected: a 500 with a body is still `Connected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResult {
    Connected { ip: String },
    Disconnected,
}

impl NetworkResult {
    pub fn is_connected(&self) -> bool {
        matches!(self, NetworkResult::Connected { .. })
    }
}
