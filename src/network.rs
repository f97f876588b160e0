// Public IP probe: one GET to an IP echo endpoint, reported as Connected / Disconnected

use crate::models::NetworkResult;
use std::io::{self, Write};
use std::time::Duration;
use tracing::instrument;

/// Default IP echo endpoint (plain-text body).
pub const DEFAULT_ENDPOINT: &str = "https://api.ipify.org";

pub const HEADER: &str = "--- Network Status ---";
pub const FOOTER: &str = "----------------------";
pub const DISCONNECTED_LINE: &str = "❌ Internet: Disconnected";

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("http client init: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

pub struct NetworkChecker {
    client: reqwest::Client,
    endpoint: String,
}

impl NetworkChecker {
    /// `timeout: None` keeps the client default (no request timeout).
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ProbeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(ProbeError::Client)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues the GET and returns the body. Only transport errors fail;
    /// the status code is not checked.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_public_ip(&self) -> Result<String, ProbeError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|source| ProbeError::Transport {
                endpoint: self.endpoint.clone(),
                source,
            })?;
        tracing::debug!(status = %resp.status(), "ip echo responded");
        // body read consumes the response
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "reading ip echo body failed");
                String::new()
            }
        };
        Ok(body)
    }

    /// Runs the probe once; failures are swallowed into `Disconnected`.
    pub async fn probe(&self) -> NetworkResult {
        match self.fetch_public_ip().await {
            Ok(ip) => NetworkResult::Connected { ip },
            Err(e) => {
                tracing::debug!(error = %e, "network probe failed");
                NetworkResult::Disconnected
            }
        }
    }

    /// Probes and prints the network block to stdout.
    pub async fn check(&self) -> NetworkResult {
        let result = self.probe().await;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = render(&mut out, &result) {
            tracing::debug!(error = %e, "stdout write failed");
        }
        result
    }
}

/// Renders the network block. On `Disconnected` nothing follows the failure line.
pub fn render<W: Write>(w: &mut W, result: &NetworkResult) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", HEADER)?;
    match result {
        NetworkResult::Disconnected => writeln!(w, "{}", DISCONNECTED_LINE),
        NetworkResult::Connected { ip } => {
            writeln!(w, "🌍 Public IP  : {}", ip)?;
            writeln!(w, "✅ Internet   : Connected")?;
            writeln!(w, "{}", FOOTER)
        }
    }
}
