//! Delivery targets for validated contact submissions.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{error::ForwardingError, protocol::ContactSubmission};
use tracing::info;
use url::Url;

const HTTP_FORWARD_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn forward(&self, submission: &ContactSubmission) -> Result<(), ForwardingError>;
}

/// Writes each submission to the log and accepts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn forward(&self, submission: &ContactSubmission) -> Result<(), ForwardingError> {
        info!(
            name = %submission.name,
            email = %submission.email,
            phone = %submission.phone,
            message = %submission.message,
            "contact form submitted"
        );
        Ok(())
    }
}

/// POSTs each submission as JSON. Any non-success status is a failed forward.
#[derive(Debug, Clone)]
pub struct HttpSink {
    http: Client,
    endpoint: Url,
}

impl HttpSink {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("invalid forwarding endpoint '{endpoint}'"))?;
        let http = Client::builder()
            .timeout(HTTP_FORWARD_TIMEOUT)
            .build()
            .context("failed to build forwarding http client")?;
        Ok(Self { http, endpoint })
    }

    /// Endpoint for a Policy Center server's contact route. The route is
    /// resolved under any path prefix the server URL carries.
    pub fn for_server(server_url: &str) -> Result<Self> {
        let mut base = Url::parse(server_url)
            .with_context(|| format!("invalid server url '{server_url}'"))?;
        if !base.path().ends_with('/') {
            let prefix = format!("{}/", base.path());
            base.set_path(&prefix);
        }
        let route = shared::protocol::contact_route().trim_start_matches('/');
        let endpoint = base
            .join(route)
            .with_context(|| format!("cannot derive contact endpoint from '{server_url}'"))?;
        Self::new(endpoint.as_str())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionSink for HttpSink {
    async fn forward(&self, submission: &ContactSubmission) -> Result<(), ForwardingError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(|error| ForwardingError::new(format!("request failed: {error}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForwardingError::new(format!(
                "endpoint responded with {status}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/sink_tests.rs"]
mod tests;
