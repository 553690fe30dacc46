//! HTTP implementation of the `VariableApi` port.
//!
//! Variables are addressed OData-style: `DELETE {api}/v6/{resource}({id})`.

use std::time::Duration;

use anyhow::{Context, Result};
use fleet_common::VarResource;
use reqwest::StatusCode;
use thiserror::Error;

use crate::application::ports::VariableApi;
use crate::domain::config::FleetConfig;
use crate::domain::variable::VariableId;

/// API version segment of every resource path.
const API_VERSION: &str = "v6";

/// Errors returned by the fleet API adapter.
///
/// The display text is the bare message so callers can append context such
/// as the offending ID.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// `VariableApi` backed by `reqwest`.
pub struct HttpVariableApi {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpVariableApi {
    /// Build a client from the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &FleetConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("fleet-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: config.api_base().to_string(),
            token: config.session_token().map(str::to_string),
        })
    }
}

impl VariableApi for HttpVariableApi {
    async fn delete(&self, resource: VarResource, id: VariableId) -> Result<()> {
        let url = resource_url(&self.base_url, resource, id);
        let mut request = self.client.delete(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        tracing::debug!(%url, %status, "DELETE");
        if status.is_success() {
            return Ok(());
        }
        // An unreadable body still leaves the status to report.
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status,
            message: error_message(status, &body),
        }
        .into())
    }
}

/// URL of a single variable.
fn resource_url(base_url: &str, resource: VarResource, id: VariableId) -> String {
    format!(
        "{}/{API_VERSION}/{}({id})",
        base_url.trim_end_matches('/'),
        resource.resource_name()
    )
}

/// Message for a non-2xx response: the body text, or the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string)
}
