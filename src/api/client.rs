//! HTTP client for the school submissions API
//!
//! Both submissions are JSON POSTs that differ only in their sub-path and the
//! message used when the server rejects a request without a `detail` field.

use super::error::SubmitError;
use super::traits::SubmissionApi;
use crate::submission::{AdmissionPayload, ContactPayload};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Default API base address
pub const DEFAULT_API_BASE_URL: &str = "https://syllas20.pythonanywhere.com/api";

/// Remote resource a submission is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Admissions,
    Contact,
}

impl Endpoint {
    /// Sub-path appended to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Admissions => "/admissions/",
            Endpoint::Contact => "/contact/",
        }
    }

    /// Message used when the server rejects a request without a detail
    pub fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::Admissions => "Failed to submit application",
            Endpoint::Contact => "Failed to send message",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Admissions => write!(f, "admission application"),
            Endpoint::Contact => write!(f, "contact message"),
        }
    }
}

/// JSON body returned by a successful submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerResponse(pub Value);

/// The parts of a created record the portal cares about
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ServerResponse {
    /// Extract the record id and status, if the server echoed them back
    pub fn receipt(&self) -> Receipt {
        Receipt::deserialize(&self.0).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Client for the submissions API
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client; `timeout` of `None` waits indefinitely
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.into(),
        })
    }

    /// The configured base address
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }

    async fn post_json<T>(&self, endpoint: Endpoint, payload: &T) -> Result<ServerResponse, SubmitError>
    where
        T: Serialize + ?Sized,
    {
        let url = self.url_for(endpoint);
        tracing::debug!(%url, "Sending {endpoint}");

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(SubmitError::Transport)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| endpoint.failure_message().to_string());
            return Err(SubmitError::Api { status, message });
        }

        serde_json::from_slice(&body)
            .map(ServerResponse)
            .map_err(SubmitError::Protocol)
    }
}

#[async_trait]
impl SubmissionApi for ApiClient {
    async fn submit_admission(
        &self,
        payload: &AdmissionPayload,
    ) -> Result<ServerResponse, SubmitError> {
        self.post_json(Endpoint::Admissions, payload)
            .await
            .inspect_err(|err| tracing::error!("Error submitting admission application: {err}"))
    }

    async fn submit_contact(
        &self,
        payload: &ContactPayload,
    ) -> Result<ServerResponse, SubmitError> {
        self.post_json(Endpoint::Contact, payload)
            .await
            .inspect_err(|err| tracing::error!("Error submitting contact message: {err}"))
    }
}
