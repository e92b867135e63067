//! Trait abstraction for the submissions API to enable mocking in tests

use super::client::ServerResponse;
use super::error::SubmitError;
use crate::submission::{AdmissionPayload, ContactPayload};
use async_trait::async_trait;

/// Remote operations a submission controller can invoke
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionApi: Send + Sync {
    /// Submit an admission application
    async fn submit_admission(
        &self,
        payload: &AdmissionPayload,
    ) -> Result<ServerResponse, SubmitError>;

    /// Send a contact message
    async fn submit_contact(&self, payload: &ContactPayload)
        -> Result<ServerResponse, SubmitError>;
}
