//! Submissions API client module

mod client;
mod error;
mod traits;

pub use client::{ApiClient, Endpoint, Receipt, ServerResponse, DEFAULT_API_BASE_URL};
pub use error::SubmitError;
pub use traits::SubmissionApi;

#[cfg(test)]
pub use traits::MockSubmissionApi;
