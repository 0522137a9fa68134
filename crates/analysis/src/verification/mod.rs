//! Explorer verification: endpoint registry, submission and job polling.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::VerificationClient;
pub use endpoints::{EndpointRegistry, VerificationEndpoint};
pub use types::{
    SourceCheck, VerificationRequest, VerificationState, VerificationStatus,
    VerificationSubmitResult, DEFAULT_OPTIMIZER_RUNS,
};
