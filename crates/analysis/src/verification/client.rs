//! Explorer verification client
//!
//! ## Design: submit and poll are separate operations
//!
//! Explorer verification is an asynchronous job queued on a third-party
//! service with no webhook; the only integration contract available is
//! submit-then-poll. The client therefore exposes both halves independently
//! and performs exactly one round-trip per call: no internal sleeping, no
//! retries, no poll loop. Cadence, backoff and giving up belong to the
//! caller.
//!
//! Every operation is total. Unsupported chains, missing keys, remote
//! rejections, timeouts and undecodable responses all come back as plain
//! result values; nothing here returns `Err` or panics.

use crate::verification::endpoints::{EndpointRegistry, VerificationEndpoint};
use crate::verification::types::{
    SourceCheck, VerificationRequest, VerificationStatus, VerificationSubmitResult,
};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);
const STATUS_TIMEOUT: Duration = Duration::from_secs(10);
const SOURCE_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote result text that marks a still-queued job. Matched exactly; any
/// other non-success response counts as a failure.
const PENDING_IN_QUEUE: &str = "Pending in queue";

#[derive(Debug, Deserialize)]
struct ExplorerTextResponse {
    status: String,
    result: String,
}

#[derive(Debug, Deserialize)]
struct ExplorerSourceResponse {
    #[allow(dead_code)]
    status: String,
    result: Vec<SourceEntry>,
}

#[derive(Debug, Deserialize)]
struct SourceEntry {
    #[serde(rename = "SourceCode", default)]
    source_code: String,
}

pub struct VerificationClient {
    http: reqwest::Client,
    registry: EndpointRegistry,
}

impl VerificationClient {
    pub fn new() -> Self {
        Self::with_registry(EndpointRegistry::builtin())
    }

    /// Build a client over a substituted registry; used by tests and by
    /// deployments that point at self-hosted explorer instances.
    pub fn with_registry(registry: EndpointRegistry) -> Self {
        Self {
            http: reqwest::Client::new(),
            registry,
        }
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Submit a contract for source verification.
    ///
    /// Validation failures (unsupported chain, missing API key, zero runs)
    /// resolve locally without touching the network.
    pub async fn submit(&self, request: &VerificationRequest) -> VerificationSubmitResult {
        let Some(endpoint) = self.registry.get(request.chain_id) else {
            return VerificationSubmitResult::rejected(format!(
                "Chain id {} is not supported for verification",
                request.chain_id
            ));
        };

        let api_key = match request.api_key.as_deref().filter(|k| !k.is_empty()) {
            Some(key) => key,
            None => {
                return VerificationSubmitResult::rejected(
                    "An explorer API key is required to submit verification",
                );
            }
        };

        if request.runs == 0 {
            return VerificationSubmitResult::rejected(
                "Optimizer runs must be a positive integer",
            );
        }

        // Remote field name `constructorArguements` is a known misspelling in
        // the explorer API and must be sent verbatim.
        let form: Vec<(&str, String)> = vec![
            ("apikey", api_key.to_string()),
            ("module", "contract".to_string()),
            ("action", "verifysourcecode".to_string()),
            ("contractaddress", request.contract_address.clone()),
            ("sourceCode", request.source_code.clone()),
            ("codeformat", "solidity-single-file".to_string()),
            ("contractname", request.contract_name.clone()),
            ("compilerversion", request.compiler_version.clone()),
            (
                "optimizationUsed",
                if request.optimization_used { "1" } else { "0" }.to_string(),
            ),
            ("runs", request.runs.to_string()),
            (
                "constructorArguements",
                request.constructor_arguments.clone().unwrap_or_default(),
            ),
        ];

        debug!(
            chain_id = request.chain_id,
            address = %request.contract_address,
            "submitting verification request"
        );

        let response = self
            .http
            .post(&endpoint.api_base_url)
            .timeout(SUBMIT_TIMEOUT)
            .form(&form)
            .send()
            .await;

        match response {
            Ok(resp) => match resp.json::<ExplorerTextResponse>().await {
                Ok(body) => interpret_submit_response(
                    &body.status,
                    &body.result,
                    endpoint,
                    &request.contract_address,
                ),
                Err(err) => {
                    warn!(error = %err, "undecodable verification submit response");
                    VerificationSubmitResult::rejected(format!(
                        "Verification submit failed: {err}"
                    ))
                }
            },
            Err(err) => {
                warn!(error = %err, "verification submit transport failure");
                VerificationSubmitResult::rejected(format!("Verification submit failed: {err}"))
            }
        }
    }

    /// Resolve one poll of an asynchronous verification job.
    pub async fn poll_status(
        &self,
        chain_id: u64,
        job_id: &str,
        api_key: &str,
    ) -> VerificationStatus {
        let Some(endpoint) = self.registry.get(chain_id) else {
            return VerificationStatus::unknown(format!(
                "Chain id {chain_id} is not supported for verification"
            ));
        };

        let response = self
            .http
            .get(&endpoint.api_base_url)
            .timeout(STATUS_TIMEOUT)
            .query(&[
                ("apikey", api_key),
                ("module", "contract"),
                ("action", "checkverifystatus"),
                ("guid", job_id),
            ])
            .send()
            .await;

        match response {
            Ok(resp) => match resp.json::<ExplorerTextResponse>().await {
                Ok(body) => interpret_status_response(&body.status, &body.result),
                Err(err) => {
                    warn!(error = %err, "undecodable verification status response");
                    VerificationStatus::unknown(format!("Status check failed: {err}"))
                }
            },
            Err(err) => {
                warn!(error = %err, "verification status transport failure");
                VerificationStatus::unknown(format!("Status check failed: {err}"))
            }
        }
    }

    /// Read-only existence check: does the explorer already hold verified
    /// source for `address`? Any failure collapses to `verified = false`.
    pub async fn is_verified(
        &self,
        chain_id: u64,
        address: &str,
        api_key: Option<&str>,
    ) -> SourceCheck {
        let Some(endpoint) = self.registry.get(chain_id) else {
            return SourceCheck::default();
        };

        let mut query: Vec<(&str, &str)> = vec![
            ("module", "contract"),
            ("action", "getsourcecode"),
            ("address", address),
        ];
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            query.push(("apikey", key));
        }

        let response = self
            .http
            .get(&endpoint.api_base_url)
            .timeout(SOURCE_TIMEOUT)
            .query(&query)
            .send()
            .await;

        match response {
            Ok(resp) => match resp.json::<ExplorerSourceResponse>().await {
                Ok(body) => {
                    let source = body
                        .result
                        .into_iter()
                        .next()
                        .map(|entry| entry.source_code)
                        .filter(|code| !code.is_empty());
                    SourceCheck {
                        verified: source.is_some(),
                        source_code: source,
                    }
                }
                Err(_) => SourceCheck::default(),
            },
            Err(err) => {
                debug!(error = %err, "source check transport failure");
                SourceCheck::default()
            }
        }
    }
}

impl Default for VerificationClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a decoded submit response. Remote status `"1"` carries the job guid
/// in `result`; anything else is a rejection whose message is passed through
/// verbatim.
fn interpret_submit_response(
    status: &str,
    result: &str,
    endpoint: &VerificationEndpoint,
    contract_address: &str,
) -> VerificationSubmitResult {
    if status == "1" {
        let explorer_url = format!(
            "{}/address/{}#code",
            endpoint.explorer_base_url, contract_address
        );
        VerificationSubmitResult::accepted(
            result.to_string(),
            format!("Verification submitted to {}", endpoint.display_name),
            explorer_url,
        )
    } else {
        VerificationSubmitResult::rejected(result.to_string())
    }
}

/// Map a decoded status response onto the closed state set.
fn interpret_status_response(status: &str, result: &str) -> VerificationStatus {
    if status == "1" {
        VerificationStatus::pass(result.to_string())
    } else if result == PENDING_IN_QUEUE {
        VerificationStatus::pending(result.to_string())
    } else {
        VerificationStatus::fail(result.to_string())
    }
}
