use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything needed to submit one source verification attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub chain_id: u64,

    /// 20-byte hex address of the deployed contract.
    pub contract_address: String,

    pub source_code: String,

    pub contract_name: String,

    /// Full compiler version string including commit hash, e.g.
    /// `v0.8.20+commit.a1b79de6`.
    pub compiler_version: String,

    pub optimization_used: bool,

    /// Optimizer runs. Zero is rejected as a caller error rather than
    /// silently defaulted.
    pub runs: u32,

    /// Hex-encoded, ABI-packed constructor arguments, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor_arguments: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// Outcome of one submission attempt. Local validation failures, remote
/// rejections and transport errors all land here with `success = false`;
/// nothing on the submit path ever panics or propagates an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSubmitResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
}

impl VerificationSubmitResult {
    pub fn accepted(job_id: String, message: String, explorer_url: String) -> Self {
        Self {
            success: true,
            message,
            job_id: Some(job_id),
            explorer_url: Some(explorer_url),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            job_id: None,
            explorer_url: None,
        }
    }
}

/// Closed state set for an asynchronous verification job.
///
/// `Unknown` is reserved for "failed to find out" — transport or decoding
/// failures and unsupported chains. It is never a guess at the job outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationState {
    Pending,
    Pass,
    Fail,
    Unknown,
}

impl fmt::Display for VerificationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// One poll's view of a verification job, re-derived on every call and never
/// cached by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationStatus {
    pub state: VerificationState,
    pub message: String,
}

impl VerificationStatus {
    pub fn pending(message: impl Into<String>) -> Self {
        Self {
            state: VerificationState::Pending,
            message: message.into(),
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            state: VerificationState::Pass,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            state: VerificationState::Fail,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            state: VerificationState::Unknown,
            message: message.into(),
        }
    }

    /// Pass and fail are terminal: no further poll changes the outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, VerificationState::Pass | VerificationState::Fail)
    }
}

/// Result of the read-only source-existence check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceCheck {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
}
