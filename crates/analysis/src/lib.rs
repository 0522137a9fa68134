//! Veriscan Analysis - Contract Analysis & Verification Pipeline
//!
//! This crate is the engineering core behind the contract tooling: a
//! heuristic vulnerability scanner with severity-weighted scoring, a solc
//! adapter that normalizes compiler output into uniform artifacts and
//! diagnostics, and an explorer verification client with submit/poll
//! semantics. The surrounding application (UI, job storage, retry
//! scheduling) drives these components and renders their results; nothing
//! here persists state or blocks on another component.

pub mod catalog;
pub mod compiler;
pub mod core;
pub mod scanner;
pub mod verification;

pub use catalog::{RuleCatalog, VulnerabilityRule};
pub use compiler::{
    extract_contract_name, generate_types_from_abi, precheck_syntax, CompilationDiagnostic,
    CompilationResult, CompiledArtifact, DiagnosticSeverity, SolcAdapter, SyntaxCheck,
};
pub use crate::core::{Finding, ScanResult, Severity};
pub use scanner::SourceScanner;
pub use verification::{
    EndpointRegistry, SourceCheck, VerificationClient, VerificationEndpoint, VerificationRequest,
    VerificationState, VerificationStatus, VerificationSubmitResult,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
