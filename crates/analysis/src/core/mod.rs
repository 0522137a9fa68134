//! Shared data model for the analysis pipeline
//!
//! Fundamental value types flowing between the scanner, the compiler adapter
//! and the verification client. Everything here is plain data: results are
//! created once per operation, never mutated afterwards, and never cached or
//! merged across invocations.

pub mod result;
pub mod severity;

pub use result::{Finding, ScanResult};
pub use severity::Severity;
