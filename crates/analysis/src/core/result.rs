use crate::core::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One concrete match of a vulnerability rule at a specific source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Unique within one scan: `<rule id>-<line>`.
    pub id: String,

    pub severity: Severity,

    pub title: String,

    pub description: String,

    /// 1-based source line the rule fired on.
    pub line: usize,

    pub recommendation: String,

    pub category: String,
}

/// The complete outcome of one scan invocation. Built atomically when the
/// scan finishes; callers never observe a partially filled result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Severity-weighted security score, clamped to 0..=100.
    pub score: u32,

    pub findings: Vec<Finding>,

    pub scanned_at: DateTime<Utc>,

    /// Findings whose rule category is "Gas Optimization".
    pub gas_optimization_count: usize,

    /// `max(0, 100 - 5 * total findings)`.
    pub code_quality_percent: u32,
}

impl ScanResult {
    pub fn findings_by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .collect()
    }

    pub fn max_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| f.severity).max()
    }
}
