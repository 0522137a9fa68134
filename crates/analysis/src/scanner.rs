//! Heuristic source scanner
//!
//! ## Design: deliberately a pattern pass, not a semantic analyzer
//!
//! The scanner applies every catalog rule to every source line and reports
//! each hit as a separate finding. There is no parsing, no data flow and no
//! cross-line matching — a pattern split across lines is a known, accepted
//! false negative, and a pattern inside a comment is a known, accepted false
//! positive. That trade keeps a full scan effectively instant and its output
//! fully explainable: every finding points at one line and one rule.
//!
//! Downstream severity badges and fixtures key off the exact scoring weights,
//! so the derivation is part of the contract:
//!
//! - score starts at 100; each critical finding subtracts 25, high 15,
//!   medium 8, low 3, info 0; the result is clamped to 0..=100
//! - `gas_optimization_count` counts findings in the "Gas Optimization"
//!   category
//! - `code_quality_percent` is `max(0, 100 - 5 * total findings)`

use crate::catalog::RuleCatalog;
use crate::core::{Finding, ScanResult};
use chrono::Utc;
use tracing::debug;

pub struct SourceScanner {
    catalog: RuleCatalog,
}

impl SourceScanner {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn with_builtin_catalog() -> Self {
        Self::new(RuleCatalog::builtin())
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Scan `source` line by line against the full catalog.
    ///
    /// Pure with respect to shared state: any input, including the empty
    /// string, yields a valid [`ScanResult`]. A line can contribute findings
    /// from several rules and a rule can fire on several lines; each hit is a
    /// distinct finding with id `<rule id>-<line>`.
    pub fn scan(&self, source: &str) -> ScanResult {
        let lines: Vec<&str> = source.lines().collect();
        let mut findings = Vec::new();

        for rule in self.catalog.rules() {
            for (index, line) in lines.iter().enumerate() {
                if rule.matcher.is_match(line) {
                    let line_number = index + 1;
                    findings.push(Finding {
                        id: format!("{}-{}", rule.id, line_number),
                        severity: rule.severity,
                        title: rule.title.to_string(),
                        description: rule.description.to_string(),
                        line: line_number,
                        recommendation: rule.recommendation.to_string(),
                        category: rule.category.to_string(),
                    });
                }
            }
        }

        let penalty: u32 = findings.iter().map(|f| f.severity.score_penalty()).sum();
        let score = 100u32.saturating_sub(penalty);

        let gas_optimization_count = findings
            .iter()
            .filter(|f| f.category == "Gas Optimization")
            .count();

        let code_quality_percent = 100u32.saturating_sub(5 * findings.len() as u32);

        debug!(
            findings = findings.len(),
            score, "source scan complete"
        );

        ScanResult {
            score,
            findings,
            scanned_at: Utc::now(),
            gas_optimization_count,
            code_quality_percent,
        }
    }
}

impl Default for SourceScanner {
    fn default() -> Self {
        Self::with_builtin_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn one_line_can_hit_multiple_rules() {
        let scanner = SourceScanner::with_builtin_catalog();
        // tx.origin and block.timestamp on the same line.
        let result = scanner.scan("require(tx.origin == owner && block.timestamp > deadline);");

        assert_eq!(result.findings.len(), 2);
        assert!(result.findings.iter().all(|f| f.line == 1));
        assert_eq!(result.score, 100 - 15 - 3);
    }

    #[test]
    fn finding_ids_carry_rule_and_line() {
        let scanner = SourceScanner::with_builtin_catalog();
        let result = scanner.scan("// fine\nselfdestruct(payable(owner));\n");

        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].id, "selfdestruct-2");
        assert_eq!(result.findings[0].severity, Severity::High);
    }

    #[test]
    fn substituted_catalog_is_honored() {
        let scanner = SourceScanner::new(RuleCatalog::from_rules(Vec::new()));
        let result = scanner.scan("selfdestruct(payable(owner));");

        assert!(result.findings.is_empty());
        assert_eq!(result.score, 100);
    }
}
