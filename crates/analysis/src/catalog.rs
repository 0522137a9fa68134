//! Vulnerability rule catalog
//!
//! The ordered, immutable set of pattern rules the source scanner applies.
//! Rules are compiled into the process at startup; there is no mutation API,
//! no disk access and no network access. Ordering is stable so that the
//! finding iteration order of a scan is reproducible.

use crate::core::Severity;
use regex::Regex;

/// One immutable catalog entry. The matcher is evaluated per source line.
#[derive(Debug, Clone)]
pub struct VulnerabilityRule {
    /// Stable string key, e.g. `reentrancy`.
    pub id: &'static str,
    pub matcher: Regex,
    pub severity: Severity,
    pub title: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
    pub category: &'static str,
}

impl VulnerabilityRule {
    fn new(
        id: &'static str,
        pattern: &str,
        severity: Severity,
        title: &'static str,
        description: &'static str,
        recommendation: &'static str,
        category: &'static str,
    ) -> Self {
        Self {
            id,
            matcher: Regex::new(pattern).expect("builtin rule pattern must compile"),
            severity,
            title,
            description,
            recommendation,
            category,
        }
    }
}

/// Ordered rule set consumed by [`crate::scanner::SourceScanner`].
///
/// Constructed once and injected rather than read as ambient global state,
/// so the scanner stays testable with a substituted catalog.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<VulnerabilityRule>,
}

impl RuleCatalog {
    pub fn from_rules(rules: Vec<VulnerabilityRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[VulnerabilityRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The builtin catalog. Pure, deterministic and order-stable: callers may
    /// rely on rule order being identical across processes and releases.
    pub fn builtin() -> Self {
        Self::from_rules(vec![
            VulnerabilityRule::new(
                "reentrancy",
                r"\.call\{value:",
                Severity::Critical,
                "Potential Reentrancy Vulnerability",
                "A low-level call forwarding value was found. External calls that \
                 transfer ether can re-enter the calling contract before state \
                 updates complete.",
                "Apply the checks-effects-interactions pattern or a reentrancy \
                 guard before making external calls with value.",
                "Security",
            ),
            VulnerabilityRule::new(
                "tx-origin",
                r"tx\.origin",
                Severity::High,
                "Use of tx.origin for Authorization",
                "tx.origin refers to the original transaction sender, so any \
                 contract the user interacts with can act on their behalf.",
                "Use msg.sender for authorization checks instead of tx.origin.",
                "Security",
            ),
            VulnerabilityRule::new(
                "selfdestruct",
                r"selfdestruct",
                Severity::High,
                "Use of selfdestruct",
                "selfdestruct removes the contract from the chain and force-sends \
                 its balance, which can break contracts that depend on it.",
                "Prefer a withdrawal pattern and a disabled state over destroying \
                 the contract.",
                "Security",
            ),
            VulnerabilityRule::new(
                "timestamp",
                r"block\.timestamp",
                Severity::Low,
                "Block Timestamp Dependence",
                "block.timestamp can be manipulated by miners within roughly 15 \
                 seconds and must not be used as a randomness or precision-timing \
                 source.",
                "Use block.number for coarse ordering, or an oracle for \
                 randomness.",
                "Best Practices",
            ),
            VulnerabilityRule::new(
                "assembly",
                r"assembly\s*\{",
                Severity::Medium,
                "Inline Assembly Usage",
                "Inline assembly bypasses Solidity safety checks and is easy to \
                 get wrong.",
                "Avoid assembly unless strictly necessary and document every \
                 block that remains.",
                "Code Quality",
            ),
            VulnerabilityRule::new(
                "old-solidity",
                r"pragma\s+solidity\s*[\^~>=<]*\s*0\.[0-6]\.",
                Severity::Medium,
                "Outdated Solidity Version",
                "Compiler versions below 0.7.x lack builtin overflow checks and \
                 several safety fixes.",
                "Upgrade the pragma to a maintained 0.8.x compiler release.",
                "Best Practices",
            ),
            VulnerabilityRule::new(
                "public-array",
                r"\[\]\s+public",
                Severity::Low,
                "Public State Array",
                "Public arrays expose an index-based getter only; iterating them \
                 from other contracts is gas-expensive and error-prone.",
                "Add an explicit getter returning the data the callers actually \
                 need.",
                "Code Quality",
            ),
            VulnerabilityRule::new(
                "loop-length",
                r"for\s*\([^)]*\.length",
                Severity::Low,
                "Storage Length Read in Loop Condition",
                "Reading a collection's length in the loop condition re-reads \
                 storage on every iteration.",
                "Cache the length in a local variable before the loop.",
                "Gas Optimization",
            ),
            VulnerabilityRule::new(
                "unchecked",
                r"unchecked\s*\{",
                Severity::Info,
                "Unchecked Arithmetic Block",
                "Arithmetic inside unchecked blocks silently wraps on overflow.",
                "Confirm the surrounding invariants make overflow impossible and \
                 document why the block is safe.",
                "Best Practices",
            ),
            VulnerabilityRule::new(
                "delegatecall",
                r"\.delegatecall",
                Severity::High,
                "Use of delegatecall",
                "delegatecall executes foreign code in this contract's storage \
                 context; a hostile target can take over the contract.",
                "Restrict delegatecall targets to immutable, audited addresses.",
                "Security",
            ),
        ])
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
