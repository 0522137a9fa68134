use veriscan_analysis::{RuleCatalog, Severity, SourceScanner};

#[test]
fn empty_source_scores_perfect() {
    let scanner = SourceScanner::with_builtin_catalog();
    let result = scanner.scan("");

    assert!(result.findings.is_empty());
    assert_eq!(result.score, 100);
    assert_eq!(result.code_quality_percent, 100);
    assert_eq!(result.gas_optimization_count, 0);
}

#[test]
fn single_reentrancy_line_scores_75() {
    let scanner = SourceScanner::with_builtin_catalog();
    let result = scanner.scan("x.call{value: 1}();");

    assert_eq!(result.findings.len(), 1);
    let finding = &result.findings[0];
    assert_eq!(finding.severity, Severity::Critical);
    assert_eq!(finding.line, 1);
    assert_eq!(finding.id, "reentrancy-1");
    assert_eq!(result.score, 75);
}

#[test]
fn critical_plus_high_scores_60() {
    let scanner = SourceScanner::with_builtin_catalog();
    let result = scanner.scan("x.call{value: 1}();\nrequire(tx.origin == owner);\n");

    assert_eq!(result.findings.len(), 2);
    assert_eq!(result.score, 100 - 25 - 15);
}

#[test]
fn score_clamps_at_zero() {
    let scanner = SourceScanner::with_builtin_catalog();
    let source = "x.call{value: 1}();\n".repeat(10);
    let result = scanner.scan(&source);

    assert_eq!(result.findings.len(), 10);
    assert_eq!(result.score, 0);
}

#[test]
fn scan_is_deterministic_modulo_timestamp() {
    const SOURCE: &str = r#"
pragma solidity ^0.6.12;

contract Vault {
    address[] public depositors;

    function sweep(address payable to) external {
        require(tx.origin == owner);
        for (uint i = 0; i < depositors.length; i++) {
            to.call{value: balances[depositors[i]]}("");
        }
        selfdestruct(to);
    }
}
"#;

    let scanner = SourceScanner::with_builtin_catalog();
    let first = scanner.scan(SOURCE);
    let second = scanner.scan(SOURCE);

    assert_eq!(first.findings, second.findings);
    assert_eq!(first.score, second.score);
    assert_eq!(first.gas_optimization_count, second.gas_optimization_count);
    assert_eq!(first.code_quality_percent, second.code_quality_percent);
}

#[test]
fn gas_and_quality_metrics_are_derived_from_findings() {
    const SOURCE: &str = r#"
contract Airdrop {
    function drop(address[] calldata to) external {
        for (uint i = 0; i < to.length; i++) {
            unchecked { total += 1; }
        }
    }
}
"#;

    let scanner = SourceScanner::with_builtin_catalog();
    let result = scanner.scan(SOURCE);

    // One loop-length (Gas Optimization) and one unchecked (info) finding.
    assert_eq!(result.findings.len(), 2);
    assert_eq!(result.gas_optimization_count, 1);
    assert_eq!(result.code_quality_percent, 100 - 5 * 2);
    // loop-length is the sole scoring finding: low severity, minus 3.
    assert_eq!(result.score, 97);
}

#[test]
fn all_rules_run_on_every_line() {
    // The same rule firing on two lines must produce two distinct findings.
    let scanner = SourceScanner::with_builtin_catalog();
    let result = scanner.scan("selfdestruct(a);\nselfdestruct(b);");

    let ids: Vec<&str> = result.findings.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["selfdestruct-1", "selfdestruct-2"]);
}

#[test]
fn severity_accessors_reflect_the_finding_set() {
    let scanner = SourceScanner::with_builtin_catalog();
    let result = scanner.scan("x.call{value: 1}();\nselfdestruct(a);\n");

    assert_eq!(result.max_severity(), Some(Severity::Critical));
    assert_eq!(result.findings_by_severity(Severity::Critical).len(), 1);
    assert_eq!(result.findings_by_severity(Severity::High).len(), 1);
    assert!(result.findings_by_severity(Severity::Medium).is_empty());
}

#[test]
fn empty_catalog_disables_all_findings() {
    let scanner = SourceScanner::new(RuleCatalog::from_rules(Vec::new()));
    let result = scanner.scan("x.call{value: 1}();");
    assert!(result.findings.is_empty());
    assert_eq!(result.score, 100);
}
