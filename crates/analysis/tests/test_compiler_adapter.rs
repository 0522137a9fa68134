use veriscan_analysis::compiler::standard_json::StandardJsonOutput;
use veriscan_analysis::{
    extract_contract_name, precheck_syntax, CompilationResult, DiagnosticSeverity, SolcAdapter,
};

#[test]
fn external_imports_fail_fast_without_invoking_solc() {
    const SOURCE: &str = r#"
pragma solidity ^0.8.20;
import "@openzeppelin/contracts/token/ERC20/ERC20.sol";

contract MyToken is ERC20 {}
"#;

    // A nonexistent compiler path proves the fail-fast branch never spawns
    // the compiler process.
    let adapter = SolcAdapter::with_solc_path("/nonexistent/solc");
    let result = adapter.compile(SOURCE, None);

    assert!(!result.success);
    assert!(result.contracts.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("@openzeppelin"));
    assert!(result.errors[0].message.contains("Hardhat") || result.errors[0].message.contains("Foundry"));
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn invocation_failure_becomes_one_synthetic_diagnostic() {
    let adapter = SolcAdapter::with_solc_path("/nonexistent/solc");
    let result = adapter.compile("pragma solidity ^0.8.0;\ncontract A {}", None);

    assert!(!result.success);
    assert!(result.contracts.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0]
        .message
        .starts_with("Compiler invocation failed"));
}

#[test]
fn successful_output_yields_prefixed_even_length_bytecode() {
    let raw = serde_json::json!({
        "errors": [
            {"severity": "warning", "message": "SPDX license identifier not provided."}
        ],
        "contracts": {
            "Contract.sol": {
                "Counter": {
                    "abi": [
                        {"type": "function", "name": "increment", "inputs": [], "outputs": []}
                    ],
                    "evm": {
                        "bytecode": {"object": "608060405234801561001057600080fd5b50"},
                        "deployedBytecode": {"object": "6080604052348015"},
                        "gasEstimates": {
                            "creation": {
                                "codeDepositCost": "20000",
                                "executionCost": "151",
                                "totalCost": "20151"
                            },
                            "external": {"increment()": "26394"}
                        }
                    }
                }
            }
        }
    });

    let output: StandardJsonOutput = serde_json::from_value(raw).unwrap();
    let result = CompilationResult::from_standard_json(output, "Contract.sol");

    assert!(result.success);
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.contracts.len(), 1);

    let artifact = &result.contracts[0];
    assert_eq!(artifact.contract_name, "Counter");
    assert!(artifact.bytecode.starts_with("0x"));
    assert_eq!(artifact.bytecode.len() % 2, 0);
    assert!(artifact.deployed_bytecode.starts_with("0x"));

    let gas = artifact.gas_estimates.as_ref().unwrap();
    assert_eq!(
        gas.creation.as_ref().unwrap().total_cost.as_deref(),
        Some("20151")
    );
    assert_eq!(
        gas.external.as_ref().unwrap().get("increment()").map(String::as_str),
        Some("26394")
    );
}

#[test]
fn errors_suppress_partial_artifacts() {
    // solc happened to emit an artifact alongside a hard error; the result
    // must still discard it.
    let raw = serde_json::json!({
        "errors": [
            {
                "severity": "error",
                "message": "Expected ';' but got '}'",
                "formattedMessage": "ParserError: Expected ';' but got '}'",
                "sourceLocation": {"file": "Contract.sol", "start": 120, "end": 121}
            },
            {"severity": "warning", "message": "Unused local variable."}
        ],
        "contracts": {
            "Contract.sol": {
                "Broken": {"abi": [], "evm": {"bytecode": {"object": "6080"}}}
            }
        }
    });

    let output: StandardJsonOutput = serde_json::from_value(raw).unwrap();
    let result = CompilationResult::from_standard_json(output, "Contract.sol");

    assert!(!result.success);
    assert!(result.contracts.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].severity, DiagnosticSeverity::Error);
    assert_eq!(
        result.errors[0].source_location.as_ref().unwrap().start,
        120
    );
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn interface_units_keep_empty_bytecode_empty() {
    let raw = serde_json::json!({
        "contracts": {
            "Contract.sol": {
                "IToken": {
                    "abi": [{"type": "function", "name": "transfer", "inputs": [], "outputs": []}],
                    "evm": {"bytecode": {"object": ""}, "deployedBytecode": {"object": ""}}
                }
            }
        }
    });

    let output: StandardJsonOutput = serde_json::from_value(raw).unwrap();
    let result = CompilationResult::from_standard_json(output, "Contract.sol");

    assert!(result.success);
    let artifact = &result.contracts[0];
    // Empty object yields an empty string, never a bare "0x".
    assert_eq!(artifact.bytecode, "");
    assert_eq!(artifact.deployed_bytecode, "");
}

#[test]
fn no_artifacts_means_no_success_even_without_errors() {
    let output: StandardJsonOutput = serde_json::from_value(serde_json::json!({})).unwrap();
    let result = CompilationResult::from_standard_json(output, "Contract.sol");

    assert!(!result.success);
    assert!(result.errors.is_empty());
    assert!(result.contracts.is_empty());
}

#[test]
fn syntax_precheck_flags_unbalanced_braces() {
    let check = precheck_syntax("pragma solidity ^0.8.0;\ncontract Broken { function f() { }");
    assert!(!check.ok);
    assert!(!check.errors.is_empty());
}

#[test]
fn contract_name_extraction_scans_declarations() {
    let source = "pragma solidity ^0.8.0;\nlibrary SafeMath { }\ncontract Token { }";
    assert_eq!(extract_contract_name(source), Some("SafeMath".to_string()));
}
