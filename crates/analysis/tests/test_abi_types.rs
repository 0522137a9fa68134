use serde_json::{json, Value};
use std::collections::BTreeSet;
use veriscan_analysis::generate_types_from_abi;

fn sample_abi() -> Vec<Value> {
    vec![
        json!({"type": "constructor", "inputs": [{"name": "supply", "type": "uint256"}]}),
        json!({
            "type": "function",
            "name": "transfer",
            "inputs": [
                {"name": "to", "type": "address"},
                {"name": "amount", "type": "uint256"}
            ],
            "outputs": [{"name": "", "type": "bool"}]
        }),
        json!({
            "type": "function",
            "name": "batchTransfer",
            "inputs": [
                {"name": "to", "type": "address[]"},
                {"name": "amounts", "type": "uint256[]"}
            ],
            "outputs": []
        }),
        json!({
            "type": "function",
            "name": "metadata",
            "inputs": [],
            "outputs": [
                {"name": "name", "type": "string"},
                {"name": "decimals", "type": "uint8"}
            ]
        }),
        json!({"type": "event", "name": "Transfer", "inputs": []}),
    ]
}

/// Re-parse generated declarations for the names they declare.
fn declared_functions(types: &str) -> BTreeSet<String> {
    types
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let open = line.find('(')?;
            line.ends_with(';').then(|| line[..open].to_string())
        })
        .collect()
}

#[test]
fn generated_declarations_cover_exactly_the_function_entries() {
    let types = generate_types_from_abi("Token", &sample_abi());
    let declared = declared_functions(&types);

    let expected: BTreeSet<String> = ["transfer", "batchTransfer", "metadata"]
        .into_iter()
        .map(String::from)
        .collect();

    assert_eq!(declared, expected);
}

#[test]
fn signatures_use_the_mapped_types() {
    let types = generate_types_from_abi("Token", &sample_abi());

    assert!(types.contains("transfer(to: string, amount: bigint): Promise<boolean>;"));
    assert!(types.contains("batchTransfer(to: string[], amounts: bigint[]): Promise<void>;"));
    assert!(types.contains("metadata(): Promise<[string, bigint]>;"));
}

#[test]
fn empty_abi_yields_an_empty_interface() {
    let types = generate_types_from_abi("Empty", &[]);
    assert_eq!(types, "export interface Empty {\n}\n");
}
