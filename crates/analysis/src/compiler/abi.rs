//! TypeScript binding generation from a contract ABI.
//!
//! Maps Solidity types onto the narrowest TypeScript equivalents the UI uses:
//! every integer width becomes `bigint`, addresses and byte strings become
//! `string`, and arrays map recursively.

use serde_json::Value;

/// Render a TypeScript interface declaration for the `function` entries of
/// `abi`. Non-function entries (constructor, events, errors) are skipped.
pub fn generate_types_from_abi(contract_name: &str, abi: &[Value]) -> String {
    let mut out = String::new();
    out.push_str(&format!("export interface {contract_name} {{\n"));

    for entry in abi {
        if entry.get("type").and_then(Value::as_str) != Some("function") {
            continue;
        }
        let Some(name) = entry.get("name").and_then(Value::as_str) else {
            continue;
        };

        let params = entry
            .get("inputs")
            .and_then(Value::as_array)
            .map(|inputs| {
                inputs
                    .iter()
                    .enumerate()
                    .map(|(i, input)| {
                        let param_name = input
                            .get("name")
                            .and_then(Value::as_str)
                            .filter(|n| !n.is_empty())
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("arg{i}"));
                        let ty = input.get("type").and_then(Value::as_str).unwrap_or("");
                        format!("{param_name}: {}", map_solidity_type(ty))
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();

        let outputs: Vec<String> = entry
            .get("outputs")
            .and_then(Value::as_array)
            .map(|outputs| {
                outputs
                    .iter()
                    .map(|o| {
                        let ty = o.get("type").and_then(Value::as_str).unwrap_or("");
                        map_solidity_type(ty)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let return_type = match outputs.len() {
            0 => "void".to_string(),
            1 => outputs[0].clone(),
            _ => format!("[{}]", outputs.join(", ")),
        };

        out.push_str(&format!("  {name}({params}): Promise<{return_type}>;\n"));
    }

    out.push_str("}\n");
    out
}

/// Map one Solidity type name to TypeScript. Unknown types fall back to
/// `any` rather than failing the whole generation.
pub fn map_solidity_type(solidity_type: &str) -> String {
    if let Some(inner) = solidity_type.strip_suffix("[]") {
        return format!("{}[]", map_solidity_type(inner));
    }
    if solidity_type.starts_with("uint") || solidity_type.starts_with("int") {
        return "bigint".to_string();
    }
    if solidity_type == "address" || solidity_type.starts_with("bytes") {
        return "string".to_string();
    }
    match solidity_type {
        "bool" => "boolean".to_string(),
        "string" => "string".to_string(),
        _ => "any".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_core_types() {
        assert_eq!(map_solidity_type("uint256"), "bigint");
        assert_eq!(map_solidity_type("int8"), "bigint");
        assert_eq!(map_solidity_type("address"), "string");
        assert_eq!(map_solidity_type("bytes32"), "string");
        assert_eq!(map_solidity_type("bool"), "boolean");
        assert_eq!(map_solidity_type("address[]"), "string[]");
        assert_eq!(map_solidity_type("uint256[][]"), "bigint[][]");
        assert_eq!(map_solidity_type("tuple"), "any");
    }

    #[test]
    fn skips_non_function_entries() {
        let abi = vec![
            json!({"type": "constructor", "inputs": []}),
            json!({"type": "event", "name": "Transfer", "inputs": []}),
            json!({
                "type": "function",
                "name": "balanceOf",
                "inputs": [{"name": "owner", "type": "address"}],
                "outputs": [{"name": "", "type": "uint256"}]
            }),
        ];

        let types = generate_types_from_abi("Token", &abi);
        assert!(types.contains("export interface Token {"));
        assert!(types.contains("balanceOf(owner: string): Promise<bigint>;"));
        assert!(!types.contains("Transfer"));
    }
}
