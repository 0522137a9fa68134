//! Pure pre-compilation checks: cheap structural validation and contract
//! name extraction, usable without a compiler on the machine.

use regex::Regex;

/// Outcome of the structural pre-check. `ok` is true iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxCheck {
    pub ok: bool,
    pub errors: Vec<String>,
}

/// Validate the gross shape of a Solidity source: a pragma, at least one
/// contract/interface/library declaration, and balanced braces and parens.
/// This is not a parse — it exists to give fast, readable messages for the
/// mistakes that dominate pasted-in sources.
pub fn precheck_syntax(source: &str) -> SyntaxCheck {
    let mut errors = Vec::new();

    if !source.contains("pragma solidity") {
        errors.push("Missing pragma statement (e.g. pragma solidity ^0.8.0;)".to_string());
    }

    if !["contract", "interface", "library"]
        .iter()
        .any(|kw| source.contains(kw))
    {
        errors.push("No contract, interface or library declaration found".to_string());
    }

    let open_braces = source.matches('{').count();
    let close_braces = source.matches('}').count();
    if open_braces != close_braces {
        errors.push(format!(
            "Unbalanced braces: {open_braces} opening vs {close_braces} closing"
        ));
    }

    let open_parens = source.matches('(').count();
    let close_parens = source.matches(')').count();
    if open_parens != close_parens {
        errors.push(format!(
            "Unbalanced parentheses: {open_parens} opening vs {close_parens} closing"
        ));
    }

    SyntaxCheck {
        ok: errors.is_empty(),
        errors,
    }
}

/// Name of the first contract, interface or library declared in `source`.
pub fn extract_contract_name(source: &str) -> Option<String> {
    let pattern = Regex::new(r"(?:contract|interface|library)\s+([A-Za-z_$][A-Za-z0-9_$]*)")
        .expect("declaration pattern must compile");
    pattern
        .captures(source)
        .map(|caps| caps[1].to_string())
}
