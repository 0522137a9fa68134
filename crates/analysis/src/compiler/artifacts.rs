use crate::compiler::standard_json::{
    GasEstimates, SolcSourceLocation, StandardJsonOutput,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// One normalized compiler diagnostic. Diagnostics are data, not errors:
/// several can coexist in one result and none is ever thrown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilationDiagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location: Option<SolcSourceLocation>,
}

impl CompilationDiagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            message: message.into(),
            formatted_message: None,
            source_location: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            message: message.into(),
            formatted_message: None,
            source_location: None,
        }
    }
}

/// Compiled output for one contract, interface or library unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompiledArtifact {
    pub contract_name: String,

    /// Ordered ABI entries exactly as solc emitted them.
    pub abi: Vec<serde_json::Value>,

    /// Creation bytecode, `0x`-prefixed hex. Empty string (not `"0x"`) when
    /// the unit produced no code, e.g. an interface.
    pub bytecode: String,

    /// Runtime bytecode, same encoding convention as `bytecode`.
    pub deployed_bytecode: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_estimates: Option<GasEstimates>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilationResult {
    pub success: bool,
    pub contracts: Vec<CompiledArtifact>,
    pub errors: Vec<CompilationDiagnostic>,
    pub warnings: Vec<CompilationDiagnostic>,
}

impl CompilationResult {
    /// A failed result carrying the given diagnostics. Hard errors and
    /// artifacts are mutually exclusive, so `contracts` is always empty here.
    pub fn failure(
        errors: Vec<CompilationDiagnostic>,
        warnings: Vec<CompilationDiagnostic>,
    ) -> Self {
        Self {
            success: false,
            contracts: Vec::new(),
            errors,
            warnings,
        }
    }

    /// Normalize a decoded `solc --standard-json` response.
    ///
    /// Diagnostics keep solc's ordering. Non-error severities (including
    /// solc's occasional `info`) land in `warnings`. When any error is
    /// present every artifact is discarded, even if solc emitted partial
    /// ones. `success` requires both a clean error list and at least one
    /// artifact for the virtual file.
    pub fn from_standard_json(output: StandardJsonOutput, file_name: &str) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for diag in output.errors {
            let severity = if diag.severity == "error" {
                DiagnosticSeverity::Error
            } else {
                DiagnosticSeverity::Warning
            };
            let normalized = CompilationDiagnostic {
                severity,
                message: diag.message,
                formatted_message: diag.formatted_message,
                source_location: diag.source_location,
            };
            match severity {
                DiagnosticSeverity::Error => errors.push(normalized),
                DiagnosticSeverity::Warning => warnings.push(normalized),
            }
        }

        if !errors.is_empty() {
            return Self::failure(errors, warnings);
        }

        let mut contracts = Vec::new();
        if let Some(units) = output.contracts.get(file_name) {
            for (name, unit) in units {
                let (bytecode, deployed_bytecode, gas_estimates) = match &unit.evm {
                    Some(evm) => (
                        prefix_hex(evm.bytecode.as_ref().map(|b| b.object.as_str())),
                        prefix_hex(evm.deployed_bytecode.as_ref().map(|b| b.object.as_str())),
                        evm.gas_estimates.clone(),
                    ),
                    None => (String::new(), String::new(), None),
                };

                contracts.push(CompiledArtifact {
                    contract_name: name.clone(),
                    abi: unit.abi.clone(),
                    bytecode,
                    deployed_bytecode,
                    gas_estimates,
                });
            }
        }

        Self {
            success: !contracts.is_empty(),
            contracts,
            errors,
            warnings,
        }
    }
}

/// `0x`-prefix a bytecode object; an absent or empty object yields an empty
/// string, never a bare `"0x"`.
fn prefix_hex(object: Option<&str>) -> String {
    match object {
        Some(hex) if !hex.is_empty() => format!("0x{hex}"),
        _ => String::new(),
    }
}
