//! The `solc --standard-json` input and output wire shapes.
//!
//! Only the fields this pipeline selects are modelled; anything else solc
//! emits is ignored during deserialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const OPTIMIZER_RUNS: u32 = 200;

#[derive(Debug, Serialize)]
pub struct StandardJsonInput {
    pub language: String,
    pub sources: BTreeMap<String, SourceFile>,
    pub settings: Settings,
}

#[derive(Debug, Serialize)]
pub struct SourceFile {
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub optimizer: Optimizer,
    pub output_selection: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Serialize)]
pub struct Optimizer {
    pub enabled: bool,
    pub runs: u32,
}

impl StandardJsonInput {
    /// The fixed compilation request: optimizer on, 200 runs, ABI plus both
    /// bytecode forms and gas estimates selected, single virtual source.
    pub fn single_source(file_name: &str, content: &str) -> Self {
        let mut sources = BTreeMap::new();
        sources.insert(
            file_name.to_string(),
            SourceFile {
                content: content.to_string(),
            },
        );

        let mut selection = BTreeMap::new();
        let mut per_contract = BTreeMap::new();
        per_contract.insert(
            "*".to_string(),
            vec![
                "abi".to_string(),
                "evm.bytecode".to_string(),
                "evm.deployedBytecode".to_string(),
                "evm.gasEstimates".to_string(),
            ],
        );
        selection.insert("*".to_string(), per_contract);

        Self {
            language: "Solidity".to_string(),
            sources,
            settings: Settings {
                optimizer: Optimizer {
                    enabled: true,
                    runs: OPTIMIZER_RUNS,
                },
                output_selection: selection,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StandardJsonOutput {
    #[serde(default)]
    pub errors: Vec<SolcDiagnostic>,
    /// `contracts[file][contract]`.
    #[serde(default)]
    pub contracts: BTreeMap<String, BTreeMap<String, SolcContract>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolcDiagnostic {
    pub severity: String,
    pub message: String,
    #[serde(default)]
    pub formatted_message: Option<String>,
    #[serde(default)]
    pub source_location: Option<SolcSourceLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolcSourceLocation {
    pub file: String,
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolcContract {
    #[serde(default)]
    pub abi: Vec<serde_json::Value>,
    #[serde(default)]
    pub evm: Option<SolcEvm>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolcEvm {
    #[serde(default)]
    pub bytecode: Option<BytecodeObject>,
    #[serde(default)]
    pub deployed_bytecode: Option<BytecodeObject>,
    #[serde(default)]
    pub gas_estimates: Option<GasEstimates>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BytecodeObject {
    #[serde(default)]
    pub object: String,
}

/// solc reports gas figures as decimal strings, with `"infinite"` for
/// unbounded paths, so the values stay strings here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasEstimates {
    #[serde(default)]
    pub creation: Option<CreationGas>,
    #[serde(default)]
    pub external: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationGas {
    #[serde(default)]
    pub code_deposit_cost: Option<String>,
    #[serde(default)]
    pub execution_cost: Option<String>,
    #[serde(default)]
    pub total_cost: Option<String>,
}
