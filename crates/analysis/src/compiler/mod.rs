//! Compiler adapter: solc invocation, diagnostic normalization, artifact
//! extraction, and the pure helpers (syntax pre-check, name extraction, ABI
//! type generation) that need no compiler at all.

pub mod abi;
pub mod adapter;
pub mod artifacts;
pub mod standard_json;
pub mod syntax;

pub use abi::{generate_types_from_abi, map_solidity_type};
pub use adapter::{SolcAdapter, SolcError, DEFAULT_FILE_NAME};
pub use artifacts::{
    CompilationDiagnostic, CompilationResult, CompiledArtifact, DiagnosticSeverity,
};
pub use standard_json::{StandardJsonInput, StandardJsonOutput};
pub use syntax::{extract_contract_name, precheck_syntax, SyntaxCheck};
