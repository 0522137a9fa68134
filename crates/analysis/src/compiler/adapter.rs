//! Solidity compiler adapter
//!
//! Drives `solc --standard-json` over stdin/stdout and normalizes whatever
//! comes back — diagnostics, artifacts or a hard invocation failure — into a
//! [`CompilationResult`]. The adapter never returns `Err`: a crashed or
//! missing compiler becomes a single synthetic error diagnostic, so the
//! caller composes the same way in every failure mode.
//!
//! External package imports (`@openzeppelin/...` and friends) cannot be
//! resolved in a single virtual source file; they are detected up front and
//! answered with guidance instead of a doomed compiler run.

use crate::compiler::artifacts::{CompilationDiagnostic, CompilationResult};
use crate::compiler::standard_json::{StandardJsonInput, StandardJsonOutput};
use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

pub const DEFAULT_FILE_NAME: &str = "Contract.sol";

pub struct SolcAdapter {
    solc_path: PathBuf,
    import_matcher: Regex,
}

impl SolcAdapter {
    pub fn new() -> Self {
        Self::with_solc_path("solc")
    }

    pub fn with_solc_path(path: impl Into<PathBuf>) -> Self {
        Self {
            solc_path: path.into(),
            import_matcher: Regex::new(r#"import\s+[^;]*["']@"#)
                .expect("import pattern must compile"),
        }
    }

    /// True when the source pulls in a package-style import that needs a
    /// module resolution strategy this adapter does not have. Any mention of
    /// the `@openzeppelin/` prefix counts as the marker even outside an
    /// import line, matching the heuristic the callers expect.
    pub fn has_external_import(&self, source: &str) -> bool {
        self.import_matcher.is_match(source) || source.contains("@openzeppelin/")
    }

    /// Compile a single virtual source file with the fixed pipeline settings
    /// (optimizer on, 200 runs, full output selection).
    pub fn compile(&self, source: &str, file_name: Option<&str>) -> CompilationResult {
        let file_name = file_name.unwrap_or(DEFAULT_FILE_NAME);

        if self.has_external_import(source) {
            debug!(file_name, "external package import detected, skipping solc");
            return CompilationResult::failure(
                vec![CompilationDiagnostic::error(
                    "This contract imports external packages (e.g. @openzeppelin), which \
                     cannot be resolved in-process. Compile it with a framework that \
                     performs dependency resolution, such as Hardhat or Foundry, and use \
                     the artifact it produces.",
                )],
                vec![CompilationDiagnostic::warning(
                    "Import resolution is limited to a single virtual source file; \
                     only self-contained contracts can be compiled here.",
                )],
            );
        }

        let input = StandardJsonInput::single_source(file_name, source);
        match self.invoke(&input) {
            Ok(output) => CompilationResult::from_standard_json(output, file_name),
            Err(err) => {
                warn!(error = %err, "solc invocation failed");
                CompilationResult::failure(
                    vec![CompilationDiagnostic::error(format!(
                        "Compiler invocation failed: {err}"
                    ))],
                    Vec::new(),
                )
            }
        }
    }

    /// Run the compiler process once. Invocation-level problems (spawn, IO,
    /// undecodable output) surface as [`SolcError`]; compilation problems do
    /// not — those arrive as diagnostics inside the decoded output.
    fn invoke(&self, input: &StandardJsonInput) -> Result<StandardJsonOutput, SolcError> {
        let payload = serde_json::to_vec(input)?;

        let mut child = Command::new(&self.solc_path)
            .arg("--standard-json")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SolcError::Spawn(self.solc_path.display().to_string(), e))?;

        child
            .stdin
            .take()
            .ok_or(SolcError::StdinUnavailable)?
            .write_all(&payload)?;

        let output = child.wait_with_output()?;
        if !output.status.success() && output.stdout.is_empty() {
            return Err(SolcError::Exited(
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

impl Default for SolcAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SolcError {
    #[error("failed to spawn compiler at '{0}': {1}")]
    Spawn(String, #[source] std::io::Error),

    #[error("compiler stdin was not captured")]
    StdinUnavailable,

    #[error("compiler IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("compiler exited with status {0:?}: {1}")]
    Exited(Option<i32>, String),

    #[error("compiler output was not valid standard JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_scoped_package_imports() {
        let adapter = SolcAdapter::new();
        assert!(adapter.has_external_import(
            "import \"@openzeppelin/contracts/token/ERC20/ERC20.sol\";"
        ));
        assert!(adapter.has_external_import("import '@chainlink/contracts/src/v0.8/A.sol';"));
        assert!(!adapter.has_external_import("import \"./Library.sol\";"));
        assert!(!adapter.has_external_import("contract A {}"));
    }
}
