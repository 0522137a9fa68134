use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::fs;
use std::path::PathBuf;
use veriscan_analysis::{precheck_syntax, SolcAdapter};

#[derive(Args)]
pub struct CompileArgs {
    /// Solidity source file to compile
    #[arg(short, long)]
    pub input: PathBuf,

    /// solc binary to invoke (defaults to `solc` on PATH)
    #[arg(long)]
    pub solc: Option<PathBuf>,

    /// Emit the full compilation result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: CompileArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let check = precheck_syntax(&source);
    if !check.ok {
        println!("{}", "Pre-check warnings:".yellow().bold());
        for error in &check.errors {
            println!("  - {error}");
        }
        println!();
    }

    let adapter = match &args.solc {
        Some(path) => SolcAdapter::with_solc_path(path),
        None => SolcAdapter::new(),
    };

    let file_name = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().to_string());
    let result = adapter.compile(&source, file_name.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for warning in &result.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning.message);
    }
    for error in &result.errors {
        let text = error.formatted_message.as_deref().unwrap_or(&error.message);
        println!("{} {}", "error:".red().bold(), text);
    }

    if result.success {
        println!("{}", "Compilation succeeded.".green().bold());
        for artifact in &result.contracts {
            let code_size = artifact.bytecode.len().saturating_sub(2) / 2;
            println!(
                "  {} — {} ABI entries, {} bytes of creation code",
                artifact.contract_name.bold(),
                artifact.abi.len(),
                code_size
            );
        }
    } else {
        println!("{}", "Compilation failed.".red().bold());
    }

    Ok(())
}
