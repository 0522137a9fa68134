use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
use commands::{compile::CompileArgs, scan::ScanArgs, verify::StatusArgs, verify::VerifyArgs};

#[derive(Parser)]
#[command(name = "veriscan")]
#[command(about = "Contract analysis and verification pipeline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan Solidity source for known vulnerability patterns
    Scan(ScanArgs),

    /// Compile a single-file contract with solc
    Compile(CompileArgs),

    /// Submit a deployed contract for explorer source verification
    Verify(VerifyArgs),

    /// Poll the status of a verification job
    Status(StatusArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => commands::scan::execute(args),
        Commands::Compile(args) => commands::compile::execute(args),
        Commands::Verify(args) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(commands::verify::execute(args))
        }
        Commands::Status(args) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(commands::verify::execute_status(args))
        }
    }
}
