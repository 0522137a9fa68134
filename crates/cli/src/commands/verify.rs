//! Verification commands.
//!
//! The poll loop lives here, not in the client: the client performs exactly
//! one round-trip per call, and the orchestrating side owns cadence and the
//! decision to give up.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::*;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use veriscan_analysis::{
    extract_contract_name, VerificationClient, VerificationRequest, VerificationState,
};

const POLL_INTERVAL: Duration = Duration::from_secs(5);
const POLL_DEADLINE: Duration = Duration::from_secs(600);

#[derive(Args)]
pub struct VerifyArgs {
    /// Solidity source file that was deployed
    #[arg(short, long)]
    pub input: PathBuf,

    /// Deployed contract address (0x-prefixed)
    #[arg(short, long)]
    pub address: String,

    /// Chain id of the deployment (e.g. 1, 137, 42161)
    #[arg(short, long)]
    pub chain: u64,

    /// Full compiler version string, e.g. v0.8.20+commit.a1b79de6
    #[arg(long)]
    pub compiler_version: String,

    /// Contract name; extracted from the source when omitted
    #[arg(long)]
    pub contract_name: Option<String>,

    /// Hex-encoded ABI-packed constructor arguments
    #[arg(long)]
    pub constructor_args: Option<String>,

    /// Optimizer runs used for the deployed build
    #[arg(long, default_value_t = veriscan_analysis::verification::DEFAULT_OPTIMIZER_RUNS)]
    pub runs: u32,

    /// The deployed build did not have the optimizer enabled
    #[arg(long)]
    pub no_optimizer: bool,

    /// Explorer API key
    #[arg(long, env = "ETHERSCAN_API_KEY")]
    pub api_key: Option<String>,

    /// Poll the job until it reaches a terminal state
    #[arg(long)]
    pub watch: bool,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Chain id the job was submitted on
    #[arg(short, long)]
    pub chain: u64,

    /// Job guid returned by the submit call
    #[arg(short, long)]
    pub job: String,

    /// Explorer API key
    #[arg(long, env = "ETHERSCAN_API_KEY")]
    pub api_key: String,
}

pub async fn execute(args: VerifyArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let contract_name = match args.contract_name {
        Some(name) => name,
        None => extract_contract_name(&source)
            .context("no contract declaration found; pass --contract-name")?,
    };

    let client = VerificationClient::new();

    let already = client
        .is_verified(args.chain, &args.address, args.api_key.as_deref())
        .await;
    if already.verified {
        println!("{}", "Contract source is already verified.".green());
        return Ok(());
    }

    let request = VerificationRequest {
        chain_id: args.chain,
        contract_address: args.address.clone(),
        source_code: source,
        contract_name,
        compiler_version: args.compiler_version,
        optimization_used: !args.no_optimizer,
        runs: args.runs,
        constructor_arguments: args.constructor_args,
        api_key: args.api_key.clone(),
    };

    let submitted = client.submit(&request).await;
    if !submitted.success {
        bail!("submission failed: {}", submitted.message);
    }

    println!("{} {}", "Submitted:".green().bold(), submitted.message);
    let job_id = submitted
        .job_id
        .context("explorer accepted the submission but returned no job id")?;
    println!("  Job: {job_id}");
    if let Some(url) = &submitted.explorer_url {
        println!("  Explorer: {url}");
    }

    if !args.watch {
        return Ok(());
    }

    let api_key = args.api_key.unwrap_or_default();
    let started = std::time::Instant::now();

    loop {
        tokio::time::sleep(POLL_INTERVAL).await;

        let status = client.poll_status(args.chain, &job_id, &api_key).await;
        match status.state {
            VerificationState::Pass => {
                println!("{} {}", "Verified:".green().bold(), status.message);
                return Ok(());
            }
            VerificationState::Fail => {
                bail!("verification failed: {}", status.message);
            }
            VerificationState::Pending => {
                println!("  {} {}", "pending".yellow(), status.message.dimmed());
            }
            VerificationState::Unknown => {
                println!("  {} {}", "unknown".red(), status.message.dimmed());
            }
        }

        if started.elapsed() > POLL_DEADLINE {
            bail!("gave up waiting for verification after {POLL_DEADLINE:?}");
        }
    }
}

pub async fn execute_status(args: StatusArgs) -> Result<()> {
    let client = VerificationClient::new();
    let status = client.poll_status(args.chain, &args.job, &args.api_key).await;

    println!("{}: {}", status.state, status.message);
    if status.state == VerificationState::Fail {
        bail!("verification failed");
    }
    Ok(())
}
