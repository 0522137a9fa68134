use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use colored::*;
use std::fs;
use std::path::PathBuf;
use veriscan_analysis::{Severity, SourceScanner};

#[derive(Args)]
pub struct ScanArgs {
    /// Solidity source file to scan
    #[arg(short, long)]
    pub input: PathBuf,

    /// Emit the full scan result as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when any finding at or above this severity exists
    #[arg(long, value_enum)]
    pub min_severity: Option<SeverityArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SeverityArg {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Info => Severity::Info,
            SeverityArg::Low => Severity::Low,
            SeverityArg::Medium => Severity::Medium,
            SeverityArg::High => Severity::High,
            SeverityArg::Critical => Severity::Critical,
        }
    }
}

pub fn execute(args: ScanArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let scanner = SourceScanner::with_builtin_catalog();
    let result = scanner.scan(&source);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", "Scan Report".bold());
        println!("  File:  {}", args.input.display());
        println!("  Score: {}", format_score(result.score));
        println!(
            "  Code quality: {}%   Gas findings: {}",
            result.code_quality_percent, result.gas_optimization_count
        );
        println!();

        if result.findings.is_empty() {
            println!("{}", "No findings.".green());
        } else {
            for finding in &result.findings {
                println!(
                    "{} [{}] line {}: {}",
                    finding.severity.emoji(),
                    finding.severity,
                    finding.line,
                    finding.title.bold()
                );
                println!("    {}", finding.recommendation.dimmed());
            }
        }
    }

    if let Some(threshold) = args.min_severity {
        let threshold: Severity = threshold.into();
        let blocking = result
            .findings
            .iter()
            .filter(|f| f.severity >= threshold)
            .count();
        if blocking > 0 {
            bail!("{blocking} finding(s) at or above {threshold} severity");
        }
    }

    Ok(())
}

fn format_score(score: u32) -> ColoredString {
    let text = format!("{score}/100");
    match score {
        80..=100 => text.green(),
        50..=79 => text.yellow(),
        _ => text.red(),
    }
}
