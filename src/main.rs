use anyhow::{Context, Result};
use boleto_return::{parse_file, BankRegistry, ParsedReturn};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Parse a bank return file and print its contents
#[derive(Parser, Debug)]
#[command(name = "boleto-return")]
#[command(version, about)]
struct Args {
    /// Return file to parse
    file: PathBuf,

    /// Bank signature to use instead of detecting it from the header (e.g., 341)
    #[arg(long)]
    bank: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print a one-line summary instead of JSON
    #[arg(long, conflicts_with = "pretty")]
    summary: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let registry = BankRegistry::default();

    let layout = registry.resolve(&args.file, args.bank.as_deref())?;
    info!(file = %args.file.display(), bank = layout.name(), "parsing");

    let parsed = parse_file(&args.file, layout)
        .with_context(|| format!("Failed to parse {}", args.file.display()))?;

    if args.summary {
        print_summary(layout.name(), &parsed);
    } else {
        let json = if args.pretty {
            serde_json::to_string_pretty(&parsed)
        } else {
            serde_json::to_string(&parsed)
        }
        .context("Failed to serialize parsed return")?;
        println!("{json}");
    }

    Ok(())
}

fn print_summary(bank: &str, parsed: &ParsedReturn) {
    let generated = parsed
        .header
        .generation_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());

    println!(
        "{} ({}) generated {}: {} transactions, paid {}",
        bank,
        parsed.header.bank_code,
        generated,
        parsed.transactions.len(),
        parsed.paid_total()
    );
}
