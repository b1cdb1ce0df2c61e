use anyhow::{bail, Context, Result};
use clap::Parser;
use libpali_core::Script;
use libpali_validate::{BatchReport, Validator, ValidatorConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Round-trip Devanagari Pali words through other scripts and report the
/// words that do not come back unchanged.
#[derive(Parser)]
#[command(name = "pali-validate", version)]
struct Args {
    /// Words to validate. Read from --input or stdin when none are given.
    words: Vec<String>,

    /// Word list, one word per line. Blank lines and `#` comments are skipped.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Script to validate against (repeatable). Defaults to the config's list.
    #[arg(long = "script", short)]
    scripts: Vec<Script>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Include passing words in the JSON report.
    #[arg(long)]
    all: bool,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    dump_config: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn read_words(args: &Args) -> Result<Vec<String>> {
    if !args.words.is_empty() {
        return Ok(args.words.clone());
    }
    let content = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading word list {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("reading words from stdin")?,
    };
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect())
}

fn print_text(report: &BatchReport) {
    for verdict in report.failing() {
        println!("{}  [{}]", verdict.word, verdict.syllables.join(" "));
        for sv in verdict.failures() {
            let r = &sv.result;
            println!(
                "  {:<10} {} -> {}   {} -> {}",
                sv.script.name(),
                r.s1,
                r.s2,
                r.phonetic1,
                r.phonetic2
            );
            if sv.repros.is_empty() {
                println!("    not localized");
            }
            for repro in &sv.repros {
                let kind = if repro.context_free { "syllable" } else { "window" };
                println!(
                    "    {kind} {} (syllables {}..{})",
                    repro.substring, repro.syllable_range.start, repro.syllable_range.end
                );
            }
        }
    }

    let summary = &report.summary;
    println!(
        "{} words, {} clean, {} failed checks",
        summary.words,
        summary.clean,
        summary.failures()
    );
    for (script, counts) in &summary.per_script {
        if counts.failed > 0 {
            println!(
                "  {:<10} {} failed, {} localized, {} context-free",
                script.name(),
                counts.failed,
                counts.localized,
                counts.context_free
            );
        }
    }
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ValidatorConfig::load_toml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    if !args.scripts.is_empty() {
        config.scripts = args.scripts.clone();
    }
    config.validate().context("invalid configuration")?;

    if args.dump_config {
        print!("{}", config.to_toml_string()?);
        return Ok(ExitCode::SUCCESS);
    }

    let words = read_words(&args)?;
    if words.is_empty() {
        bail!("no words to validate");
    }

    let scripts = config.scripts.clone();
    let validator = Validator::with_config(config);
    let mut report = validator
        .validate_batch_in(&words, &scripts)
        .context("validating words")?;
    let clean = report.summary.clean == report.summary.words;

    if args.json {
        if !args.all {
            report.verdicts.retain(|v| !v.passed());
        }
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }

    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
