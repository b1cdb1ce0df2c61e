use anyhow::{Context, Result, bail};
use clap::Parser;
use libpali_core::{Config, Converter, Script};
use serde::Serialize;
use std::path::PathBuf;

/// Convert Pali text between scripts.
#[derive(Parser)]
#[command(name = "pali-convert", version)]
struct Args {
    /// Text to convert. Read from --input or stdin when omitted.
    text: Option<String>,

    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Write the result here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Source script; `auto` detects it from the text.
    #[arg(long, short, default_value = "auto")]
    from: Script,

    #[arg(long, short)]
    to: Script,

    /// Input is a Devanagari book with XML markup.
    #[arg(long)]
    book: bool,

    /// Capitalize words in scripts with letter case.
    #[arg(long)]
    title_case: bool,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print source, target and both texts as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Conversion<'a> {
    source: Script,
    target: Script,
    input: &'a str,
    output: &'a str,
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

fn read_input(args: &Args) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).context("reading stdin"),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            Config::load_toml(path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => Config::default(),
    };
    let converter = Converter::with_config(config);
    let input = read_input(&args)?;

    let (source, output) = if args.book {
        if !matches!(args.from, Script::Devanagari | Script::Unknown) {
            bail!("books are converted from Devanagari, not {}", args.from);
        }
        (Script::Devanagari, converter.convert_book(&input, args.to)?)
    } else {
        let source = match args.from {
            Script::Unknown => Script::detect(&input).unwrap_or(Script::Unknown),
            known => known,
        };
        let output = converter.convert(&input, source, args.to, args.title_case)?;
        (source, output)
    };

    let rendered = if args.json {
        let conversion = Conversion {
            source,
            target: args.to,
            input: &input,
            output: &output,
        };
        let mut json = serde_json::to_string_pretty(&conversion)?;
        json.push('\n');
        json
    } else {
        output
    };

    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}
