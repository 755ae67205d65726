//! Replays editor input against a blockpad document.
//!
//! Stands in for the rendering surface: reads renderer commands as JSON
//! lines, applies them in order, and prints what the engine reports.
//!
//! ```text
//! {"op": "update_content", "index": 0, "content": "- milk"}
//! {"op": "line_break", "index": 0, "content": "- milk\n"}
//! {"op": "commit", "index": 0}
//! ```

use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use blockpad::{
    format_id, lex_with, validate_options, Applied, Command, Document, EditError, Options,
};
use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "blockpad-replay", version, about = "Replay editor commands against a block document")]
struct Cli {
    /// Log engine activity to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML file overriding the bullet marker and bold delimiter
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Apply a JSON-lines command script (stdin when omitted or "-")
    Run(RunArgs),

    /// Print the inline tokens of a string
    Lex(LexArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// Script path
    script: Option<PathBuf>,

    /// Only print the final snapshot
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::Args)]
struct LexArgs {
    /// Text to tokenize
    text: String,
}

/// One output line per script step.
#[derive(Serialize)]
struct StepReport<'a> {
    step: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    applied: Option<&'a Applied>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

/// Final output line.
#[derive(Serialize)]
struct FinalReport<'a> {
    snapshot: &'a blockpad::DocumentSnapshot,
    fingerprint: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Returns `Ok(false)` when any step was rejected.
fn run(cli: Cli) -> Result<bool, Box<dyn Error>> {
    let options = match &cli.config {
        Some(path) => load_options(path)?,
        None => Options::default(),
    };
    validate_options(&options)?;

    match cli.command {
        Mode::Lex(args) => {
            let tokens = lex_with(&args.text, options.delimiter);
            println!("{}", serde_json::to_string(&tokens)?);
            Ok(true)
        }
        Mode::Run(args) => {
            let source = read_script(args.script.as_deref())?;
            let commands = parse_script(&source)?;
            info!("replaying {} commands", commands.len());
            replay(commands, options, args.quiet)
        }
    }
}

fn load_options(path: &Path) -> Result<Options, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let options = parse_options(&text)
        .map_err(|e| format!("invalid config {}: {}", path.display(), e))?;
    Ok(options)
}

fn parse_options(text: &str) -> Result<Options, toml::de::Error> {
    toml::from_str(text)
}

fn read_script(path: Option<&Path>) -> io::Result<String> {
    match path {
        None => read_stdin(),
        Some(path) if path == Path::new("-") => read_stdin(),
        Some(path) => fs::read_to_string(path),
    }
}

fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Parses one command per line, skipping blank lines and `#` comments.
fn parse_script(source: &str) -> Result<Vec<Command>, String> {
    let mut commands = Vec::new();
    for (line_no, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command: Command = serde_json::from_str(line)
            .map_err(|e| format!("line {}: {}", line_no + 1, e))?;
        commands.push(command);
    }
    Ok(commands)
}

fn replay(commands: Vec<Command>, options: Options, quiet: bool) -> Result<bool, Box<dyn Error>> {
    let mut doc = Document::with_options(options)?;
    let mut ok = true;

    for (step, command) in commands.into_iter().enumerate() {
        debug!("step {}: {:?}", step, command);
        let outcome = doc.apply(command);
        if outcome.is_err() {
            ok = false;
        }
        if !quiet {
            println!("{}", serde_json::to_string(&step_report(step, &outcome))?);
        }
    }

    let snapshot = doc.snapshot();
    let report = FinalReport {
        fingerprint: format_fingerprint(&snapshot.fingerprint()),
        snapshot: &snapshot,
    };
    println!("{}", serde_json::to_string(&report)?);

    for block in doc.blocks() {
        debug!("{} {} {:?}", format_id(&block.id), block.kind.as_str(), block.content);
    }

    Ok(ok)
}

fn step_report(step: usize, outcome: &Result<Applied, EditError>) -> StepReport<'_> {
    match outcome {
        Ok(applied) => StepReport {
            step,
            applied: Some(applied),
            error: None,
            code: None,
        },
        Err(e) => StepReport {
            step,
            applied: None,
            error: Some(e.to_string()),
            code: Some(e.code().code()),
        },
    }
}

fn format_fingerprint(bytes: &[u8; 16]) -> String {
    bytes.iter().fold(String::with_capacity(32), |mut s, byte| {
        let _ = write!(s, "{:02x}", byte);
        s
    })
}
