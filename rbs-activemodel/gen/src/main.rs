//! RBS signature generator for ActiveModel classes.
//!
//! Reads class descriptors as JSON and prints their signatures, or
//! canonicalizes existing `.rbs` text.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, eyre};
use owo_colors::{OwoColorize, Style};
use rbs_activemodel_define::ClassDescriptor;
use rbs_activemodel_gen::rbs::{format_signature, is_canonical};
use rbs_activemodel_gen::{BatchReport, generate_all};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "rbs-activemodel",
    version,
    about = "Generate RBS signatures for ActiveModel classes"
)]
struct Cli {
    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE, -vvvv TRACE with file/line)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colors in status output
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate signatures from class descriptors (a JSON object or array)
    Generate(GenerateArgs),
    /// Print RBS source in canonical layout
    Fmt(FmtArgs),
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// Descriptor JSON file (reads stdin if omitted or "-")
    #[arg(env = "RBS_ACTIVEMODEL_INPUT")]
    input: Option<PathBuf>,

    /// Output a JSON array of {class, path, rbs}
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct FmtArgs {
    /// RBS file (reads stdin if omitted or "-")
    input: Option<PathBuf>,

    /// Exit with an error instead of printing when the input is not canonical
    #[arg(long)]
    check: bool,
}

/// One generated signature in `--json` output.
#[derive(Debug, Serialize)]
struct GeneratedSignature<'a> {
    class: &'a str,
    path: String,
    rbs: &'a str,
}

/// Styles for status lines on stderr.
struct Palette {
    use_colors: bool,
}

impl Palette {
    fn new(plain: bool) -> Self {
        let no_color = std::env::var("NO_COLOR").is_ok();
        Self {
            use_colors: !plain && !no_color && io::stderr().is_terminal(),
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_colors {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn skipped(&self, text: &str) -> String {
        self.paint(text, Style::new().dimmed())
    }

    fn failed(&self, text: &str) -> String {
        self.paint(text, Style::new().red().bold())
    }
}

/// Initialize tracing subscriber based on verbosity level.
///
/// Verbosity levels:
/// - 0 (default): no subscriber
/// - 1 (-v): INFO (batch summaries)
/// - 2 (-vv): DEBUG (per-class fragments)
/// - 3+ (-vvv): TRACE (parser detail)
/// - 4+ (-vvvv): TRACE with file/line numbers
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "warn,rbs_activemodel=info,rbs_activemodel_gen=info".to_string(),
            2 => "info,rbs_activemodel=debug,rbs_activemodel_gen=debug".to_string(),
            _ => "debug,rbs_activemodel=trace,rbs_activemodel_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_file(verbose >= 4)
                .with_line_number(verbose >= 4)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

/// Reads `path`, or stdin when it is `None` or `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).wrap_err_with(|| format!("Failed to read file: {}", p.display()))
        }
        _ => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(eyre!(
                    "No input provided. Pass a file path or pipe input on stdin."
                ));
            }
            let mut buffer = String::new();
            stdin
                .read_to_string(&mut buffer)
                .wrap_err("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Accepts either a single descriptor object or an array of them.
fn parse_descriptors(json: &str) -> Result<Vec<ClassDescriptor>> {
    let value: serde_json::Value =
        serde_json::from_str(json).wrap_err("Invalid JSON in descriptor input")?;
    let descriptors = if value.is_array() {
        serde_json::from_value(value).wrap_err("Invalid class descriptor list")?
    } else {
        vec![serde_json::from_value(value).wrap_err("Invalid class descriptor")?]
    };
    Ok(descriptors)
}

fn print_report(report: &BatchReport, json: bool) -> Result<()> {
    if json {
        let output: Vec<_> = report
            .generated()
            .map(|(class, path, rbs)| GeneratedSignature {
                class,
                path: path.display().to_string(),
                rbs,
            })
            .collect();
        let text =
            serde_json::to_string_pretty(&output).wrap_err("Failed to serialize signatures")?;
        println!("{text}");
        return Ok(());
    }

    for (index, (_, path, rbs)) in report.generated().enumerate() {
        if index > 0 {
            println!();
        }
        println!("# {}", path.display());
        print!("{rbs}");
    }
    Ok(())
}

fn run_generate(args: &GenerateArgs, palette: &Palette) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let descriptors = parse_descriptors(&input)?;
    info!(count = descriptors.len(), "Loaded class descriptors");

    let report = generate_all(&descriptors);
    print_report(&report, args.json)?;

    for class in report.skipped() {
        eprintln!("{} {class}: nothing to declare", palette.skipped("skipped"));
    }
    for (class, err) in report.failures() {
        eprintln!("{} {class}: {err}", palette.failed("failed"));
    }

    if report.has_failures() {
        return Err(eyre!(
            "{} of {} classes failed",
            report.failed_count(),
            report.entries.len()
        ));
    }
    Ok(())
}

fn run_fmt(args: &FmtArgs, palette: &Palette) -> Result<()> {
    let source = read_input(args.input.as_deref())?;

    if args.check {
        if !is_canonical(&source).wrap_err("Failed to parse RBS input")? {
            let name = args
                .input
                .as_deref()
                .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
            eprintln!("{} {name}", palette.failed("would reformat"));
            return Err(eyre!("Input is not canonically formatted"));
        }
        return Ok(());
    }

    let formatted = format_signature(&source).wrap_err("Failed to parse RBS input")?;
    debug!(bytes = formatted.len(), "Formatted input");
    print!("{formatted}");
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let palette = Palette::new(cli.plain);
    match &cli.command {
        Command::Generate(args) => run_generate(args, &palette),
        Command::Fmt(args) => run_fmt(args, &palette),
    }
}
