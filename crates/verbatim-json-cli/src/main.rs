//! `vjson` CLI: format, check and benchmark JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty-print with the default two-space indent (stdin → stdout)
//! echo '{"b":1,"a":[true,null]}' | vjson format
//!
//! # Compact output, file to file
//! vjson format --compact -i data.json -o data.min.json
//!
//! # Keep non-canonical float spellings such as 1.50 exactly as written
//! vjson format --strict -i data.json
//!
//! # Validate a document and report its kind
//! vjson check -i data.json
//!
//! # Compare parse/serialize throughput against serde_json
//! vjson bench --iterations 10 -i big.json
//! vjson bench --json -i big.json
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::{self, Read};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn, Level};
use verbatim_json::{ParseOptions, Precision, SerializeOptions};

#[derive(Parser)]
#[command(
    name = "vjson",
    version,
    about = "Lossless JSON formatter, validator and benchmark"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and write it back out
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Spaces per nesting level
        #[arg(long, default_value_t = 2)]
        indent: usize,
        /// Single-line output with no indentation
        #[arg(long, conflicts_with = "indent")]
        compact: bool,
        /// Keep numbers as written unless they re-render exactly
        #[arg(long)]
        strict: bool,
        /// Reject documents nested deeper than this
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Validate a document and report its kind and size
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Parse numbers with the strict precision policy
        #[arg(long)]
        strict: bool,
        /// Reject documents nested deeper than this
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Time parse and serialize against serde_json
    Bench {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Number of timed runs per library
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        iterations: u32,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Format {
            input,
            output,
            indent,
            compact,
            strict,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let value = verbatim_json::parse_with(&text, &parse_options(strict, max_depth))
                .context("Failed to parse JSON")?;
            let options = if compact {
                SerializeOptions::compact()
            } else {
                SerializeOptions::pretty(indent)
            };
            let mut formatted = verbatim_json::serialize(&value, &options);
            formatted.push('\n');
            write_output(output.as_deref(), &formatted)?;
        }
        Commands::Check {
            input,
            strict,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let (value, consumed) =
                verbatim_json::parse_prefix(&text, &parse_options(strict, max_depth))
                    .context("Failed to parse JSON")?;
            let trailing = text[consumed..].trim_start();
            if !trailing.is_empty() {
                warn!(
                    offset = text.len() - trailing.len(),
                    bytes = trailing.len(),
                    "ignoring trailing input after document"
                );
            }
            println!("{} ({consumed} bytes)", value.kind());
        }
        Commands::Bench {
            input,
            iterations,
            json,
        } => {
            let text = read_input(input.as_deref())?;
            let reports = [
                bench_verbatim(&text, iterations)?,
                bench_serde_json(&text, iterations)?,
            ];
            if json {
                let report = serde_json::to_string_pretty(&reports)
                    .context("Failed to serialize benchmark report")?;
                println!("{report}");
            } else {
                for report in &reports {
                    print_report(report);
                }
            }
        }
    }

    Ok(())
}

/// Log to stderr so formatted output on stdout stays clean.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn parse_options(strict: bool, max_depth: Option<usize>) -> ParseOptions {
    let precision = if strict {
        Precision::Strict
    } else {
        Precision::Fast
    };
    ParseOptions {
        precision,
        max_depth,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Benchmark
// ─────────────────────────────────────────────────────────────────────────────

/// Averaged timings for one library over a benchmark run.
#[derive(Debug, Serialize)]
struct BenchReport {
    library: &'static str,
    iterations: u32,
    /// Hash of the compact serialized output, to spot diverging results.
    output_hash: u64,
    output_bytes: usize,
    input_mb: f64,
    total_ms: f64,
    parse_secs: f64,
    parse_mb_per_sec: f64,
    serialize_secs: f64,
    serialize_mb_per_sec: f64,
}

impl BenchReport {
    fn new(
        library: &'static str,
        input: &str,
        output: &str,
        iterations: u32,
        parse: Duration,
        serialize: Duration,
    ) -> Self {
        let parse_secs = parse.as_secs_f64() / f64::from(iterations);
        let serialize_secs = serialize.as_secs_f64() / f64::from(iterations);
        BenchReport {
            library,
            iterations,
            output_hash: hash_text(output),
            output_bytes: output.len(),
            input_mb: megabytes(input.len()),
            total_ms: (parse_secs + serialize_secs) * 1000.0,
            parse_secs,
            parse_mb_per_sec: throughput(input.len(), parse_secs),
            serialize_secs,
            serialize_mb_per_sec: throughput(output.len(), serialize_secs),
        }
    }
}

fn bench_verbatim(text: &str, iterations: u32) -> Result<BenchReport> {
    let options = SerializeOptions::compact();
    let mut parse_time = Duration::ZERO;
    let mut serialize_time = Duration::ZERO;
    let mut output = String::new();

    for _ in 0..iterations {
        let start = Instant::now();
        let value = verbatim_json::parse(text).context("Failed to parse JSON")?;
        let parsed = Instant::now();
        output = verbatim_json::serialize(&value, &options);
        parse_time += parsed - start;
        serialize_time += parsed.elapsed();
    }
    debug!(iterations, ?parse_time, ?serialize_time, "verbatim-json run finished");

    Ok(BenchReport::new(
        "verbatim-json",
        text,
        &output,
        iterations,
        parse_time,
        serialize_time,
    ))
}

fn bench_serde_json(text: &str, iterations: u32) -> Result<BenchReport> {
    let mut parse_time = Duration::ZERO;
    let mut serialize_time = Duration::ZERO;
    let mut output = String::new();

    for _ in 0..iterations {
        let start = Instant::now();
        let value: serde_json::Value =
            serde_json::from_str(text).context("serde_json failed to parse JSON")?;
        let parsed = Instant::now();
        output = serde_json::to_string(&value).context("serde_json failed to serialize")?;
        parse_time += parsed - start;
        serialize_time += parsed.elapsed();
    }
    debug!(iterations, ?parse_time, ?serialize_time, "serde_json run finished");

    Ok(BenchReport::new(
        "serde_json",
        text,
        &output,
        iterations,
        parse_time,
        serialize_time,
    ))
}

fn print_report(report: &BenchReport) {
    info!(library = report.library, "printing benchmark report");
    println!("{} --------------------", report.library);
    println!("hash           : {}", report.output_hash);
    println!("time           : {:.3}ms", report.total_ms);
    println!("file      size : {:.6}MB", report.input_mb);
    println!("parse     time : {:.6}s", report.parse_secs);
    println!("parse    speed : {:.2}MB/s", report.parse_mb_per_sec);
    println!("serialize time : {:.6}s", report.serialize_secs);
    println!("serialize speed: {:.2}MB/s", report.serialize_mb_per_sec);
}

fn hash_text(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

fn megabytes(bytes: usize) -> f64 {
    bytes as f64 / 1_000_000.0
}

fn throughput(bytes: usize, secs: f64) -> f64 {
    if secs > 0.0 {
        megabytes(bytes) / secs
    } else {
        0.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// I/O
// ─────────────────────────────────────────────────────────────────────────────

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
