//! Command-line interface for combinecat.
//!
//! Collects files by extension from the working directory and its source
//! subdirectory and writes them into one annotated text file.

use clap::{ArgAction, Parser};
use combinecat::{
    BinaryDetection, CombineBuilder, CombineOptions, CombineSummary, DEFAULT_EXTENSIONS,
    DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_SUBDIR, combine, normalize_extension, output,
};
use std::path::PathBuf;
use std::process::exit;

/// combinecat — join project files into one text file for AI assistants
#[derive(Parser)]
#[command(name = "combinecat", version, about, long_about = None)]
struct Cli {
    /// Extensions to collect, without the dot (default: js html md css cjs)
    #[arg(value_parser = parse_extension)]
    extensions: Vec<String>,

    /// Output file, relative to the root directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Subdirectory scanned recursively
    #[arg(long, default_value = DEFAULT_SOURCE_SUBDIR)]
    source_dir: PathBuf,

    /// Root directory (default current dir)
    #[arg(short = 'C', long, default_value = ".")]
    root: PathBuf,

    /// Additional file names to skip (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_names: Vec<String>,

    /// Do not skip package.json and package-lock.json
    #[arg(long)]
    no_default_ignores: bool,

    /// Glob patterns pruned from both scans (can be repeated)
    #[arg(long = "exclude")]
    exclude_patterns: Vec<String>,

    /// Max depth of the source directory scan (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Include hidden files
    #[arg(long)]
    hidden: bool,

    /// Honor .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Follow directory symlinks
    #[arg(long)]
    follow_links: bool,

    /// Reject binary files before decoding
    #[arg(long, default_value = "none", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_extension(s: &str) -> Result<String, String> {
    normalize_extension(s).map_err(|e| e.to_string())
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> (CombineOptions, bool, u8) {
        let extensions = if self.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
        } else {
            self.extensions
        };

        let mut builder = CombineBuilder::new(self.root)
            .extensions(extensions)
            .output_path(self.output)
            .source_subdir(self.source_dir)
            .exclude_patterns(self.exclude_patterns)
            .include_hidden(self.hidden)
            .respect_gitignore(self.gitignore)
            .follow_links(self.follow_links)
            .binary_detection(self.binary_detection);

        if self.no_default_ignores {
            builder = builder.ignore_names(Vec::<String>::new());
        }
        for name in self.ignore_names {
            builder = builder.add_ignore_name(name);
        }

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        (builder.build(), self.json, self.verbose)
    }
}

#[cfg(feature = "logging")]
fn init_tracing(verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let directive = match verbose {
        0 => "combinecat=warn",
        1 => "combinecat=debug",
        _ => "combinecat=trace",
    };
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let (options, json, _verbose) = cli.into_options();

    #[cfg(feature = "logging")]
    {
        if let Err(e) = init_tracing(_verbose) {
            eprintln!("Failed to initialize logging: {}", e);
        }
    }

    match combine(options) {
        Ok(summary) => report(&summary, json),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn report(summary: &CombineSummary, json: bool) {
    if json {
        let json = serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        println!("{}", json);
        return;
    }
    for line in output::summary_lines(summary) {
        println!("{}", line);
    }
}
