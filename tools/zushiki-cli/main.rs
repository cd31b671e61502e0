use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use zushiki::prelude::*;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LanguageCli {
    Pascal,
    C,
    Cpp,
}

impl From<LanguageCli> for Language {
    fn from(language: LanguageCli) -> Self {
        match language {
            LanguageCli::Pascal => Language::Pascal,
            LanguageCli::C => Language::C,
            LanguageCli::Cpp => Language::Cpp,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// The node/connection graph as JSON
    Json,
    /// A readable node-by-node listing
    Outline,
}

/// Generate a flowchart from a Pascal SPR or C/C++ AST document
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the program document JSON file (reads stdin when omitted)
    input: Option<String>,

    /// The language the document was parsed from
    #[arg(short, long, value_enum, default_value = "pascal")]
    language: LanguageCli,

    /// Optional path to a generator configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// How to print the generated flowchart
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Log progress at debug level (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let document = match &cli.input {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read document '{}': {}", path, e))
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to read stdin: {}", e)));
            buffer
        }
    };

    let mut builder = Generator::builder(cli.language.into());
    if let Some(path) = &cli.config {
        let config = GeneratorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        builder = builder.with_config(config);
    }
    let generator = builder.build();

    let start = Instant::now();
    let chart = generator
        .generate_str(&document)
        .unwrap_or_else(|e| exit_with_error(&format!("Flowchart generation failed: {}", e)));
    tracing::info!(
        nodes = chart.nodes.len(),
        connections = chart.connections.len(),
        elapsed = ?start.elapsed(),
        "generated flowchart"
    );

    let rendered = match cli.format {
        OutputFormat::Json => chart
            .to_json()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize flowchart: {}", e))),
        OutputFormat::Outline => chart.outline().to_string(),
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to write '{}': {}", path, e)));
            eprintln!("Flowchart written to '{}'", path);
        }
        None => println!("{}", rendered),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
