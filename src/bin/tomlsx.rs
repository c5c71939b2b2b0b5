//! tomlsx CLI - TOML configuration to S-expression notation transpiler

#[cfg(feature = "cli")]
use clap::{ArgAction, Parser, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;
use tomlsx::{transpile_source, ConversionError, IdentifierPolicy, SourceFormat, TranspileOptions};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tomlsx")]
#[command(version)]
#[command(about = "tomlsx - TOML configuration to S-expression notation transpiler", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Input format
    #[arg(short, long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Reject illegal names instead of normalizing them
    #[arg(long)]
    strict: bool,

    /// Spaces per nesting level of keyed structures
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Emit nothing for the document when only the [const] section is present
    #[arg(long)]
    omit_empty_document: bool,

    /// Increase diagnostic output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Clone, ValueEnum)]
enum Format {
    /// Detect from the file extension (TOML when unknown or reading stdin)
    Auto,
    /// TOML document
    Toml,
    /// JSON document
    Json,
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "conversion failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> Result<(), ConversionError> {
    // Read input
    let input = match cli.input_file {
        Some(ref path) => {
            tracing::debug!(path = %path, "loading input file");
            fs::read_to_string(path)?
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let format = match cli.format {
        Format::Toml => SourceFormat::Toml,
        Format::Json => SourceFormat::Json,
        Format::Auto => cli
            .input_file
            .as_deref()
            .map(|p| SourceFormat::from_path(Path::new(p)))
            .unwrap_or_default(),
    };

    let options = TranspileOptions {
        policy: if cli.strict {
            IdentifierPolicy::Strict
        } else {
            IdentifierPolicy::Lenient
        },
        indent: cli.indent,
        emit_empty_document: !cli.omit_empty_document,
    };
    tracing::debug!(%format, ?options, "converting");

    // Convert; nothing is written unless the whole document succeeded
    let result = transpile_source(&input, format, &options)?;

    // Output
    match cli.output {
        Some(ref path) => {
            let mut file = fs::File::create(path)?;
            if !result.is_empty() {
                writeln!(file, "{}", result)?;
            }
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            if !result.is_empty() {
                writeln!(stdout, "{}", result)?;
            }
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default.into()),
        )
        .with_writer(io::stderr)
        .init();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tomlsx --features cli");
    eprintln!("  tomlsx [OPTIONS] [INPUT_FILE]");
}
