//! rotorcrypt demo: encodes and decodes a sample stream.
//!
//! Uses the alphabet-3 reference repository of five Dials. The starting
//! counter, the selection and the input can be overridden from the command
//! line as comma-separated lists.

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use rotorcrypt::{RotorConfig, RotorEngine, RotorError, Symbol};

const ALPHABET: usize = 3;

const REFERENCE_DIALS: [[Symbol; ALPHABET]; 5] = [
    [1, 0, 2],
    [2, 0, 1],
    [1, 2, 0],
    [1, 0, 2],
    [2, 0, 1],
];

/// Rotor cipher demo over a three-symbol alphabet
#[derive(Parser, Debug)]
#[command(name = "rotorcrypt-demo")]
#[command(version)]
struct Cli {
    /// Starting counter digits, one per selected dial
    #[arg(long, value_delimiter = ',', default_value = "2,1,2")]
    counter: Vec<Symbol>,

    /// Repository indices of the dial stack, in order
    #[arg(long, value_delimiter = ',', default_value = "0,1,2")]
    select: Vec<usize>,

    /// Symbols to encode
    #[arg(long, value_delimiter = ',', default_value = "0,1,1,0,2,2,0,0,2,1")]
    input: Vec<Symbol>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_symbols(name: &str, symbols: &[Symbol]) {
    let rendered: Vec<String> = symbols.iter().map(|s| s.to_string()).collect();
    println!("{}: {}", name, rendered.join(" "));
}

/// Symbol streams produced by one demo run.
#[derive(Debug)]
struct Report {
    output: Vec<Symbol>,
    decoded: Vec<Symbol>,
}

fn run(cli: &Cli) -> Result<Report, RotorError> {
    let config = RotorConfig::<ALPHABET>::builder()
        .dials(REFERENCE_DIALS)
        .starting_counter(cli.counter.iter().copied())
        .select(cli.select.iter().copied())
        .build()?;
    let mut engine = RotorEngine::new(&config)?;
    debug!(period = engine.period(), "engine ready");

    let output = engine.encode(&cli.input)?;
    let decoded = engine.decode(&output)?;
    Ok(Report { output, decoded })
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            print_symbols("input", &cli.input);
            print_symbols("output", &report.output);
            print_symbols("decoded output", &report.decoded);
            info!(symbols = cli.input.len(), "done");
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
