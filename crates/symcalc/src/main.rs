//! Thin CLI wrapper: parse arguments, initialize tracing, delegate to
//! [`symcalc::run`], and map the result onto a process exit code.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use symcalc::DriverConfig;
use tracing_subscriber::EnvFilter;

/// Batch-mode symbolic calculator: read a directive file, print each
/// directive's simplified or solved result.
#[derive(Parser, Debug)]
#[command(name = "symcalc", version, about)]
struct Cli {
    /// Path to the directive file to evaluate.
    input: PathBuf,

    /// Suppress the "(i is the imaginary unit)" comment before complex roots.
    #[arg(long)]
    quiet: bool,

    /// Raise the tracing filter to debug (repeat for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let config = DriverConfig { quiet: cli.quiet };

    match symcalc::run_with_config(&cli.input, &mut out, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = out.flush();
            tracing::error!("{e}");
            eprintln!("symcalc: {e}");
            ExitCode::FAILURE
        }
    }
}
