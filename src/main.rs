use std::{fs, io, process};

use arrowlang::{
    config::{DEFAULT_MAX_CALL_DEPTH, InterpreterConfig},
    run,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// arrowlang runs small scripts built from `->` assignments, `print`,
/// `input` and user-defined functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as the script itself instead of a path to it.
    #[arg(short, long)]
    script: bool,

    /// Maximum number of nested function calls before the run is aborted.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Path of the program to run, or the program itself with `--script`.
    #[arg(default_value = "program.txt")]
    contents: String,
}

fn main() {
    install_tracing();

    let args = Args::parse();

    let source = if args.script {
        args.contents
    } else {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    };

    let config = InterpreterConfig::default().with_max_call_depth(args.max_call_depth);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&source, &mut stdin.lock(), &mut stdout.lock(), config) {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Sends diagnostics to stderr so they never mix with program output.
/// The filter comes from `RUST_LOG` and defaults to warnings only.
fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}
