use clap::Parser;

mod bootstrap;
mod cli;
mod commands;

/// Exit status when the source file cannot be read or parsed.
const PARSE_FAILURE_EXIT: i32 = 2;

/// Exit status for configuration, argument and output errors.
const FAILURE_EXIT: i32 = 1;

fn main() {
    let cli = match cli::Cli::try_parse_from(cli::go_style_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(error) => {
            if let Err(io_error) = error.print() {
                eprintln!("declmap error: {io_error}");
            }
            std::process::exit(usage_exit_code(&error));
        }
    };

    let result = run(&cli);
    if let Err(error) = &result {
        eprintln!("declmap error: {error:#}");
    }
    std::process::exit(exit_code(&result));
}

fn run(cli: &cli::Cli) -> anyhow::Result<commands::Outcome> {
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(cli)?;
    let stdout = std::io::stdout();
    commands::index::handle(&config, &mut stdout.lock())
}

/// `--help` and `--version` succeed; every other clap error is an argument
/// error, kept apart from [`PARSE_FAILURE_EXIT`].
fn usage_exit_code(error: &clap::Error) -> i32 {
    if error.use_stderr() { FAILURE_EXIT } else { 0 }
}

fn exit_code(result: &anyhow::Result<commands::Outcome>) -> i32 {
    match result {
        Ok(commands::Outcome::Indexed) => 0,
        Ok(commands::Outcome::ParseFailed) => PARSE_FAILURE_EXIT,
        Err(_) => FAILURE_EXIT,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DECLMAP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries the index; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
