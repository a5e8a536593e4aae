use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use declmap_parser::{OutputFormat, Taxonomy};

/// Top-level CLI parser for the `declmap` binary.
#[derive(Debug, Parser)]
#[command(
    name = "declmap",
    version,
    about = "Print a line-span index of the top-level declarations in a Go file"
)]
pub struct Cli {
    /// Source file to parse (an empty path is reported as a read failure)
    #[arg(short, long, value_name = "PATH", default_value = "")]
    pub src: OsString,

    /// Output format: csv, tsv, jsonl (overrides config)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Kind labels for const/var groups: detailed, legacy (overrides config)
    #[arg(short, long)]
    pub taxonomy: Option<Taxonomy>,

    /// Name methods by their own identifier instead of `Receiver.Method`
    #[arg(long)]
    pub no_qualify_methods: bool,

    /// Only print the declaration enclosing this 1-based line
    #[arg(short, long, value_name = "N")]
    pub line: Option<u32>,

    /// Extra TOML config file, layered above the project config
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Accept the single-dash `-src` spelling used by Go-flag style callers.
pub fn go_style_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-src") => OsString::from("--src"),
            Some(s) if s.starts_with("-src=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}
