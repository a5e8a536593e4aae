use std::path::PathBuf;

use anyhow::Context;
use declmap_config::DeclmapConfig;
use declmap_parser::{ClassifyOptions, OutputFormat};

use crate::cli::Cli;

/// Everything one run needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub src: PathBuf,
    pub format: OutputFormat,
    pub options: ClassifyOptions,
    pub line: Option<u32>,
}

pub fn load_config(cli: &Cli) -> anyhow::Result<RunConfig> {
    let config = match &cli.config {
        Some(path) => DeclmapConfig::load_with_file(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?,
        None => DeclmapConfig::load().context("failed to load declmap configuration")?,
    };
    Ok(resolve(cli, &config))
}

/// Apply command-line overrides on top of the loaded configuration.
fn resolve(cli: &Cli, config: &DeclmapConfig) -> RunConfig {
    let mut options = config.output.classify_options();
    if let Some(taxonomy) = cli.taxonomy {
        options.taxonomy = taxonomy;
    }
    if cli.no_qualify_methods {
        options.qualify_methods = false;
    }

    let run = RunConfig {
        src: PathBuf::from(&cli.src),
        format: cli.format.unwrap_or(config.output.format),
        options,
        line: cli.line,
    };
    tracing::debug!(?run, "resolved run configuration");
    run
}
