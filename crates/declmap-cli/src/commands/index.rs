use std::io::Write;

use anyhow::Context;
use declmap_parser::{index_file, write_index, write_records};

use crate::bootstrap::RunConfig;
use crate::commands::Outcome;

/// Handle `declmap --src <PATH>`.
///
/// Read and parse failures are reported on `out` as a single `err = ...`
/// line so line-oriented consumers see them; only I/O errors on `out`
/// itself are returned as `Err`.
pub fn handle<W: Write>(config: &RunConfig, out: &mut W) -> anyhow::Result<Outcome> {
    let index = match index_file(&config.src, &config.options) {
        Ok(index) => index,
        Err(error) => {
            tracing::debug!(%error, "source could not be indexed");
            writeln!(out, "err = {error}").context("failed to write diagnostic")?;
            out.flush().context("failed to flush output")?;
            return Ok(Outcome::ParseFailed);
        }
    };

    match config.line {
        Some(line) => write_records(
            out,
            &index.package,
            index.declaration_at(line),
            config.format,
        ),
        None => write_index(out, &index, config.format),
    }
    .context("failed to write declaration index")?;

    out.flush().context("failed to flush output")?;
    Ok(Outcome::Indexed)
}
