pub mod index;

/// How a run ended, mapped to the process exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The index was written.
    Indexed,
    /// The file could not be read or parsed; a diagnostic line was written.
    ParseFailed,
}
