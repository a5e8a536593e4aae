//! Output section: how records are labelled and encoded.

use declmap_parser::{ClassifyOptions, OutputFormat, Taxonomy};
use serde::{Deserialize, Serialize};

const fn default_qualify_methods() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Record encoding: `csv`, `tsv` or `jsonl`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Kind labels for grouped declarations: `detailed` or `legacy`.
    #[serde(default)]
    pub taxonomy: Taxonomy,

    /// Name methods `Receiver.Method`.
    #[serde(default = "default_qualify_methods")]
    pub qualify_methods: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            taxonomy: Taxonomy::default(),
            qualify_methods: default_qualify_methods(),
        }
    }
}

impl OutputConfig {
    /// Classifier options described by this section.
    #[must_use]
    pub const fn classify_options(&self) -> ClassifyOptions {
        ClassifyOptions {
            taxonomy: self.taxonomy,
            qualify_methods: self.qualify_methods,
        }
    }
}
