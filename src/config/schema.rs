use crate::scoring::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON file with the lead collection. `~/` is expanded.
    #[serde(default)]
    pub leads: Option<PathBuf>,

    /// Scoring scheme preloaded before command-line adjustments
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
