use serde::{Deserialize, Serialize};

use super::buckets::find_bucket;
use super::normalize::normalize;
use super::validation::validate_scoring;

/// Keyword scoring configuration.
///
/// Three areas are scored independently: company size (selected bucket ids),
/// position keywords and industry keywords. Each area can be capped.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   size_keywords: ["51-500", "501-5000"]
///   position_keywords: ["head of sales", "einkauf"]
///   industry_keywords: ["software"]
///   max_score_per_area: 2
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Selected size bucket ids (see `SIZE_BUCKETS`)
    #[serde(default)]
    pub size_keywords: Vec<String>,

    /// Keywords matched as substrings of the lead's position
    #[serde(default)]
    pub position_keywords: Vec<String>,

    /// Keywords matched as substrings of the lead's industry
    #[serde(default)]
    pub industry_keywords: Vec<String>,

    /// Optional ceiling per area. None means unlimited.
    #[serde(default)]
    pub max_score_per_area: Option<f64>,
}

impl ScoringConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing is selected and no cap is set
    pub fn is_empty(&self) -> bool {
        self.size_keywords.is_empty()
            && self.position_keywords.is_empty()
            && self.industry_keywords.is_empty()
            && self.max_score_per_area.is_none()
    }

    /// True when at least one bucket or keyword is selected. A cap alone
    /// cannot produce a score.
    pub fn has_criteria(&self) -> bool {
        !self.size_keywords.is_empty()
            || !self.position_keywords.is_empty()
            || !self.industry_keywords.is_empty()
    }

    pub fn has_size_bucket(&self, id: &str) -> bool {
        self.size_keywords.iter().any(|b| b == id)
    }

    /// Select the bucket if it is not selected, otherwise deselect it
    pub fn toggle_size_bucket(&mut self, id: &str) {
        if self.has_size_bucket(id) {
            self.size_keywords.retain(|b| b != id);
        } else {
            self.size_keywords.push(id.to_string());
        }
    }

    /// Normalize and append a position keyword. Blank or duplicate input is ignored.
    pub fn add_position_keyword(&mut self, raw: &str) {
        add_normalized(&mut self.position_keywords, raw);
    }

    pub fn remove_position_keyword(&mut self, value: &str) {
        self.position_keywords.retain(|k| k != value);
    }

    /// Normalize and append an industry keyword. Blank or duplicate input is ignored.
    pub fn add_industry_keyword(&mut self, raw: &str) {
        add_normalized(&mut self.industry_keywords, raw);
    }

    pub fn remove_industry_keyword(&mut self, value: &str) {
        self.industry_keywords.retain(|k| k != value);
    }

    /// Set the per-area cap. Anything other than a positive finite number
    /// clears the cap.
    pub fn set_max_cap(&mut self, value: Option<f64>) {
        self.max_score_per_area = value.filter(|v| is_valid_cap(*v));
    }

    /// Effective cap, None when unbounded
    pub fn max_cap(&self) -> Option<f64> {
        self.max_score_per_area.filter(|v| is_valid_cap(*v))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Command-line adjustments layered on top of the config file's scoring section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringOverrides {
    /// Bucket ids to select
    pub size_buckets: Vec<String>,
    pub position_keywords: Vec<String>,
    pub industry_keywords: Vec<String>,
    pub cap: Option<f64>,
    /// Start from an empty config instead of the file's section
    pub ignore_file: bool,
}

/// Build the effective scoring config: file section first, then overrides.
///
/// The file section is validated before anything is applied. Unknown bucket
/// ids in the overrides are errors; a bucket already selected stays selected.
/// An invalid cap is logged and leaves every area unlimited.
pub fn build_scoring(
    base: Option<ScoringConfig>,
    overrides: &ScoringOverrides,
) -> Result<ScoringConfig, Vec<String>> {
    let mut scoring = if overrides.ignore_file {
        ScoringConfig::new()
    } else {
        base.unwrap_or_default()
    };
    validate_scoring(&scoring)?;

    let unknown: Vec<String> = overrides
        .size_buckets
        .iter()
        .filter(|id| find_bucket(id).is_none())
        .map(|id| format!("--size: unknown bucket '{}'", id))
        .collect();
    if !unknown.is_empty() {
        return Err(unknown);
    }

    for id in &overrides.size_buckets {
        if !scoring.has_size_bucket(id) {
            scoring.toggle_size_bucket(id);
        }
    }
    for keyword in &overrides.position_keywords {
        scoring.add_position_keyword(keyword);
    }
    for keyword in &overrides.industry_keywords {
        scoring.add_industry_keyword(keyword);
    }
    if let Some(cap) = overrides.cap {
        scoring.set_max_cap(Some(cap));
        if scoring.max_cap().is_none() {
            tracing::warn!(cap, "ignoring invalid cap, scoring areas are unlimited");
        }
    }

    Ok(scoring)
}

pub(crate) fn is_valid_cap(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn add_normalized(list: &mut Vec<String>, raw: &str) {
    let keyword = normalize(Some(raw));
    if keyword.is_empty() || list.contains(&keyword) {
        return;
    }
    list.push(keyword);
}
