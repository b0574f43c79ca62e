use super::buckets::find_bucket;
use super::config::{is_valid_cap, ScoringConfig};
use super::normalize::normalize;

/// Validate a scoring configuration loaded from file.
/// Returns all validation errors at once (not just the first).
///
/// Scoring itself tolerates every one of these problems; this only exists so
/// that typos in the config file get reported instead of silently scoring 0.
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, id) in config.size_keywords.iter().enumerate() {
        if find_bucket(id).is_none() {
            errors.push(format!(
                "scoring.size_keywords[{}]: unknown bucket '{}'",
                i, id
            ));
        }
    }

    for (i, keyword) in config.position_keywords.iter().enumerate() {
        if normalize(Some(keyword)).is_empty() {
            errors.push(format!("scoring.position_keywords[{}]: blank keyword", i));
        }
    }

    for (i, keyword) in config.industry_keywords.iter().enumerate() {
        if normalize(Some(keyword)).is_empty() {
            errors.push(format!("scoring.industry_keywords[{}]: blank keyword", i));
        }
    }

    if let Some(cap) = config.max_score_per_area {
        if !is_valid_cap(cap) {
            errors.push(format!(
                "scoring.max_score_per_area: must be a positive number, got {}",
                cap
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
