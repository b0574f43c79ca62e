use std::collections::{BTreeMap, HashSet};

use super::buckets::in_bucket;
use super::config::{is_valid_cap, ScoringConfig};
use super::normalize::normalize;
use crate::leads::Lead;

/// Lead id -> total score
pub type ScoreMap = BTreeMap<u64, u32>;

/// Capped score of each area for a single lead
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AreaScores {
    pub size: u32,
    pub position: u32,
    pub industry: u32,
}

impl AreaScores {
    pub fn total(&self) -> u32 {
        self.size + self.position + self.industry
    }
}

/// Scoring config with keywords normalized, deduplicated and blanks dropped.
/// Built once per scoring run and shared by every lead.
#[derive(Debug, Clone)]
pub struct PreparedScoring {
    size_buckets: Vec<String>,
    position_keywords: Vec<String>,
    industry_keywords: Vec<String>,
    cap: Option<f64>,
}

impl PreparedScoring {
    pub fn new(config: &ScoringConfig) -> Self {
        let mut seen = HashSet::new();
        let size_buckets = config
            .size_keywords
            .iter()
            .filter(|id| seen.insert(*id))
            .cloned()
            .collect();

        Self {
            size_buckets,
            position_keywords: prepare_keywords(&config.position_keywords),
            industry_keywords: prepare_keywords(&config.industry_keywords),
            cap: config.max_score_per_area.filter(|v| is_valid_cap(*v)),
        }
    }

    fn cap_area(&self, points: u32) -> u32 {
        match self.cap {
            // floor keeps totals integral for fractional caps
            Some(cap) => (points as f64).min(cap).floor() as u32,
            None => points,
        }
    }
}

fn prepare_keywords(raw: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(|k| normalize(Some(k)))
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

/// Count keywords occurring in `text`. Each keyword counts at most once.
fn count_matches(text: &str, keywords: &[String]) -> u32 {
    keywords
        .iter()
        .filter(|k| !k.is_empty() && text.contains(k.as_str()))
        .count() as u32
}

/// Score one lead against a prepared config. The lead id is not consulted.
pub fn score_lead(lead: &Lead, prepared: &PreparedScoring) -> AreaScores {
    let size = prepared
        .size_buckets
        .iter()
        .filter(|id| in_bucket(lead.employee_count, id))
        .count() as u32;

    let position = normalize(lead.position.as_deref());
    let industry = normalize(lead.industry.as_deref());

    AreaScores {
        size: prepared.cap_area(size),
        position: prepared.cap_area(count_matches(&position, &prepared.position_keywords)),
        industry: prepared.cap_area(count_matches(&industry, &prepared.industry_keywords)),
    }
}

/// Per-area breakdown for every lead that has an id
pub fn score_leads(leads: &[Lead], config: &ScoringConfig) -> BTreeMap<u64, AreaScores> {
    let prepared = PreparedScoring::new(config);
    tracing::debug!(
        size_buckets = prepared.size_buckets.len(),
        position_keywords = prepared.position_keywords.len(),
        industry_keywords = prepared.industry_keywords.len(),
        cap = ?prepared.cap,
        "prepared scoring config"
    );

    let scores: BTreeMap<u64, AreaScores> = leads
        .iter()
        .filter_map(|lead| lead.scoring_id().map(|id| (id, score_lead(lead, &prepared))))
        .collect();

    tracing::debug!(leads = leads.len(), scored = scores.len(), "computed lead scores");
    scores
}

/// Compute the total score of every lead that has an id.
///
/// Leads are never modified; callers merge the returned map themselves
/// (see `LeadStore::update_scores`).
pub fn apply_scoring(leads: &[Lead], config: &ScoringConfig) -> ScoreMap {
    score_leads(leads, config)
        .into_iter()
        .map(|(id, areas)| (id, areas.total()))
        .collect()
}
