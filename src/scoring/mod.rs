pub mod buckets;
pub mod config;
pub mod engine;
pub mod normalize;
pub mod validation;

pub use buckets::{find_bucket, in_bucket, SizeBucket, SIZE_BUCKETS};
pub use config::{build_scoring, ScoringConfig, ScoringOverrides};
pub use engine::{apply_scoring, score_lead, score_leads, AreaScores, PreparedScoring, ScoreMap};
pub use normalize::normalize;
pub use validation::validate_scoring;
