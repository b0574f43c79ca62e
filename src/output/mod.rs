pub mod formatter;

pub use formatter::{
    format_age, format_breakdown, format_bucket_catalog, format_json, format_lead_detail,
    format_lead_table, format_scoring_summary, format_tsv, should_use_colors, ScoreBadge,
};
