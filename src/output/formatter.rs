use std::io::IsTerminal;
use chrono::Duration;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::leads::Lead;
use crate::scoring::{AreaScores, ScoringConfig, SIZE_BUCKETS};

/// Score band used for coloring: 0 neutral, 1 low, 2 medium, 3+ high
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBadge {
    Neutral,
    Low,
    Medium,
    High,
}

impl ScoreBadge {
    pub fn for_score(score: u32) -> Self {
        match score {
            0 => ScoreBadge::Neutral,
            1 => ScoreBadge::Low,
            2 => ScoreBadge::Medium,
            _ => ScoreBadge::High,
        }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Right-align a score in `width` columns, colored by badge
fn format_score_cell(score: u32, width: usize, use_colors: bool) -> String {
    let padded = format!("{:>width$}", score, width = width);
    if !use_colors {
        return padded;
    }
    match ScoreBadge::for_score(score) {
        ScoreBadge::Neutral => padded.dimmed().to_string(),
        ScoreBadge::Low => padded.red().to_string(),
        ScoreBadge::Medium => padded.yellow().to_string(),
        ScoreBadge::High => padded.green().bold().to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn format_employees(count: Option<u64>) -> String {
    count.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Format leads as a ranked table with columns: Index, Score, Company,
/// Position, Industry, Employees. No headers.
/// Company is truncated to the terminal width; pipes get full text.
pub fn format_lead_table(leads: &[&Lead], use_colors: bool) -> String {
    if leads.is_empty() {
        return "No leads found.".to_string();
    }

    let term_width = get_terminal_width();
    let score_width = 3;
    let separator = "  ";

    leads
        .iter()
        .enumerate()
        .map(|(idx, lead)| {
            let index_str = format!("{:>3}.", idx + 1);
            let score_str = format_score_cell(lead.score, score_width, use_colors);
            let details = format!(
                "{} | {} | {}",
                lead.position.as_deref().unwrap_or("-"),
                lead.industry.as_deref().unwrap_or("-"),
                format_employees(lead.employee_count)
            );

            let fixed_width = 4 + 1 + score_width + separator.len() * 2 + details.chars().count();
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate(lead.display_name(), width - fixed_width)
                }
                // Very narrow terminal
                Some(_) => truncate(lead.display_name(), 20),
                None => lead.display_name().to_string(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_str,
                    separator,
                    name.bold(),
                    separator,
                    details.dimmed()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_str, separator, name, separator, details
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format leads as tab-separated values for scripting
/// Columns: id, score, company, position, industry, employees (no headers, no colors)
pub fn format_tsv(leads: &[&Lead]) -> String {
    leads
        .iter()
        .map(|lead| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                lead.id.map(|id| id.to_string()).unwrap_or_default(),
                lead.score,
                lead.company_name.as_deref().unwrap_or(""),
                lead.position.as_deref().unwrap_or(""),
                lead.industry.as_deref().unwrap_or(""),
                lead.employee_count.map(|c| c.to_string()).unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format leads as a pretty-printed JSON array
pub fn format_json(leads: &[&Lead]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(leads)?)
}

/// Format a single lead with detailed multi-line output
pub fn format_lead_detail(lead: &Lead, use_colors: bool) -> String {
    let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    let age = lead.age().map(format_age).unwrap_or_else(|| "-".to_string());
    let name = if use_colors {
        lead.display_name().bold().to_string()
    } else {
        lead.display_name().to_string()
    };

    format!(
        "{}\n  Contact: {}\n  Position: {}\n  Industry: {}\n  Employees: {}\n  City: {}\n  Status: {}\n  Updated: {}\n  Score: {}",
        name,
        field(&lead.lead),
        field(&lead.position),
        field(&lead.industry),
        format_employees(lead.employee_count),
        field(&lead.city),
        field(&lead.status),
        age,
        format_score_cell(lead.score, 0, use_colors)
    )
}

/// Format the per-area breakdown of a score
pub fn format_breakdown(areas: &AreaScores) -> String {
    format!(
        "  Size: {}\n  Position: {}\n  Industry: {}\n  Total: {}",
        areas.size,
        areas.position,
        areas.industry,
        areas.total()
    )
}

/// List the bucket catalog, marking buckets selected in `config`
pub fn format_bucket_catalog(config: &ScoringConfig, use_colors: bool) -> String {
    SIZE_BUCKETS
        .iter()
        .map(|bucket| {
            let active = config.has_size_bucket(bucket.id);
            let marker = if active { "[x]" } else { "[ ]" };
            let line = format!(
                "{} {:<12} {} - {} employees",
                marker, bucket.id, bucket.min, bucket.max
            );
            if use_colors && active {
                line.cyan().to_string()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line summary of the active scoring scheme
pub fn format_scoring_summary(config: &ScoringConfig) -> String {
    let list = |items: &[String]| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    };
    let cap = config
        .max_cap()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "unlimited".to_string());
    format!(
        "size: {} | position: {} | industry: {} | cap: {}",
        list(&config.size_keywords),
        list(&config.position_keywords),
        list(&config.industry_keywords),
        cap
    )
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lead() -> Lead {
        Lead {
            id: Some(5),
            company_name: Some("Epsilon Retail AG".to_string()),
            lead: Some("Andreas Fischer".to_string()),
            position: Some("Head of Sales".to_string()),
            industry: Some("Retail".to_string()),
            employee_count: Some(2300),
            city: Some("Köln".to_string()),
            status: Some("qualified".to_string()),
            score: 4,
            ..Lead::default()
        }
    }

    #[test]
    fn test_score_badge() {
        assert_eq!(ScoreBadge::for_score(0), ScoreBadge::Neutral);
        assert_eq!(ScoreBadge::for_score(1), ScoreBadge::Low);
        assert_eq!(ScoreBadge::for_score(2), ScoreBadge::Medium);
        assert_eq!(ScoreBadge::for_score(3), ScoreBadge::High);
        assert_eq!(ScoreBadge::for_score(30), ScoreBadge::High);
    }

    #[test]
    fn test_score_cell_colors() {
        assert_eq!(format_score_cell(0, 3, false), "  0");
        assert_eq!(format_score_cell(0, 3, true), "  0".dimmed().to_string());
        assert_eq!(format_score_cell(1, 3, true), "  1".red().to_string());
        assert_eq!(format_score_cell(2, 3, true), "  2".yellow().to_string());
        assert_eq!(format_score_cell(3, 3, true), "  3".green().bold().to_string());
    }

    #[test]
    fn test_format_lead_table_empty() {
        assert_eq!(format_lead_table(&[], false), "No leads found.");
    }

    #[test]
    fn test_format_lead_table_single() {
        let lead = sample_lead();
        let result = format_lead_table(&[&lead], false);
        assert!(result.starts_with("  1."));
        assert!(result.contains("Head of Sales | Retail | 2300"));
        assert!(result.contains("  4  "));
    }

    #[test]
    fn test_format_lead_table_missing_fields() {
        let lead = Lead {
            id: Some(1),
            ..Lead::default()
        };
        let result = format_lead_table(&[&lead], false);
        assert!(result.contains("- | - | -"));
    }

    #[test]
    fn test_format_lead_table_multiple() {
        let first = sample_lead();
        let mut second = sample_lead();
        second.company_name = Some("Zeta Energy SE".to_string());
        second.score = 1;

        let result = format_lead_table(&[&first, &second], false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("  1."));
        assert!(lines[1].contains("  2."));
        assert!(lines[1].contains("Zeta Energy SE"));
    }

    #[test]
    fn test_format_tsv() {
        let lead = sample_lead();
        assert_eq!(
            format_tsv(&[&lead]),
            "5\t4\tEpsilon Retail AG\tHead of Sales\tRetail\t2300"
        );
    }

    #[test]
    fn test_format_tsv_empty_fields() {
        let lead = Lead::default();
        assert_eq!(format_tsv(&[&lead]), "\t0\t\t\t\t");
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_json() {
        let lead = sample_lead();
        let json = format_json(&[&lead]).unwrap();
        let parsed: Vec<Lead> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![lead]);
    }

    #[test]
    fn test_format_lead_detail() {
        let result = format_lead_detail(&sample_lead(), false);
        assert!(result.starts_with("Epsilon Retail AG"));
        assert!(result.contains("Contact: Andreas Fischer"));
        assert!(result.contains("Employees: 2300"));
        assert!(result.contains("Updated: -"));
        assert!(result.contains("Score: 4"));
    }

    #[test]
    fn test_format_breakdown() {
        let areas = AreaScores {
            size: 1,
            position: 2,
            industry: 0,
        };
        let result = format_breakdown(&areas);
        assert!(result.contains("Position: 2"));
        assert!(result.contains("Total: 3"));
    }

    #[test]
    fn test_format_bucket_catalog_marks_active() {
        let mut config = ScoringConfig::new();
        config.toggle_size_bucket("51-500");
        let result = format_bucket_catalog(&config, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("[ ] 0-50"));
        assert!(lines[1].starts_with("[x] 51-500"));
    }

    #[test]
    fn test_format_scoring_summary() {
        let mut config = ScoringConfig::new();
        assert_eq!(
            format_scoring_summary(&config),
            "size: - | position: - | industry: - | cap: unlimited"
        );
        config.add_position_keyword("CEO");
        config.add_position_keyword("CTO");
        config.set_max_cap(Some(2.0));
        assert_eq!(
            format_scoring_summary(&config),
            "size: - | position: ceo, cto | industry: - | cap: 2"
        );
    }

    #[test]
    fn test_truncate_unicode() {
        assert_eq!(truncate("Düsseldorf", 10), "Düsseldorf");
        assert_eq!(truncate("Düsseldorf Consulting", 10), "Düsseld...");
        assert_eq!(truncate("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::hours(3)), "3h");
        assert_eq!(format_age(Duration::days(2)), "2d");
        assert_eq!(format_age(Duration::weeks(2)), "2w");
        assert_eq!(format_age(Duration::minutes(30)), "30m");
        assert_eq!(format_age(Duration::seconds(30)), "now");
    }
}
