use super::types::Lead;
use crate::scoring::{apply_scoring, ScoreMap, ScoringConfig};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortColumn {
    Score,
    Id,
    #[value(name = "company")]
    CompanyName,
    #[value(name = "employees")]
    EmployeeCount,
    Revenue,
    Industry,
    Position,
    City,
    Status,
    #[value(name = "created")]
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn flip(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    /// Default direction when switching to a column: highest score first,
    /// everything else ascending
    fn default_for(column: SortColumn) -> Self {
        if column == SortColumn::Score {
            SortDir::Desc
        } else {
            SortDir::Asc
        }
    }
}

/// Caller-owned lead collection plus the view state used to list it.
///
/// Scores are computed elsewhere (`scoring::apply_scoring`) and merged in
/// with `update_scores`.
#[derive(Debug, Clone)]
pub struct LeadStore {
    pub leads: Vec<Lead>,
    pub query: String,
    pub status_filter: Option<String>,
    pub min_score: Option<u32>,
    pub sort_by: SortColumn,
    pub sort_dir: SortDir,
}

impl LeadStore {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self {
            leads,
            query: String::new(),
            status_filter: None,
            min_score: None,
            sort_by: SortColumn::Score,
            sort_dir: SortDir::Desc,
        }
    }

    /// Merge a score map into the leads. Leads with an id missing from the
    /// map keep their score, leads without an id are left alone.
    pub fn update_scores(&mut self, scores: &ScoreMap) {
        for lead in &mut self.leads {
            if let Some(score) = lead.scoring_id().and_then(|id| scores.get(&id)) {
                lead.score = *score;
            }
        }
    }

    /// Score all leads with `config` and merge the result.
    ///
    /// A config without any bucket or keyword leaves the stored scores as
    /// delivered by the source. Returns whether scores were merged.
    pub fn score_with(&mut self, config: &ScoringConfig) -> bool {
        if !config.has_criteria() {
            tracing::debug!("no scoring criteria, keeping stored scores");
            return false;
        }
        let scores = apply_scoring(&self.leads, config);
        self.update_scores(&scores);
        true
    }

    /// Set every lead's score to 0
    pub fn reset_scores(&mut self) {
        for lead in &mut self.leads {
            lead.score = 0;
        }
    }

    /// Sort by `column`. Selecting the current column again flips direction.
    pub fn set_sort(&mut self, column: SortColumn) {
        if self.sort_by == column {
            self.sort_dir = self.sort_dir.flip();
        } else {
            self.sort_by = column;
            self.sort_dir = SortDir::default_for(column);
        }
    }

    pub fn find(&self, id: u64) -> Option<&Lead> {
        self.leads.iter().find(|l| l.scoring_id() == Some(id))
    }

    /// Leads passing the current filters, in the current sort order
    pub fn visible(&self) -> Vec<&Lead> {
        let query = self.query.trim().to_lowercase();

        let mut visible: Vec<&Lead> = self
            .leads
            .iter()
            .filter(|lead| query.is_empty() || haystack(lead).contains(&query))
            .filter(|lead| match &self.status_filter {
                Some(status) => lead.status.as_deref() == Some(status.as_str()),
                None => true,
            })
            .filter(|lead| self.min_score.is_none_or(|min| lead.score >= min))
            .collect();

        // stable, so equal keys keep source order
        visible.sort_by(|a, b| {
            let ord = compare(a, b, self.sort_by);
            match self.sort_dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
        visible
    }
}

fn haystack(lead: &Lead) -> String {
    format!(
        "{} {} {} {}",
        lead.company_name.as_deref().unwrap_or(""),
        lead.industry.as_deref().unwrap_or(""),
        lead.city.as_deref().unwrap_or(""),
        lead.email.as_deref().unwrap_or("")
    )
    .to_lowercase()
}

fn compare_text(a: &Option<String>, b: &Option<String>) -> Ordering {
    let a = a.as_ref().map(|s| s.to_lowercase());
    let b = b.as_ref().map(|s| s.to_lowercase());
    a.cmp(&b)
}

/// Ascending comparison on one column. Missing values sort first.
fn compare(a: &Lead, b: &Lead, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Score => a.score.cmp(&b.score),
        SortColumn::Id => a.id.cmp(&b.id),
        SortColumn::CompanyName => compare_text(&a.company_name, &b.company_name),
        SortColumn::EmployeeCount => a.employee_count.cmp(&b.employee_count),
        SortColumn::Revenue => a
            .revenue
            .partial_cmp(&b.revenue)
            .unwrap_or(Ordering::Equal),
        SortColumn::Industry => compare_text(&a.industry, &b.industry),
        SortColumn::Position => compare_text(&a.position, &b.position),
        SortColumn::City => compare_text(&a.city, &b.city),
        SortColumn::Status => compare_text(&a.status, &b.status),
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}
