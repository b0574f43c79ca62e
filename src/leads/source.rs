use super::types::Lead;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load leads from a JSON file containing an array of lead records
pub fn load_leads(path: &Path) -> Result<Vec<Lead>> {
    if !path.exists() {
        anyhow::bail!("Lead file not found at {}", path.display());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open lead file at {}", path.display()))?;

    let leads: Vec<Lead> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse leads: invalid JSON in {}", path.display()))?;

    tracing::debug!(count = leads.len(), path = %path.display(), "loaded leads");
    Ok(leads)
}

#[allow(clippy::too_many_arguments)]
fn mock(
    id: u64,
    company: &str,
    contact: &str,
    city: &str,
    industry: &str,
    position: &str,
    employees: u64,
    status: &str,
) -> Lead {
    let domain = company
        .split_whitespace()
        .next()
        .unwrap_or("example")
        .to_lowercase();
    Lead {
        id: Some(id),
        company_name: Some(company.to_string()),
        lead: Some(contact.to_string()),
        location: Some(city.to_string()),
        city: Some(city.to_string()),
        country: Some("DE".to_string()),
        email: Some(format!("info@{}.example", domain)),
        website: Some(format!("https://{}.example", domain)),
        industry: Some(industry.to_string()),
        position: Some(position.to_string()),
        employee_count: Some(employees),
        status: Some(status.to_string()),
        ..Lead::default()
    }
}

/// Built-in demo data set, used when no lead file is available
pub fn mock_leads() -> Vec<Lead> {
    vec![
        mock(1, "Torsten Thiemann", "Torsten Thiemann", "Westertimke", "Handwerk", "Inhaber", 8, "new"),
        mock(2, "Beta BioTech AG", "Sarah Müller", "Hamburg", "Biotech", "Head of R&D", 340, "new"),
        mock(3, "Gamma Logistics KG", "Thomas Schmidt", "München", "Logistics", "Leiter Einkauf", 1200, "contacted"),
        mock(4, "Delta Consulting GmbH", "Jennifer Wagner", "Düsseldorf", "Consulting", "Partner", 45, "new"),
        mock(5, "Epsilon Retail AG", "Andreas Fischer", "Köln", "Retail", "Head of Sales", 2300, "qualified"),
        mock(6, "Zeta Energy SE", "Maria Becker", "Essen", "Energy", "CFO", 8700, "contacted"),
        mock(7, "Eta Health GmbH", "Dr. Christian Hoffmann", "Stuttgart", "Healthcare", "Geschäftsführer", 150, "new"),
        mock(8, "Theta FinTech AG", "Lisa Zimmermann", "Frankfurt", "FinTech Software", "CTO", 95, "qualified"),
        mock(9, "Iota Manufacturing GmbH", "Robert Klein", "Leipzig", "Manufacturing", "Procurement Manager", 640, "new"),
        mock(10, "Kappa Media AG", "Stephanie Wolf", "Berlin", "Media", "Head of Marketing", 210, "lost"),
        mock(11, "Lambda Global Corp", "Marco Richter", "Stuttgart", "Automotive", "Operations Director", 45_000, "contacted"),
    ]
}
