use leadscore::leads::{load_leads, mock_leads, Lead, LeadStore};
use std::fs;
use leadscore::scoring::{apply_scoring, normalize, ScoringConfig};

fn lead(id: Option<u64>, employees: Option<u64>, position: Option<&str>, industry: Option<&str>) -> Lead {
    Lead {
        id,
        employee_count: employees,
        position: position.map(str::to_string),
        industry: industry.map(str::to_string),
        ..Lead::default()
    }
}

#[test]
fn panel_flow_scores_and_merges() {
    // Build a scheme the way the interactive panel does
    let mut config = ScoringConfig::new();
    config.toggle_size_bucket("51-500");
    config.add_position_keyword("Head of Sales");
    config.add_position_keyword("sales");
    config.add_industry_keyword("Software");

    let mut store = LeadStore::new(vec![
        lead(Some(1), Some(120), Some("Head of Sales"), Some("Software")),
        lead(Some(2), None, None, None),
        lead(None, Some(120), Some("Head of Sales"), Some("Software")),
    ]);

    let scores = apply_scoring(&store.leads, &config);
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[&1], 4);
    assert_eq!(scores[&2], 0);

    store.update_scores(&scores);
    assert_eq!(store.leads[0].score, 4);
    assert_eq!(store.leads[1].score, 0);
    assert_eq!(store.leads[2].score, 0);

    // Cap each area at one point
    config.set_max_cap(Some(1.0));
    store.update_scores(&apply_scoring(&store.leads, &config));
    assert_eq!(store.leads[0].score, 3);

    let ranked = store.visible();
    assert_eq!(ranked[0].id, Some(1));

    // Reset pathway
    config.reset();
    store.reset_scores();
    assert!(config.is_empty());
    assert!(store.leads.iter().all(|l| l.score == 0));
}

#[test]
fn empty_config_scores_every_mock_lead_zero() {
    let leads = mock_leads();
    let scores = apply_scoring(&leads, &ScoringConfig::default());
    assert_eq!(scores.len(), leads.len());
    assert!(scores.values().all(|s| *s == 0));
}

#[test]
fn mock_leads_rank_by_configured_scheme() {
    let mut config = ScoringConfig::new();
    config.toggle_size_bucket("51-500");
    config.add_position_keyword("Geschäftsführer");
    config.add_industry_keyword("healthcare");

    let mut store = LeadStore::new(mock_leads());
    store.update_scores(&apply_scoring(&store.leads, &config));

    let top = store.visible()[0];
    assert_eq!(top.company_name.as_deref(), Some("Eta Health GmbH"));
    assert_eq!(top.score, 3);
}

#[test]
fn normalization_matches_across_accents() {
    assert_eq!(normalize(Some("MÜLLER")), normalize(Some("muller")));

    let mut config = ScoringConfig::new();
    config.add_position_keyword("geschaftsfuhrer");
    let scores = apply_scoring(
        &[lead(Some(9), None, Some("GESCHÄFTSFÜHRER"), None)],
        &config,
    );
    assert_eq!(scores[&9], 1);
}

#[test]
fn stored_scores_survive_listing_without_scheme() {
    let path = std::env::temp_dir().join("leadscore_test_stored_scores.json");
    fs::write(
        &path,
        r#"[{"id": 1, "company_name": "Alpha", "score": 5}, {"id": 2, "company_name": "Beta"}]"#,
    )
    .unwrap();

    let mut store = LeadStore::new(load_leads(&path).unwrap());
    assert!(!store.score_with(&ScoringConfig::default()));
    assert_eq!(store.leads[0].score, 5);
    assert_eq!(store.leads[1].score, 0);

    store.min_score = Some(1);
    let visible = store.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, Some(1));

    // A scheme with criteria replaces the stored score
    let mut config = ScoringConfig::new();
    config.add_industry_keyword("software");
    assert!(store.score_with(&config));
    assert_eq!(store.leads[0].score, 0);

    let _ = fs::remove_file(&path);
}
