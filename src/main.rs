use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use leadscore::leads::{LeadStore, SortColumn, SortDir};
use leadscore::scoring::ScoringOverrides;

const EXIT_SUCCESS: i32 = 0;
const EXIT_SOURCE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Tsv,
    Json,
}

/// Adjustments applied on top of the scoring section of the config file
#[derive(Args, Debug, Default)]
struct ScoringArgs {
    /// Select a size bucket (repeatable), e.g. --size 51-500
    #[arg(long = "size", value_name = "BUCKET")]
    size: Vec<String>,

    /// Add a position keyword (repeatable)
    #[arg(long = "position", value_name = "KEYWORD")]
    position: Vec<String>,

    /// Add an industry keyword (repeatable)
    #[arg(long = "industry", value_name = "KEYWORD")]
    industry: Vec<String>,

    /// Maximum points per area (size, position, industry)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    cap: Option<f64>,

    /// Ignore the scoring section of the config file
    #[arg(long)]
    reset_scoring: bool,
}

impl ScoringArgs {
    fn to_overrides(&self) -> ScoringOverrides {
        ScoringOverrides {
            size_buckets: self.size.clone(),
            position_keywords: self.position.clone(),
            industry_keywords: self.industry.clone(),
            cap: self.cap,
            ignore_file: self.reset_scoring,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List leads ranked by score (default if no subcommand)
    List {
        /// Only show leads whose company, industry, city or email contains this text
        #[arg(short, long)]
        query: Option<String>,

        /// Only show leads with this status
        #[arg(long)]
        status: Option<String>,

        /// Only show leads scoring at least this much
        #[arg(long)]
        min_score: Option<u32>,

        /// Sort column (default: score, highest first)
        #[arg(long, value_enum)]
        sort: Option<SortColumn>,

        /// Sort ascending
        #[arg(long, conflicts_with = "desc")]
        asc: bool,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Skip scoring and show every lead with score 0
        #[arg(long)]
        no_score: bool,

        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// Show how a lead's score is made up
    Explain {
        /// Lead id
        id: u64,

        #[command(flatten)]
        scoring: ScoringArgs,
    },
    /// List the company size buckets
    Buckets {
        #[command(flatten)]
        scoring: ScoringArgs,
    },
}

#[derive(Parser, Debug)]
#[command(name = "leadscore")]
#[command(about = "Rank sales leads by keyword and company-size scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/leadscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// JSON file with leads (overrides `leads` in the config file)
    #[arg(long, global = true, conflicts_with = "mock")]
    leads: Option<PathBuf>,

    /// Use the built-in demo leads
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "leadscore=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Load leads from --mock, --leads or the config file. Exits on failure.
fn load_lead_store(
    leads_path: Option<PathBuf>,
    mock: bool,
    config_leads: Option<PathBuf>,
    verbose: bool,
) -> LeadStore {
    let leads = if mock {
        leadscore::leads::mock_leads()
    } else {
        let Some(path) = leads_path.or(config_leads) else {
            eprintln!("No lead source configured.");
            eprintln!("Pass --leads <FILE>, --mock, or add to ~/.config/leadscore/config.yaml:");
            eprintln!("  leads: ~/leads.json");
            std::process::exit(EXIT_CONFIG);
        };
        let path = leadscore::config::expand_home(&path);
        match leadscore::leads::load_leads(&path) {
            Ok(leads) => leads,
            Err(e) => {
                eprintln!("Lead source error: {:#}", e);
                std::process::exit(EXIT_SOURCE);
            }
        }
    };

    if verbose {
        eprintln!("Loaded {} leads", leads.len());
    }

    LeadStore::new(leads)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::List {
        query: None,
        status: None,
        min_score: None,
        sort: None,
        asc: false,
        desc: false,
        format: OutputFormat::Table,
        no_score: false,
        scoring: ScoringArgs::default(),
    });
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match leadscore::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let scoring_args = match &command {
        Commands::List { scoring, .. }
        | Commands::Explain { scoring, .. }
        | Commands::Buckets { scoring } => scoring,
    };

    // Validate scoring config at startup
    let scoring = match leadscore::scoring::build_scoring(
        config.scoring.clone(),
        &scoring_args.to_overrides(),
    ) {
        Ok(s) => s,
        Err(errors) => {
            eprintln!("Scoring config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!(
            "Scoring: {}",
            leadscore::output::format_scoring_summary(&scoring)
        );
    }

    let use_colors = leadscore::output::should_use_colors();

    match command {
        Commands::List {
            query,
            status,
            min_score,
            sort,
            asc,
            desc,
            format,
            no_score,
            scoring: _,
        } => {
            let mut store = load_lead_store(cli.leads, cli.mock, config.leads, cli.verbose);
            if no_score {
                store.reset_scores();
            } else if !store.score_with(&scoring) && cli.verbose {
                eprintln!("No scoring criteria set, showing stored scores");
            }

            store.query = query.unwrap_or_default();
            store.status_filter = status;
            store.min_score = min_score;
            if let Some(column) = sort {
                store.set_sort(column);
            }
            if asc {
                store.sort_dir = SortDir::Asc;
            } else if desc {
                store.sort_dir = SortDir::Desc;
            }

            let visible = store.visible();
            let output = match format {
                OutputFormat::Table => leadscore::output::format_lead_table(&visible, use_colors),
                OutputFormat::Tsv => leadscore::output::format_tsv(&visible),
                OutputFormat::Json => match leadscore::output::format_json(&visible) {
                    Ok(json) => json,
                    Err(e) => {
                        eprintln!("Failed to serialize leads: {}", e);
                        std::process::exit(EXIT_SOURCE);
                    }
                },
            };
            if !output.is_empty() {
                println!("{}", output);
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Showing {} of {} leads in {:?}",
                    visible.len(),
                    store.leads.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Explain { id, scoring: _ } => {
            let mut store = load_lead_store(cli.leads, cli.mock, config.leads, cli.verbose);
            let breakdown = leadscore::scoring::score_leads(&store.leads, &scoring);
            let Some(areas) = breakdown.get(&id) else {
                eprintln!("No lead with id {}.", id);
                std::process::exit(EXIT_CONFIG);
            };

            // Without criteria the stored score is shown, as in `list`
            if scoring.has_criteria() {
                let scores: leadscore::scoring::ScoreMap = breakdown
                    .iter()
                    .map(|(id, areas)| (*id, areas.total()))
                    .collect();
                store.update_scores(&scores);
            }

            if let Some(lead) = store.find(id) {
                println!(
                    "{}",
                    leadscore::output::format_lead_detail(lead, use_colors)
                );
            }
            println!("{}", leadscore::output::format_breakdown(areas));
        }
        Commands::Buckets { .. } => {
            println!(
                "{}",
                leadscore::output::format_bucket_catalog(&scoring, use_colors)
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
