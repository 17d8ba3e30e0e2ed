//! Learning Path - command line planner
//!
//! Builds a plan for one learner and prints it as text or JSON. Without a
//! profile file it plans for a demonstration learner against the embedded
//! concept library.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use learning_path::catalog::loader::{check_catalog, load_catalog};
use learning_path::planner::render_text;
use learning_path::{
    ConceptCatalog, ConceptId, LearnerProfile, LearningPlanner, LearningStyle, PlannerConfig,
    Result,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Plan an ordered, time-boxed study path toward target concepts
#[derive(Parser, Debug)]
#[command(name = "learning-path")]
#[command(about = "Resolve prerequisites and build a study plan sized to the learner")]
struct Args {
    /// Concept catalog TOML file (defaults to the embedded library)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Learner profile JSON file (defaults to the demonstration learner)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Planner configuration TOML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target concept; repeat for several, resolved in the given order
    #[arg(long = "target", short = 't')]
    targets: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("learning_path=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };

    let catalog = match &args.catalog {
        Some(path) => load_catalog(path, &config)?,
        None => {
            let catalog = ConceptCatalog::with_defaults();
            check_catalog(&catalog, &config)?;
            catalog
        }
    };

    let profile = match &args.profile {
        Some(path) => LearnerProfile::from_json(&std::fs::read_to_string(path)?, &config)?,
        None => demonstration_learner(),
    };

    let targets: Vec<ConceptId> = if args.targets.is_empty() {
        vec!["quadratic_equations".into(), "functions".into()]
    } else {
        args.targets.into_iter().map(ConceptId::from).collect()
    };

    tracing::info!(
        targets = targets.len(),
        catalog = catalog.len(),
        "planning learning path"
    );

    let planner = LearningPlanner::new(&catalog, config);
    let plan = planner.plan(targets.as_slice(), &profile)?;

    match args.format {
        OutputFormat::Text => {
            println!("Generated Learning Path:");
            print!("{}", render_text(&plan));
        }
        OutputFormat::Json => println!("{}", plan.to_json()?),
    }

    Ok(())
}

/// Learner used when no profile file is given
fn demonstration_learner() -> LearnerProfile {
    LearnerProfile::new(0.7, 25, LearningStyle::Visual)
        .with_mastery("basic_arithmetic", 0.9)
        .with_mastery("fractions", 0.3)
        .with_mastery("decimals", 0.1)
}
