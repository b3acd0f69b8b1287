//! Folio CLI - portfolio experience aggregator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::{experience_table, ExperienceTracker, SkillDisplay};
use folio_storage::JsonPortfolioStore;
use folio_tracker::{convert_to_skills, generate_trackers, PortfolioUpdater};
use tracing::Level;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio experience aggregator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recompute experience and write it into the portfolio file
    Update {
        /// Portfolio JSON file to update
        #[arg(long, default_value = "portfolio.json")]
        file: PathBuf,
    },
    /// Print the computed experience without touching any file
    Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Update { file } => {
            let store = JsonPortfolioStore::new(&file);
            let mut updater = PortfolioUpdater::new(store);
            let report = updater.run().await?;

            println!("Updated {}", file.display());
            print_summary(&report.trackers, &report.skills);
        }
        Commands::Summary => {
            let trackers = generate_trackers(&experience_table());
            let skills = convert_to_skills(&trackers);
            print_summary(&trackers, &skills);
        }
    }

    Ok(())
}

fn print_summary(trackers: &[ExperienceTracker], skills: &[SkillDisplay]) {
    println!("\nExperience by category");
    for tracker in trackers {
        println!("\n{}:", tracker.category);
        for exp in &tracker.experiences {
            println!("  {} - {}", exp.name, exp.display);
            let sources: Vec<&str> = exp.sources.iter().take(2).map(String::as_str).collect();
            if !sources.is_empty() {
                println!("    Sources: {}", sources.join(", "));
            }
        }
    }

    println!("\nSkills display ({}):", skills.len());
    for skill in skills {
        println!("  {} - {}", skill.name, skill.proficiency_label);
    }
}
