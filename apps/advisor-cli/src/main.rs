//! Advisor CLI
//!
//! Prints study recommendations for a student's features and a predicted
//! performance category.

mod cli;

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use advisor_core::{report, Advisor, AdvisorConfig, Category, StudentFeatures};

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => AdvisorConfig::load(path)?,
        None => AdvisorConfig::default(),
    };
    let advisor = Advisor::new(config);

    match cli.command {
        Commands::Recommend {
            category,
            features,
            overrides,
            strict,
            json,
        } => {
            let base = match features {
                Some(path) => StudentFeatures::load(&path, strict)?,
                None => StudentFeatures::new(),
            };
            let student = base.merge(&overrides.to_features());
            print_report(&advisor, &student, &category, json)?;
        }
        Commands::Demo => {
            let (student, category) = cli::demo_student();
            print_report(&advisor, &student, category, false)?;
        }
        Commands::Config => {
            print!("{}", advisor.config().to_toml()?);
        }
    }

    Ok(())
}

fn print_report(
    advisor: &Advisor,
    student: &StudentFeatures,
    label: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let category = Category::classify(label);
    let recommendations = advisor.evaluate(student, &category);
    tracing::debug!(
        label,
        tier = ?category.tier(),
        count = recommendations.len(),
        "evaluated recommendations"
    );

    if json {
        println!("{}", report::to_json(&category, &recommendations)?);
    } else {
        let messages: Vec<&str> = recommendations.iter().map(|r| r.message.as_str()).collect();
        print!("{}", report::numbered(&messages));
    }
    Ok(())
}
