use clap::{Parser, Subcommand};
use std::path::PathBuf;

use advisor_core::{StudentFeatures, Subject};

#[derive(Parser)]
#[command(name = "advisor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Study recommendations from student features and a predicted category")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML or JSON rule configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate recommendations for one student
    Recommend {
        /// Predicted performance category, e.g. "Grade 1" or "At-Risk"
        #[arg(long, value_name = "LABEL")]
        category: String,

        /// JSON object of student features
        #[arg(short, long, value_name = "FILE")]
        features: Option<PathBuf>,

        #[command(flatten)]
        overrides: FeatureArgs,

        /// Reject wrong-typed values in the features file instead of ignoring them
        #[arg(long)]
        strict: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in sample student through the rules
    Demo,

    /// Print the effective rule configuration as TOML
    Config,
}

/// Individual feature values; each overrides the features file.
#[derive(clap::Args, Default)]
pub struct FeatureArgs {
    /// Attendance percentage (0-100)
    #[arg(long, value_name = "PCT")]
    pub attendance: Option<f64>,

    /// Self-study hours
    #[arg(long, value_name = "HOURS")]
    pub study_hours: Option<f64>,

    #[arg(long, value_name = "SCORE")]
    pub math: Option<f64>,

    #[arg(long, value_name = "SCORE")]
    pub science: Option<f64>,

    #[arg(long, value_name = "SCORE")]
    pub english: Option<f64>,

    /// Whether the student has internet access at home
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub internet: Option<bool>,
}

impl FeatureArgs {
    pub fn to_features(&self) -> StudentFeatures {
        StudentFeatures {
            attendance_percentage: self.attendance,
            study_hours: self.study_hours,
            math_score: self.math,
            science_score: self.science,
            english_score: self.english,
            internet_access: self.internet,
        }
    }
}

/// Sample student run by `advisor demo`.
pub fn demo_student() -> (StudentFeatures, &'static str) {
    let features = StudentFeatures::new()
        .with_attendance(65.0)
        .with_study_hours(3.0)
        .with_score(Subject::Math, 45.0)
        .with_score(Subject::Science, 75.0)
        .with_score(Subject::English, 80.0)
        .with_internet_access(true);
    (features, "Grade 1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_map_to_features() {
        let cli = Cli::parse_from([
            "advisor",
            "recommend",
            "--category",
            "Grade 0",
            "--math",
            "30",
            "--internet",
            "false",
        ]);
        let Commands::Recommend { overrides, category, .. } = cli.command else {
            panic!("expected recommend command");
        };
        assert_eq!(category, "Grade 0");
        let features = overrides.to_features();
        assert_eq!(features.math_score, Some(30.0));
        assert_eq!(features.internet_access, Some(false));
        assert_eq!(features.study_hours, None);
    }
}
