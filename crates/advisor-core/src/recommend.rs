//! Recommendation rule evaluation.
//!
//! Rules run in a fixed order and each one appends independently:
//!
//! 1. category tier (priority + action pair)
//! 2. low attendance
//! 3. low self-study hours
//! 4. weak subjects (one combined message)
//! 5. internet access, only for grade 0/1 labels
//! 6. fallback, only if nothing else fired
//!
//! Output order follows rule order and is part of the contract.

use serde::{Deserialize, Serialize};

use crate::category::{Category, Tier};
use crate::config::AdvisorConfig;
use crate::features::{StudentFeatures, Subject};

pub const LOW_TIER_PRIORITY: &str =
    "Priority: Schedule a 1-on-1 session with an academic counselor or mentor.";
pub const LOW_TIER_ACTION: &str =
    "Action: Break down study materials into smaller, manageable 30-minute sessions.";
pub const AVERAGE_TIER_PRIORITY: &str =
    "Priority: Maintain current momentum while identifying specific weak zones.";
pub const AVERAGE_TIER_ACTION: &str =
    "Action: Try peer study groups to clarify doubts and reinforce concepts.";
pub const HIGH_TIER_PRIORITY: &str = "Priority: Keep up the excellent work!";
pub const HIGH_TIER_ACTION: &str =
    "Action: Consider participating in advanced workshops or tutoring peers.";
pub const LOW_ATTENDANCE_WARNING: &str = "Warning: Low attendance detected. Aim to attend at least 85% of classes to catch up on missed concepts.";
pub const STUDY_TIME_SUGGESTION: &str =
    "Suggestion: Increase self-study time. Aim for at least 1-2 hours of focused study daily.";
pub const INTERNET_RESOURCE: &str = "Resource: Utilize the school library or community centers for internet access to online study materials.";
pub const FALLBACK_MESSAGE: &str =
    "Continue with your current study methodology as it appears to be working well.";

/// Which rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Priority,
    Action,
    Warning,
    Suggestion,
    FocusArea,
    Resource,
    Fallback,
}

/// A single advisory message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
}

impl Recommendation {
    fn new(kind: RecommendationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Priority and action messages for a tier.
pub fn tier_messages(tier: Tier) -> [&'static str; 2] {
    match tier {
        Tier::Low => [LOW_TIER_PRIORITY, LOW_TIER_ACTION],
        Tier::Average => [AVERAGE_TIER_PRIORITY, AVERAGE_TIER_ACTION],
        Tier::High => [HIGH_TIER_PRIORITY, HIGH_TIER_ACTION],
    }
}

/// Focus-area message naming the weak subjects in the order given.
pub fn focus_area_message(subjects: &[Subject]) -> String {
    let names: Vec<&str> = subjects.iter().map(Subject::display_name).collect();
    format!(
        "Focus Area: Your scores in {} need improvement. Prioritize these subjects this week.",
        names.join(", ")
    )
}

/// Rule evaluator bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Subjects scoring below the weak-subject threshold, in evaluation order.
    pub fn weak_subjects(&self, features: &StudentFeatures) -> Vec<Subject> {
        let default_score = self.config.defaults.subject_score;
        let threshold = self.config.thresholds.weak_subject_score;
        Subject::ALL
            .into_iter()
            .filter(|&subject| features.score(subject).unwrap_or(default_score) < threshold)
            .collect()
    }

    /// Run every rule and return tagged recommendations. Never empty.
    pub fn evaluate(&self, features: &StudentFeatures, category: &Category) -> Vec<Recommendation> {
        let defaults = &self.config.defaults;
        let thresholds = &self.config.thresholds;
        let mut out = Vec::new();

        if let Some(tier) = category.tier() {
            tracing::debug!(%tier, label = category.label(), "tier rule fired");
            let [priority, action] = tier_messages(tier);
            out.push(Recommendation::new(RecommendationKind::Priority, priority));
            out.push(Recommendation::new(RecommendationKind::Action, action));
        }

        let attendance = features
            .attendance_percentage
            .unwrap_or(defaults.attendance_percentage);
        if attendance < thresholds.min_attendance_percentage {
            tracing::debug!(attendance, "attendance rule fired");
            out.push(Recommendation::new(
                RecommendationKind::Warning,
                LOW_ATTENDANCE_WARNING,
            ));
        }

        let study_hours = features.study_hours.unwrap_or(defaults.study_hours);
        if study_hours < thresholds.min_study_hours {
            tracing::debug!(study_hours, "study hours rule fired");
            out.push(Recommendation::new(
                RecommendationKind::Suggestion,
                STUDY_TIME_SUGGESTION,
            ));
        }

        let weak = self.weak_subjects(features);
        if !weak.is_empty() {
            tracing::debug!(?weak, "weak subject rule fired");
            out.push(Recommendation::new(
                RecommendationKind::FocusArea,
                focus_area_message(&weak),
            ));
        }

        let internet = features.internet_access.unwrap_or(defaults.internet_access);
        if !internet && category.is_lowest_grades() {
            tracing::debug!("internet access rule fired");
            out.push(Recommendation::new(
                RecommendationKind::Resource,
                INTERNET_RESOURCE,
            ));
        }

        if out.is_empty() {
            tracing::debug!("no rule fired, using fallback");
            out.push(Recommendation::new(
                RecommendationKind::Fallback,
                FALLBACK_MESSAGE,
            ));
        }

        out
    }

    /// Classify `category` and return the recommendation messages.
    pub fn recommend(&self, features: &StudentFeatures, category: &str) -> Vec<String> {
        self.evaluate(features, &Category::classify(category))
            .into_iter()
            .map(|r| r.message)
            .collect()
    }
}

/// Recommendations for a student under the built-in rule configuration.
///
/// # Examples
/// ```
/// use advisor_core::{generate_recommendations, StudentFeatures};
///
/// let recs = generate_recommendations(&StudentFeatures::new(), "");
/// assert_eq!(
///     recs,
///     vec!["Continue with your current study methodology as it appears to be working well."]
/// );
/// ```
pub fn generate_recommendations(features: &StudentFeatures, category: &str) -> Vec<String> {
    Advisor::default().recommend(features, category)
}
