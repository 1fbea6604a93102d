//! Predicted category labels and their performance tiers.
//!
//! A label is an arbitrary string supplied by an upstream predictor. It is
//! classified once, here, by case-sensitive substring containment:
//!
//! | Tier      | Tokens                              |
//! |-----------|-------------------------------------|
//! | `Low`     | `Grade 0`, `Grade 1`, `At-Risk`     |
//! | `Average` | `Grade 2`, `Grade 3`, `Average`     |
//! | `High`    | `Grade 4`, `Grade 5`, `High`        |
//!
//! Tiers are checked top to bottom and the first match wins, so
//! `"Grade 1 At-Risk"` and `"Grade 10"` are both `Low`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

const LOW_TOKENS: [&str; 3] = ["Grade 0", "Grade 1", "At-Risk"];
const AVERAGE_TOKENS: [&str; 3] = ["Grade 2", "Grade 3", "Average"];
const HIGH_TOKENS: [&str; 3] = ["Grade 4", "Grade 5", "High"];

/// Tokens that make a label eligible for the internet-access resource.
/// `At-Risk` is deliberately absent.
const LOWEST_GRADE_TOKENS: [&str; 2] = ["Grade 0", "Grade 1"];

/// Performance band inferred from a category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Tier {
    Low,
    Average,
    High,
}

impl Tier {
    /// Tiers in matching order.
    pub const ALL: [Tier; 3] = [Tier::Low, Tier::Average, Tier::High];

    /// Label tokens that select this tier.
    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            Tier::Low => &LOW_TOKENS,
            Tier::Average => &AVERAGE_TOKENS,
            Tier::High => &HIGH_TOKENS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Average => "Average",
            Tier::High => "High",
        }
    }

    /// First tier whose tokens appear in `label`.
    pub fn from_label(label: &str) -> Option<Tier> {
        Tier::ALL
            .into_iter()
            .find(|tier| contains_any(label, tier.tokens()))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    label: String,
    tier: Option<Tier>,
    lowest_grades: bool,
}

impl Category {
    /// Classify a raw label.
    pub fn classify(label: &str) -> Self {
        let tier = Tier::from_label(label);
        let lowest_grades = contains_any(label, &LOWEST_GRADE_TOKENS);
        tracing::trace!(label, ?tier, lowest_grades, "classified category");
        Self {
            label: label.to_string(),
            tier,
            lowest_grades,
        }
    }

    /// The label as supplied.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    /// Whether the label names grade 0 or grade 1 explicitly.
    pub fn is_lowest_grades(&self) -> bool {
        self.lowest_grades
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::classify(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn contains_any(label: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|token| label.contains(token))
}
