//! Rendering recommendation lists for display.

use serde::Serialize;

use crate::category::{Category, Tier};
use crate::recommend::Recommendation;

/// Numbered plain-text listing under a "Generated Recommendations:" heading.
pub fn numbered<S: AsRef<str>>(recommendations: &[S]) -> String {
    let mut out = String::from("Generated Recommendations:\n");
    for (i, rec) in recommendations.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, rec.as_ref()));
    }
    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    category: &'a str,
    tier: Option<Tier>,
    recommendations: &'a [Recommendation],
}

/// JSON document with the category, its tier, and the tagged recommendations.
pub fn to_json(
    category: &Category,
    recommendations: &[Recommendation],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        category: category.label(),
        tier: category.tier(),
        recommendations,
    })
}
