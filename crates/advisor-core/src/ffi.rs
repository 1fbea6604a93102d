//! Owned-argument entry points for UniFFI host bindings.

use crate::category::Category;
use crate::error::AdvisorError;
use crate::features::StudentFeatures;
use crate::recommend::{Advisor, Recommendation};

/// Recommendation messages for a student under the built-in configuration.
#[uniffi::export]
pub fn recommend(features: StudentFeatures, category: String) -> Vec<String> {
    crate::generate_recommendations(&features, &category)
}

/// Tagged recommendations for a student under the built-in configuration.
#[uniffi::export]
pub fn recommend_detailed(features: StudentFeatures, category: String) -> Vec<Recommendation> {
    Advisor::default().evaluate(&features, &Category::classify(&category))
}

/// Parse a JSON feature document, rejecting wrong-typed values.
#[uniffi::export]
pub fn parse_features_strict(json: String) -> Result<StudentFeatures, AdvisorError> {
    Ok(StudentFeatures::from_json_str_strict(&json)?)
}

/// Returns the version of advisor-core
#[uniffi::export]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
