//! advisor-core: study recommendations from student features and a
//! predicted performance category.
//!
//! - **Features**: typed student record with optional fields, plus lenient
//!   and strict JSON conversions
//! - **Category**: one-time classification of a category label into a tier
//! - **Config**: fallback values for absent features and rule thresholds
//! - **Recommend**: the ordered rule evaluator
//! - **Report**: numbered text and JSON rendering
//!
//! # Example
//!
//! ```
//! use advisor_core::{generate_recommendations, StudentFeatures, Subject};
//!
//! let student = StudentFeatures::new()
//!     .with_attendance(65.0)
//!     .with_study_hours(3.0)
//!     .with_score(Subject::Math, 45.0)
//!     .with_score(Subject::Science, 75.0)
//!     .with_score(Subject::English, 80.0)
//!     .with_internet_access(true);
//!
//! let recs = generate_recommendations(&student, "Grade 1");
//! assert_eq!(recs.len(), 5);
//! assert_eq!(
//!     recs[4],
//!     "Focus Area: Your scores in Math need improvement. Prioritize these subjects this week."
//! );
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod features;
pub mod recommend;
pub mod report;

#[cfg(feature = "uniffi")]
pub mod ffi;

pub use category::{Category, Tier};
pub use config::{AdvisorConfig, FeatureDefaults, Thresholds};
pub use error::{AdvisorError, ConfigError, FeatureError, Result};
pub use features::{FeatureValue, StudentFeatures, Subject};
pub use recommend::{generate_recommendations, Advisor, Recommendation, RecommendationKind};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
