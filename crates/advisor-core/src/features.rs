//! Student feature record and the conversions that build it from raw input.
//!
//! Every field is optional. An absent field is not an error: the rule
//! evaluator substitutes the value from [`crate::FeatureDefaults`].

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FeatureError;

pub const ATTENDANCE_KEY: &str = "attendance_percentage";
pub const STUDY_HOURS_KEY: &str = "study_hours";
pub const MATH_KEY: &str = "math_score";
pub const SCIENCE_KEY: &str = "science_score";
pub const ENGLISH_KEY: &str = "english_score";
pub const INTERNET_KEY: &str = "internet_access";

/// A scored subject, in the order the weak-subject rule checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Subject {
    Math,
    Science,
    English,
}

impl Subject {
    /// All subjects in evaluation order.
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Science, Subject::English];

    /// Display name used in recommendation text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::Science => "Science",
            Self::English => "English",
        }
    }

    /// Feature key holding this subject's score.
    pub fn feature_key(&self) -> &'static str {
        match self {
            Self::Math => MATH_KEY,
            Self::Science => SCIENCE_KEY,
            Self::English => ENGLISH_KEY,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A loosely typed feature value, as found in dynamic key/value input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Number(f64),
}

impl FeatureValue {
    /// Numeric reading; booleans count as 1 and 0.
    pub fn as_number(&self) -> f64 {
        match *self {
            Self::Number(n) => n,
            Self::Bool(true) => 1.0,
            Self::Bool(false) => 0.0,
        }
    }

    /// Truthiness; any non-zero number is true.
    pub fn as_flag(&self) -> bool {
        match *self {
            Self::Bool(b) => b,
            Self::Number(n) => n != 0.0,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for FeatureValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Features describing one student.
///
/// Deserializing goes through the lenient JSON reader, so serde input
/// accepts the same values as [`StudentFeatures::from_json_value`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(try_from = "serde_json::Value")]
pub struct StudentFeatures {
    /// Attendance, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance_percentage: Option<f64>,
    /// Weekly self-study hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub math_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub science_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_access: Option<bool>,
}

impl StudentFeatures {
    /// Create an empty feature set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attendance(mut self, percentage: f64) -> Self {
        self.attendance_percentage = Some(percentage);
        self
    }

    pub fn with_study_hours(mut self, hours: f64) -> Self {
        self.study_hours = Some(hours);
        self
    }

    pub fn with_score(mut self, subject: Subject, score: f64) -> Self {
        *self.score_slot(subject) = Some(score);
        self
    }

    pub fn with_internet_access(mut self, access: bool) -> Self {
        self.internet_access = Some(access);
        self
    }

    /// Score for a subject, if present.
    pub fn score(&self, subject: Subject) -> Option<f64> {
        match subject {
            Subject::Math => self.math_score,
            Subject::Science => self.science_score,
            Subject::English => self.english_score,
        }
    }

    fn score_slot(&mut self, subject: Subject) -> &mut Option<f64> {
        match subject {
            Subject::Math => &mut self.math_score,
            Subject::Science => &mut self.science_score,
            Subject::English => &mut self.english_score,
        }
    }

    /// Overlay every field set in `other` onto `self`.
    pub fn merge(mut self, other: &StudentFeatures) -> Self {
        self.attendance_percentage = other.attendance_percentage.or(self.attendance_percentage);
        self.study_hours = other.study_hours.or(self.study_hours);
        self.math_score = other.math_score.or(self.math_score);
        self.science_score = other.science_score.or(self.science_score);
        self.english_score = other.english_score.or(self.english_score);
        self.internet_access = other.internet_access.or(self.internet_access);
        self
    }

    /// Build from a dynamic key/value mapping. Unknown keys are ignored.
    pub fn from_map(map: &HashMap<String, FeatureValue>) -> Self {
        let number = |key: &str| map.get(key).map(FeatureValue::as_number);
        Self {
            attendance_percentage: number(ATTENDANCE_KEY),
            study_hours: number(STUDY_HOURS_KEY),
            math_score: number(MATH_KEY),
            science_score: number(SCIENCE_KEY),
            english_score: number(ENGLISH_KEY),
            internet_access: map.get(INTERNET_KEY).map(FeatureValue::as_flag),
        }
    }

    /// Build from a JSON object, treating wrong-typed values as absent.
    pub fn from_json_value(value: &Value) -> Result<Self, FeatureError> {
        let object = value.as_object().ok_or(FeatureError::NotAnObject)?;
        Self::from_object(object, false)
    }

    /// Parse a JSON document, treating wrong-typed values as absent.
    pub fn from_json_str(input: &str) -> Result<Self, FeatureError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(&value)
    }

    /// Parse a JSON document, rejecting any recognized key whose value has
    /// the wrong type. `null` still counts as absent.
    pub fn from_json_str_strict(input: &str) -> Result<Self, FeatureError> {
        let value: Value = serde_json::from_str(input)?;
        let object = value.as_object().ok_or(FeatureError::NotAnObject)?;
        Self::from_object(object, true)
    }

    /// Read a JSON feature file, strictly or leniently.
    pub fn load(path: impl AsRef<Path>, strict: bool) -> crate::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), strict, "reading features");
        let features = if strict {
            Self::from_json_str_strict(&text)?
        } else {
            Self::from_json_str(&text)?
        };
        Ok(features)
    }

    fn from_object(object: &Map<String, Value>, strict: bool) -> Result<Self, FeatureError> {
        Ok(Self {
            attendance_percentage: read_number(object, ATTENDANCE_KEY, strict)?,
            study_hours: read_number(object, STUDY_HOURS_KEY, strict)?,
            math_score: read_number(object, MATH_KEY, strict)?,
            science_score: read_number(object, SCIENCE_KEY, strict)?,
            english_score: read_number(object, ENGLISH_KEY, strict)?,
            internet_access: read_flag(object, INTERNET_KEY, strict)?,
        })
    }
}

impl TryFrom<Value> for StudentFeatures {
    type Error = FeatureError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json_value(&value)
    }
}

fn read_number(
    object: &Map<String, Value>,
    key: &str,
    strict: bool,
) -> Result<Option<f64>, FeatureError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::Bool(b)) if !strict => Ok(Some(if *b { 1.0 } else { 0.0 })),
        Some(other) => {
            if strict {
                return Err(FeatureError::WrongType {
                    key: key.to_string(),
                    expected: "a number",
                });
            }
            tracing::warn!(key, value = %other, "ignoring non-numeric feature value");
            Ok(None)
        }
    }
}

fn read_flag(
    object: &Map<String, Value>,
    key: &str,
    strict: bool,
) -> Result<Option<bool>, FeatureError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if !strict || v == 0.0 || v == 1.0 => Ok(Some(v != 0.0)),
            _ => Err(FeatureError::WrongType {
                key: key.to_string(),
                expected: "a boolean or 0/1",
            }),
        },
        Some(other) => {
            if strict {
                return Err(FeatureError::WrongType {
                    key: key.to_string(),
                    expected: "a boolean or 0/1",
                });
            }
            tracing::warn!(key, value = %other, "ignoring non-boolean feature value");
            Ok(None)
        }
    }
}
