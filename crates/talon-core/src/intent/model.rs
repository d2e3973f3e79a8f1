//! Intent model types.
//!
//! Every field carries a documented default so a failed classification still
//! yields a complete, usable intent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role category of the requirement. Default: `other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    VideoEditor,
    TiktokCreator,
    OperationsManager,
    #[default]
    Other,
}

/// Experience level sought. Default: `mid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
    Executive,
}

/// Work arrangement. Default: `full_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkArrangement {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Freelance,
}

/// Location preference. Default: `any`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationPreference {
    Remote,
    Onsite,
    Hybrid,
    #[default]
    Any,
}

/// Hiring urgency. Default: `medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

/// Company culture fit. Default: `traditional`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyCulture {
    Startup,
    Corporate,
    Creative,
    #[default]
    Traditional,
}

macro_rules! impl_as_str {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Wire/prompt name of the variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_as_str!(RoleCategory {
    VideoEditor => "video_editor",
    TiktokCreator => "tiktok_creator",
    OperationsManager => "operations_manager",
    Other => "other",
});

impl_as_str!(ExperienceLevel {
    Entry => "entry",
    Mid => "mid",
    Senior => "senior",
    Executive => "executive",
});

impl_as_str!(WorkArrangement {
    FullTime => "full_time",
    PartTime => "part_time",
    Contract => "contract",
    Freelance => "freelance",
});

impl_as_str!(LocationPreference {
    Remote => "remote",
    Onsite => "onsite",
    Hybrid => "hybrid",
    Any => "any",
});

impl_as_str!(Urgency {
    Low => "low",
    Medium => "medium",
    High => "high",
});

impl_as_str!(CompanyCulture {
    Startup => "startup",
    Corporate => "corporate",
    Creative => "creative",
    Traditional => "traditional",
});

/// Default confidence when classification did not supply one.
pub const DEFAULT_CONFIDENCE: f32 = 0.5;

/// Structured classification of a free-text requirement.
///
/// Derived and ephemeral; recomputed per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryIntent {
    /// Role category.
    pub role: RoleCategory,
    /// Experience level.
    pub level: ExperienceLevel,
    /// Work arrangement.
    pub work_type: WorkArrangement,
    /// Location preference.
    pub location: LocationPreference,
    /// Hiring urgency.
    pub urgency: Urgency,
    /// Key skills, most important first.
    pub key_skills: Vec<String>,
    /// Company culture fit.
    pub culture: CompanyCulture,
    /// Classifier confidence in [0, 1].
    pub confidence: f32,
}

impl Default for QueryIntent {
    fn default() -> Self {
        Self {
            role: RoleCategory::default(),
            level: ExperienceLevel::default(),
            work_type: WorkArrangement::default(),
            location: LocationPreference::default(),
            urgency: Urgency::default(),
            key_skills: Vec::new(),
            culture: CompanyCulture::default(),
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

impl QueryIntent {
    /// Builds an intent from a classifier JSON object, field by field.
    ///
    /// Each field decodes independently; an unknown enum string or wrong type
    /// degrades that field to its default instead of failing the whole
    /// intent. Confidence is clamped into [0, 1].
    pub fn from_value(value: &Value) -> Self {
        Self {
            role: field_or_default(value, "job_type"),
            level: field_or_default(value, "experience_level"),
            work_type: field_or_default(value, "work_type"),
            location: field_or_default(value, "location_preference"),
            urgency: field_or_default(value, "urgency"),
            key_skills: field_or_default(value, "key_skills"),
            culture: field_or_default(value, "company_culture"),
            confidence: value
                .get("confidence")
                .and_then(Value::as_f64)
                .map(|c| c.clamp(0.0, 1.0) as f32)
                .unwrap_or(DEFAULT_CONFIDENCE),
        }
    }
}

fn field_or_default<T: serde::de::DeserializeOwned + Default>(value: &Value, key: &str) -> T {
    value
        .get(key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}
