//! Raw candidate profiles as supplied by the ingestion step.

use std::path::Path;

use serde::Deserialize;

use super::error::{CorpusError, CorpusResult};

/// One raw candidate profile (flat tabular record).
///
/// All fields default to empty strings; upstream exports routinely leave
/// columns blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// City of residence.
    #[serde(default)]
    pub city: String,
    /// Country of residence.
    #[serde(default)]
    pub country: String,
    /// Skills, free text or comma-separated tags.
    #[serde(default)]
    pub skills: String,
    /// Biography / profile description.
    #[serde(default)]
    pub profile_description: String,
    /// Content verticals the candidate works in.
    #[serde(default)]
    pub content_verticals: String,
    /// Creators the candidate has worked with.
    #[serde(default)]
    pub past_creators: String,
}

impl RawProfile {
    /// Full display name (`"First Last"`, trimmed).
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Location string (`"City, Country"`, tolerating blank halves).
    pub fn location(&self) -> String {
        match (self.city.trim(), self.country.trim()) {
            ("", "") => String::new(),
            (city, "") => city.to_string(),
            ("", country) => country.to_string(),
            (city, country) => format!("{}, {}", city, country),
        }
    }

    /// Combined descriptive text used for embedding generation.
    pub fn combined_features(&self) -> String {
        format!(
            "Bio: {}. Skills: {}. Niche: {}. Past Work: {}",
            self.profile_description, self.skills, self.content_verticals, self.past_creators
        )
    }
}

/// Reads raw profiles from a JSON array file.
pub fn load_raw_profiles(path: &Path) -> CorpusResult<Vec<RawProfile>> {
    let bytes = std::fs::read(path).map_err(|e| CorpusError::ProfilesUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    serde_json::from_slice(&bytes).map_err(|e| CorpusError::ProfilesUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
