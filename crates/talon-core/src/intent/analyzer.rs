use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::provider::TextProvider;

use super::model::QueryIntent;

const CLASSIFY_INSTRUCTION: &str = r#"Analyze the job requirements and extract key information. Return a JSON object with the following structure:
{
    "job_type": "video_editor|tiktok_creator|operations_manager|other",
    "experience_level": "entry|mid|senior|executive",
    "work_type": "full_time|part_time|contract|freelance",
    "location_preference": "remote|onsite|hybrid|any",
    "urgency": "low|medium|high",
    "key_skills": ["skill1", "skill2", "skill3"],
    "company_culture": "startup|corporate|creative|traditional",
    "confidence": 0.0-1.0
}"#;

/// Classifies free-text requirements into a [`QueryIntent`].
///
/// Never fails past this boundary: provider failures and unparseable output
/// both yield a fully defaulted intent.
pub struct IntentAnalyzer<P: TextProvider> {
    provider: Arc<P>,
}

impl<P: TextProvider> std::fmt::Debug for IntentAnalyzer<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentAnalyzer").finish_non_exhaustive()
    }
}

impl<P: TextProvider> IntentAnalyzer<P> {
    /// Creates an analyzer over the given provider.
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Classifies `text`, always returning a complete intent.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn analyze(&self, text: &str) -> QueryIntent {
        let prompt = format!(
            "{}\n\nAnalyze this job requirement: {}",
            CLASSIFY_INSTRUCTION, text
        );

        let raw = match self.provider.complete(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Intent classification unavailable, using defaults");
                return QueryIntent::default();
            }
        };

        match extract_json_block(&raw) {
            Some(value) => {
                let intent = QueryIntent::from_value(&value);
                debug!(role = %intent.role, confidence = intent.confidence, "Intent classified");
                intent
            }
            None => {
                warn!("No JSON block in classifier output, using defaults");
                QueryIntent::default()
            }
        }
    }
}

/// Extracts the first well-formed JSON object embedded in `text`, tolerating
/// conversational wrapping (prose, code fences) around it.
pub(crate) fn extract_json_block(text: &str) -> Option<Value> {
    let bytes = text.as_bytes();

    for (start, _) in text.char_indices().filter(|(_, c)| *c == '{') {
        if let Some(end) = scan_balanced(bytes, start) {
            if let Ok(value) = serde_json::from_str::<Value>(&text[start..=end]) {
                if value.is_object() {
                    return Some(value);
                }
            }
        }
    }

    None
}

/// Returns the byte index of the brace closing the object opened at `start`,
/// honoring string literals and escapes.
fn scan_balanced(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}
