//! Response synthesis (conversational reply generation with a deterministic
//! fallback).
//!
//! The primary path asks the completion provider for a reply conditioned on
//! the query, the classified intent, and a bounded summary of the top-ranked
//! candidates. If generation fails for any reason, a fully deterministic
//! template takes over; the fallback makes no external calls and cannot fail.


use std::sync::Arc;

use tracing::{instrument, warn};

use crate::intent::QueryIntent;
use crate::provider::TextProvider;
use crate::ranking::RankedCandidate;

/// Fixed reply when no candidates are available.
pub const NO_MATCH_REPLY: &str = "I'm sorry, I couldn't find any suitable candidates for your requirements. Could you please try rephrasing your request or provide more specific details about the role you're looking for?";

const SYSTEM_PERSONA: &str = "You are an AI Talent Assistant specializing in helping recruiters find the perfect candidates for their job openings. Always be helpful, professional, and provide specific, actionable insights about candidates.";

const MAX_PROMPT_CANDIDATES: usize = 3;

const BIO_TRUNCATE_CHARS: usize = 200;

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// Produced by the completion provider.
    Generated,
    /// Produced by the deterministic template path.
    Fallback,
}

/// A synthesized reply plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedReply {
    /// Reply text.
    pub text: String,
    /// Whether generation or the fallback produced it.
    pub source: ReplySource,
}

/// Turns (query, intent, ranked candidates) into a conversational reply.
pub struct ResponseSynthesizer<P: TextProvider> {
    provider: Arc<P>,
}

impl<P: TextProvider> std::fmt::Debug for ResponseSynthesizer<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseSynthesizer").finish_non_exhaustive()
    }
}

impl<P: TextProvider> ResponseSynthesizer<P> {
    /// Creates a synthesizer over the given provider.
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Produces a reply for `query`.
    ///
    /// With no candidates the fixed no-match message is returned immediately,
    /// without invoking the provider.
    #[instrument(skip_all, fields(candidates = ranked.len()))]
    pub async fn synthesize(
        &self,
        query: &str,
        intent: &QueryIntent,
        ranked: &[RankedCandidate],
    ) -> SynthesizedReply {
        if ranked.is_empty() {
            return SynthesizedReply {
                text: NO_MATCH_REPLY.to_string(),
                source: ReplySource::Fallback,
            };
        }

        let prompt = build_prompt(query, intent, ranked);

        match self.provider.complete(&prompt).await {
            Ok(text) if !text.trim().is_empty() => SynthesizedReply {
                text: text.trim().to_string(),
                source: ReplySource::Generated,
            },
            Ok(_) => {
                warn!("Empty generation result, using fallback reply");
                SynthesizedReply {
                    text: fallback_reply(query, ranked),
                    source: ReplySource::Fallback,
                }
            }
            Err(e) => {
                warn!(error = %e, "Reply generation failed, using fallback reply");
                SynthesizedReply {
                    text: fallback_reply(query, ranked),
                    source: ReplySource::Fallback,
                }
            }
        }
    }
}

fn build_prompt(query: &str, intent: &QueryIntent, ranked: &[RankedCandidate]) -> String {
    let mut candidate_info = String::new();
    for candidate in ranked.iter().take(MAX_PROMPT_CANDIDATES) {
        candidate_info.push_str(&format!(
            "Candidate #{}: {}\nLocation: {}\nSkills: {}\nMatch Score: {}\nBio: {}\n\n",
            candidate.rank,
            candidate.record.name,
            candidate.record.location,
            candidate.record.skills,
            format_percent(candidate.score),
            truncate_chars(&candidate.record.bio, BIO_TRUNCATE_CHARS),
        ));
    }

    format!(
        "{persona}\n\nBased on the user's query and the candidate information, provide a helpful, contextual response.\n\n\
        User Query: {query}\n\n\
        Job Analysis:\n\
        - Job Type: {role}\n\
        - Experience Level: {level}\n\
        - Work Type: {work_type}\n\
        - Location Preference: {location}\n\
        - Urgency: {urgency}\n\
        - Key Skills: {skills}\n\
        - Company Culture: {culture}\n\n\
        Top Candidates:\n{candidate_info}\
        Provide a natural, conversational response that acknowledges their specific requirements, \
        highlights the best candidates with relevant details, and suggests follow-up questions or \
        refinements. Keep the response engaging and helpful, around 2-3 sentences for the main \
        response plus candidate highlights.",
        persona = SYSTEM_PERSONA,
        query = query,
        role = intent.role,
        level = intent.level,
        work_type = intent.work_type,
        location = intent.location,
        urgency = intent.urgency,
        skills = intent.key_skills.join(", "),
        culture = intent.culture,
        candidate_info = candidate_info,
    )
}

/// Deterministic reply built from the top candidate only. No external calls.
pub fn fallback_reply(query: &str, ranked: &[RankedCandidate]) -> String {
    let Some(top) = ranked.first() else {
        return NO_MATCH_REPLY.to_string();
    };

    format!(
        "Based on your request for '{}', I found {} as your top match with a {} match score. \
        They're located in {} and have experience in {}. Would you like me to provide more \
        details about their background or help you refine your search criteria?",
        query,
        top.record.name,
        format_percent(top.score),
        top.record.location,
        top.record.skills,
    )
}

fn format_percent(score: f32) -> String {
    format!("{:.1}%", score * 100.0)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated)
}
