use axum::Json;
use axum::extract::State;
use tracing::{info, instrument};
use uuid::Uuid;

use talon::TextProvider;
use talon::ranking::{STRATEGY_BASIC, STRATEGY_WEIGHTED};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{
    ChatRequest, ChatResponse, HealthResponse, RecommendRequest, RecommendResponse,
    WeightedRecommendRequest,
};
use crate::gateway::state::AppState;

fn validate_job_description(job_description: &str) -> Result<(), GatewayError> {
    if job_description.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "job_description is required".to_string(),
        ));
    }
    Ok(())
}

#[instrument(skip(state, request))]
pub async fn recommend_handler<P>(
    State(state): State<AppState<P>>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, GatewayError>
where
    P: TextProvider + 'static,
{
    validate_job_description(&request.job_description)?;
    let top_k = request.top_k.unwrap_or(state.default_top_k);

    let results = state
        .engine
        .rank_for_query(&request.job_description, top_k, STRATEGY_BASIC, None)
        .await?;

    Ok(Json(RecommendResponse {
        strategy: STRATEGY_BASIC,
        top_k,
        results,
    }))
}

#[instrument(skip(state, request))]
pub async fn recommend_weighted_handler<P>(
    State(state): State<AppState<P>>,
    Json(request): Json<WeightedRecommendRequest>,
) -> Result<Json<RecommendResponse>, GatewayError>
where
    P: TextProvider + 'static,
{
    validate_job_description(&request.job_description)?;
    let top_k = request.top_k.unwrap_or(state.default_top_k);

    let results = state
        .engine
        .rank_for_query(
            &request.job_description,
            top_k,
            STRATEGY_WEIGHTED,
            Some(&request.weights),
        )
        .await?;

    Ok(Json(RecommendResponse {
        strategy: STRATEGY_WEIGHTED,
        top_k,
        results,
    }))
}

#[instrument(skip(state, request))]
pub async fn chat_handler<P>(
    State(state): State<AppState<P>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, GatewayError>
where
    P: TextProvider + 'static,
{
    if request.message.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "message is required".to_string(),
        ));
    }

    let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);
    let mut session = state.take_session(session_id).await;

    let outcome = state.engine.chat(&mut session, &request.message).await;
    state.store_session(session_id, session).await;

    info!(
        session_id = %session_id,
        candidates = outcome.candidates.len(),
        success = outcome.success,
        "Chat turn complete"
    );

    Ok(Json(ChatResponse {
        message: outcome.reply,
        candidates: outcome.candidates,
        success: outcome.success,
        session_id,
    }))
}

#[instrument(skip(state))]
pub async fn health_handler<P>(State(state): State<AppState<P>>) -> Json<HealthResponse>
where
    P: TextProvider + 'static,
{
    let status = state.engine.corpus_status();

    Json(HealthResponse {
        status: "healthy",
        talent_profiles_loaded: status.count,
        embeddings_ready: status.ready,
    })
}
