use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use talon::{EngineError, RankingError};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Engine(engine) => match engine {
                EngineError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
                EngineError::Ranking(ranking) => match ranking {
                    RankingError::UnknownStrategy { .. }
                    | RankingError::UnknownWeightField { .. }
                    | RankingError::InvalidTopK => StatusCode::BAD_REQUEST,
                    RankingError::DimensionMismatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                },
                EngineError::ProviderUnavailable(_) => StatusCode::BAD_GATEWAY,
                EngineError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, body).into_response()
    }
}
