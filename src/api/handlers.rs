//! HTTP request handlers

use super::types::{ErrorResponse, SkillListResponse};
use super::AppState;
use crate::dispatch::{handle_event, DispatchError};
use crate::wire::SkillEvent;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // One endpoint per hosted skill; the body is the platform event.
        .route("/skills/:name", post(invoke_skill))
        .route("/skills", get(list_skills))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Skill Invocation
// ============================================================

async fn invoke_skill(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(event): Json<SkillEvent>,
) -> Result<Response, AppError> {
    let skill = state
        .skills
        .get(&name)
        .ok_or_else(|| AppError::NotFound(format!("unknown skill: {name}")))?;

    match handle_event(skill, state.expected_app_id.as_deref(), event) {
        Ok(Some(envelope)) => Ok(Json(envelope).into_response()),
        // Session-ended notifications produce no envelope.
        Ok(None) => Ok(StatusCode::OK.into_response()),
        Err(err) => Err(err.into()),
    }
}

async fn list_skills(State(state): State<AppState>) -> Json<SkillListResponse> {
    Json(SkillListResponse {
        skills: state.skills.names(),
    })
}

async fn get_version() -> &'static str {
    concat!("skillet ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::UnauthorizedRequest(_) => AppError::Forbidden(err.to_string()),
            DispatchError::UnroutableRequest(_) | DispatchError::UnknownIntent(_) => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::SkillRegistry;

    #[test]
    fn test_dispatch_errors_map_to_statuses() {
        let forbidden: AppError =
            DispatchError::UnauthorizedRequest("other-app".to_string()).into();
        assert!(matches!(forbidden, AppError::Forbidden(_)));

        let bad: AppError = DispatchError::UnknownIntent("MysteryIntent".to_string()).into();
        assert!(matches!(bad, AppError::BadRequest(msg) if msg.contains("MysteryIntent")));

        let unroutable: AppError =
            DispatchError::UnroutableRequest("AudioPlayerRequest".to_string()).into();
        assert!(matches!(unroutable, AppError::BadRequest(_)));
    }

    #[test]
    fn test_state_is_cheap_to_clone() {
        let state = AppState::new(SkillRegistry::builtin(), Some("app-1".to_string()));
        let cloned = state.clone();
        assert_eq!(cloned.expected_app_id.as_deref(), Some("app-1"));
        assert_eq!(cloned.skills.names(), state.skills.names());
    }
}
