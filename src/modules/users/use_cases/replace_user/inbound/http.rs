use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::replace_user::handler::ReplaceUserError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(email): Path<String>,
    body: Result<Json<User>, JsonRejection>,
) -> impl IntoResponse {
    let Json(replacement) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state.replace_handler.handle(&email, replacement).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(ReplaceUserError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(
            ReplaceUserError::Validation(_)
            | ReplaceUserError::EmailMismatch { .. }
            | ReplaceUserError::UnderMinimumAge { .. },
        ) => StatusCode::BAD_REQUEST.into_response(),
        Err(ReplaceUserError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
