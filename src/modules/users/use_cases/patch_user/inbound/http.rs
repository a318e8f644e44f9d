use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::users::core::patch::UserPatch;
use crate::modules::users::use_cases::patch_user::handler::PatchUserError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(email): Path<String>,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state.patch_handler.handle(&email, patch).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(PatchUserError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(PatchUserError::Patch(_)) => StatusCode::BAD_REQUEST.into_response(),
        Err(PatchUserError::Repository(_) | PatchUserError::Unexpected(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
