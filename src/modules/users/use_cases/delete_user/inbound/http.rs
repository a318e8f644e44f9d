use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::users::use_cases::delete_user::handler::DeleteUserError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(email): Path<String>) -> impl IntoResponse {
    match state.delete_handler.handle(&email).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(DeleteUserError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(DeleteUserError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
