use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::users::core::user::User;
use crate::modules::users::use_cases::create_user::handler::CreateUserError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<User>, JsonRejection>,
) -> impl IntoResponse {
    let Json(candidate) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state.create_handler.handle(candidate).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(CreateUserError::Validation(_) | CreateUserError::UnderMinimumAge { .. }) => {
            StatusCode::BAD_REQUEST.into_response()
        }
        Err(CreateUserError::EmailTaken(_)) => StatusCode::CONFLICT.into_response(),
        Err(CreateUserError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
