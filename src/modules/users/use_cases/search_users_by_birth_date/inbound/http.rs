use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::users::use_cases::search_users_by_birth_date::handler::SearchUsersError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SearchUsersParams {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<SearchUsersParams>,
) -> impl IntoResponse {
    match state.search_handler.handle(params.from, params.to).await {
        Ok(users) => Json(users).into_response(),
        Err(SearchUsersError::InvalidRange { .. }) => StatusCode::BAD_REQUEST.into_response(),
        Err(SearchUsersError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
