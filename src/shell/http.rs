use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::modules::users::use_cases::create_user::inbound::http as create_http;
use crate::modules::users::use_cases::delete_user::inbound::http as delete_http;
use crate::modules::users::use_cases::patch_user::inbound::http as patch_http;
use crate::modules::users::use_cases::replace_user::inbound::http as replace_http;
use crate::modules::users::use_cases::search_users_by_birth_date::inbound::http as search_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_http::handle))
        .route("/users/search", get(search_http::handle))
        .route(
            "/users/{email}",
            patch(patch_http::handle)
                .put(replace_http::handle)
                .delete(delete_http::handle),
        )
        .with_state(state)
}
