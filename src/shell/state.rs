use std::sync::Arc;

use crate::modules::users::adapters::outbound::user_repository_in_memory::InMemoryUserRepository;
use crate::modules::users::use_cases::create_user::handler::CreateUserHandler;
use crate::modules::users::use_cases::delete_user::handler::DeleteUserHandler;
use crate::modules::users::use_cases::patch_user::handler::PatchUserHandler;
use crate::modules::users::use_cases::replace_user::handler::ReplaceUserHandler;
use crate::modules::users::use_cases::search_users_by_birth_date::handler::SearchUsersByBirthDateHandler;
use crate::modules::users::use_cases::search_users_by_birth_date::queries_port::UserQueries;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn UserQueries + Send + Sync>,
    pub create_handler: Arc<CreateUserHandler<InMemoryUserRepository>>,
    pub patch_handler: Arc<PatchUserHandler<InMemoryUserRepository>>,
    pub replace_handler: Arc<ReplaceUserHandler<InMemoryUserRepository>>,
    pub delete_handler: Arc<DeleteUserHandler<InMemoryUserRepository>>,
    pub search_handler: Arc<SearchUsersByBirthDateHandler>,
}

impl AppState {
    pub fn in_memory(minimum_age: u32) -> Self {
        Self::with_store(minimum_age, Arc::new(InMemoryUserRepository::new()))
    }

    pub fn with_store(minimum_age: u32, store: Arc<InMemoryUserRepository>) -> Self {
        let queries: Arc<dyn UserQueries + Send + Sync> = store.clone();
        Self {
            queries: queries.clone(),
            create_handler: Arc::new(CreateUserHandler::new(minimum_age, store.clone())),
            patch_handler: Arc::new(PatchUserHandler::new(store.clone(), queries.clone())),
            replace_handler: Arc::new(ReplaceUserHandler::new(minimum_age, store.clone())),
            delete_handler: Arc::new(DeleteUserHandler::new(store)),
            search_handler: Arc::new(SearchUsersByBirthDateHandler::new(queries)),
        }
    }
}
