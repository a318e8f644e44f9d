pub mod modules {
    pub mod users {
        pub mod core {
            pub mod patch;
            pub mod user;
            pub mod validate;
        }
        pub mod use_cases {
            pub mod create_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod patch_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod replace_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod search_users_by_birth_date {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod user_repository;
                pub mod user_repository_in_memory;
            }
        }
    }
}

pub mod shell;
