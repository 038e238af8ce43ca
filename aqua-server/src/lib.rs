pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    users::{
        list_users_query::ListUsersQuery,
        register_request::RegisterRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        user_stats_response::UserStatsResponse,
        users::{delete_user, get_user, list_users, register_user, update_user, user_stats},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
