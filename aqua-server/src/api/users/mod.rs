pub mod list_users_query;
pub mod register_request;
pub mod user_dto;
pub mod user_list_response;
pub mod user_response;
pub mod user_stats_response;
pub mod users;
