use crate::UserDto;
use serde::Serialize;

/// One page of users plus the unpaged match count
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub total: i64,
    pub users: Vec<UserDto>,
}
