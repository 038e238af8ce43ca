pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::user_repository::{
    DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, OrderDir, UserOrderBy, UserPage, UserRepository,
    UserSearch, UserStats,
};
