use aqua_db::{DEFAULT_SEARCH_LIMIT, UserSearch};

use serde::Deserialize;

/// Query parameters for the admin user listing
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    /// Case-insensitive substring match against name and email
    pub q: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    pub order_by: Option<String>,
    pub order_dir: Option<String>,
}

fn default_limit() -> i64 {
    DEFAULT_SEARCH_LIMIT
}

impl ListUsersQuery {
    /// Convert into the repository search form.
    ///
    /// Unknown sort keys and directions fall back to their defaults
    /// instead of erroring, so a bad `order_by` can never break a page.
    pub fn into_search(self) -> UserSearch {
        UserSearch {
            q: self.q,
            limit: self.limit,
            offset: self.offset,
            order_by: self
                .order_by
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            order_dir: self
                .order_dir
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}
