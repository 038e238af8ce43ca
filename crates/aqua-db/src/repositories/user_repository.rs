//! User repository for profile CRUD, paginated search and aggregate stats.
//!
//! All queries go through the runtime sqlx API with `?` placeholders.
//! The only dynamic SQL fragments are the UPDATE's SET list (assembled
//! from the present columns of a change set, values always bound) and
//! the ORDER BY clause (interpolated from closed enums).

use crate::{DbError, Result as DbErrorResult};

use aqua_core::{ErrorLocation, ProfileChanges, UserProfile};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

pub const DEFAULT_SEARCH_LIMIT: i64 = 20;
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Sort keys accepted by [`UserRepository::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserOrderBy {
    #[default]
    CreatedAt,
    Name,
    Email,
    DailyGoalMl,
}

impl UserOrderBy {
    fn as_sql(self) -> &'static str {
        match self {
            UserOrderBy::CreatedAt => "created_at",
            UserOrderBy::Name => "name",
            UserOrderBy::Email => "email",
            UserOrderBy::DailyGoalMl => "daily_goal_ml",
        }
    }
}

impl FromStr for UserOrderBy {
    type Err = ();

    // Unknown keys fall back to the default sort instead of erroring.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(UserOrderBy::CreatedAt),
            "name" => Ok(UserOrderBy::Name),
            "email" => Ok(UserOrderBy::Email),
            "daily_goal_ml" => Ok(UserOrderBy::DailyGoalMl),
            _ => Ok(UserOrderBy::CreatedAt),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDir {
    Asc,
    #[default]
    Desc,
}

impl OrderDir {
    fn as_sql(self) -> &'static str {
        match self {
            OrderDir::Asc => "ASC",
            OrderDir::Desc => "DESC",
        }
    }
}

impl FromStr for OrderDir {
    type Err = ();

    // Anything other than "asc" sorts descending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(OrderDir::Asc),
            _ => Ok(OrderDir::Desc),
        }
    }
}

/// Parameters for the paginated user listing.
#[derive(Debug, Clone)]
pub struct UserSearch {
    /// Case-insensitive substring match against name and email.
    pub q: Option<String>,
    pub limit: i64,
    pub offset: i64,
    pub order_by: UserOrderBy,
    pub order_dir: OrderDir,
}

impl Default for UserSearch {
    fn default() -> Self {
        Self {
            q: None,
            limit: DEFAULT_SEARCH_LIMIT,
            offset: 0,
            order_by: UserOrderBy::default(),
            order_dir: OrderDir::default(),
        }
    }
}

/// One page of search results plus the unpaged match count.
#[derive(Debug, Clone)]
pub struct UserPage {
    pub total: i64,
    pub items: Vec<UserProfile>,
}

/// Aggregate statistics across all users.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub total_users: i64,
    /// Average body weight, rounded to one decimal. NULL weights are
    /// skipped by AVG; None when no user has a weight.
    pub avg_weight_kg: Option<f64>,
    /// Average daily goal, rounded to a whole milliliter.
    pub avg_daily_goal_ml: Option<f64>,
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    password: String,
    sex: Option<String>,
    age: Option<i64>,
    weight_kg: Option<f64>,
    daily_goal_ml: i64,
    created_at: i64,
}

impl UserRow {
    fn into_profile(self) -> DbErrorResult<UserProfile> {
        Ok(UserProfile {
            id: Uuid::parse_str(&self.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            name: self.name,
            email: self.email,
            password: self.password,
            sex: self.sex,
            age: self.age.map(|a| a as i32),
            weight_kg: self.weight_kg,
            daily_goal_ml: self.daily_goal_ml as i32,
            created_at: DateTime::from_timestamp(self.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    total_users: i64,
    avg_weight_kg: Option<f64>,
    avg_daily_goal_ml: Option<f64>,
}

/// SQLite reports duplicate emails as a UNIQUE constraint failure.
fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.to_string().contains("UNIQUE constraint")
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, profile: &UserProfile) -> DbErrorResult<()> {
        let id = profile.id.to_string();
        let age = profile.age.map(i64::from);
        let daily_goal_ml = i64::from(profile.daily_goal_ml);
        let created_at = profile.created_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    id, name, email, password, sex, age, weight_kg,
                    daily_goal_ml, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.password)
        .bind(profile.sex.as_deref())
        .bind(age)
        .bind(profile.weight_kg)
        .bind(daily_goal_ml)
        .bind(created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(DbError::DuplicateEmail {
                email: profile.email.clone(),
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserProfile>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, password, sex, age, weight_kg,
                    daily_goal_ml, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_profile).transpose()
    }

    /// Apply a reconciled change set as a single UPDATE.
    ///
    /// The SET list names exactly the columns present in `changes`;
    /// clearable columns bind NULL when the change is an explicit clear.
    /// An empty change set is a no-op.
    pub async fn update_fields(&self, id: Uuid, changes: &ProfileChanges) -> DbErrorResult<()> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut sets: Vec<&'static str> = Vec::new();
        if changes.name.is_some() {
            sets.push("name = ?");
        }
        if changes.email.is_some() {
            sets.push("email = ?");
        }
        if changes.password.is_some() {
            sets.push("password = ?");
        }
        if changes.sex.is_some() {
            sets.push("sex = ?");
        }
        if changes.age.is_some() {
            sets.push("age = ?");
        }
        if changes.weight_kg.is_some() {
            sets.push("weight_kg = ?");
        }
        if changes.daily_goal_ml.is_some() {
            sets.push("daily_goal_ml = ?");
        }

        let sql = format!("UPDATE users SET {} WHERE id = ?", sets.join(", "));
        let id_str = id.to_string();

        let mut query = sqlx::query(&sql);
        if let Some(name) = &changes.name {
            query = query.bind(name);
        }
        if let Some(email) = &changes.email {
            query = query.bind(email);
        }
        if let Some(password) = &changes.password {
            query = query.bind(password);
        }
        if let Some(sex) = &changes.sex {
            query = query.bind(sex.as_deref());
        }
        if let Some(age) = changes.age {
            query = query.bind(age.map(i64::from));
        }
        if let Some(weight_kg) = changes.weight_kg {
            query = query.bind(weight_kg);
        }
        if let Some(daily_goal_ml) = changes.daily_goal_ml {
            query = query.bind(i64::from(daily_goal_ml));
        }

        let result = match query.bind(&id_str).execute(&self.pool).await {
            Ok(result) => result,
            Err(e) if is_unique_violation(&e) => {
                return Err(DbError::DuplicateEmail {
                    email: changes.email.clone().unwrap_or_default(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e.into()),
        };

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(&id_str)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Paginated, filtered listing.
    ///
    /// The limit is clamped to 1..=[`MAX_SEARCH_LIMIT`] and the offset
    /// floored at zero. Sort key and direction are closed enums, so the
    /// interpolated ORDER BY can only name whitelisted columns.
    pub async fn search(&self, search: &UserSearch) -> DbErrorResult<UserPage> {
        let limit = search.limit.clamp(1, MAX_SEARCH_LIMIT);
        let offset = search.offset.max(0);

        let pattern = search
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(|q| format!("%{}%", q.to_lowercase()));

        let where_sql = if pattern.is_some() {
            " WHERE (LOWER(name) LIKE ? OR LOWER(email) LIKE ?)"
        } else {
            ""
        };

        let count_sql = format!("SELECT COUNT(*) FROM users{}", where_sql);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(pattern) = &pattern {
            count_query = count_query.bind(pattern).bind(pattern);
        }
        let total = count_query.fetch_one(&self.pool).await?;

        let list_sql = format!(
            "SELECT id, name, email, password, sex, age, weight_kg, daily_goal_ml, created_at \
             FROM users{} ORDER BY {} {} LIMIT ? OFFSET ?",
            where_sql,
            search.order_by.as_sql(),
            search.order_dir.as_sql(),
        );
        let mut list_query = sqlx::query_as::<_, UserRow>(&list_sql);
        if let Some(pattern) = &pattern {
            list_query = list_query.bind(pattern).bind(pattern);
        }
        let rows = list_query
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let items = rows
            .into_iter()
            .map(UserRow::into_profile)
            .collect::<DbErrorResult<Vec<_>>>()?;

        Ok(UserPage { total, items })
    }

    pub async fn stats(&self) -> DbErrorResult<UserStats> {
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
                SELECT COUNT(*) AS total_users,
                    ROUND(AVG(weight_kg), 1) AS avg_weight_kg,
                    ROUND(AVG(daily_goal_ml), 0) AS avg_daily_goal_ml
                FROM users
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(UserStats {
            total_users: row.total_users,
            avg_weight_kg: row.avg_weight_kg,
            avg_daily_goal_ml: row.avg_daily_goal_ml,
        })
    }
}
