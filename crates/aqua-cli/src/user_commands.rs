use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum UserCommands {
    /// List users with optional search and paging
    List {
        /// Case-insensitive match against name and email
        #[arg(long)]
        q: Option<String>,

        /// Page size (the server caps this at 100)
        #[arg(long)]
        limit: Option<i64>,

        /// Rows to skip before the first result
        #[arg(long)]
        offset: Option<i64>,

        /// Sort column
        #[arg(long, value_parser = ["created_at", "name", "email", "daily_goal_ml"])]
        order_by: Option<String>,

        /// Sort direction
        #[arg(long, value_parser = ["asc", "desc"])]
        order_dir: Option<String>,
    },

    /// Get a user by ID
    Get {
        /// User ID (UUID)
        id: String,
    },

    /// Partially update a user profile
    Update {
        /// User ID (UUID)
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New login email
        #[arg(long)]
        email: Option<String>,

        /// New credential secret
        #[arg(long)]
        password: Option<String>,

        /// New sex/gender text
        #[arg(long, conflicts_with = "clear_sex")]
        sex: Option<String>,

        /// Clear the stored sex
        #[arg(long)]
        clear_sex: bool,

        /// New age in years
        #[arg(long, conflicts_with = "clear_age")]
        age: Option<i32>,

        /// Clear the stored age
        #[arg(long)]
        clear_age: bool,

        /// New body weight (the daily goal follows it)
        #[arg(long, conflicts_with = "clear_weight")]
        weight_kg: Option<f64>,

        /// Clear the stored weight (the daily goal falls back to 2000 ml)
        #[arg(long)]
        clear_weight: bool,
    },

    /// Delete a user
    Delete {
        /// User ID (UUID)
        id: String,
    },
}
