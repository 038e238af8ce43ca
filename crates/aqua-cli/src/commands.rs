use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Register a new user profile
    Register {
        /// Display name
        #[arg(long)]
        name: String,

        /// Login email (unique across users)
        #[arg(long)]
        email: String,

        /// Credential secret
        #[arg(long)]
        password: String,

        /// Free-form sex/gender text
        #[arg(long)]
        sex: Option<String>,

        /// Age in years
        #[arg(long)]
        age: Option<i32>,

        /// Body weight driving the daily goal
        #[arg(long)]
        weight_kg: Option<f64>,
    },

    /// Admin operations on user profiles
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Aggregate statistics across all users
    Stats,

    /// Check server and database health
    Health,
}
