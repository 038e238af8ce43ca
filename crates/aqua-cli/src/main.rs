//! aqua - admin CLI for the aquatrack hydration service
//!
//! Talks to a running aqua-server instance and prints JSON responses
//! to stdout, one document per invocation.
//!
//! # Examples
//!
//! ```bash
//! # Register a user (daily goal is derived from the weight)
//! aqua register --name "Ana Garcia" --email ana@example.com --password secret --weight-kg 70
//!
//! # List users matching a search term
//! aqua user list --q ana --pretty
//!
//! # Clear a stored weight (the daily goal falls back to 2000 ml)
//! aqua user update 4f8a... --clear-weight
//!
//! # Point at a non-default server
//! aqua --server http://10.0.0.5:8000 stats
//! ```

mod cli;
mod client;
mod commands;
mod user_commands;

use crate::cli::Cli;
use crate::client::Client;
use crate::commands::Commands;
use crate::user_commands::UserCommands;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client = Client::new(&cli.server);

    let result = match cli.command {
        Commands::Register {
            name,
            email,
            password,
            sex,
            age,
            weight_kg,
        } => {
            client
                .register(&name, &email, &password, sex.as_deref(), age, weight_kg)
                .await
        }

        Commands::User { action } => match action {
            UserCommands::List {
                q,
                limit,
                offset,
                order_by,
                order_dir,
            } => {
                client
                    .list_users(
                        q.as_deref(),
                        limit,
                        offset,
                        order_by.as_deref(),
                        order_dir.as_deref(),
                    )
                    .await
            }

            UserCommands::Get { id } => client.get_user(&id).await,

            UserCommands::Update {
                id,
                name,
                email,
                password,
                sex,
                clear_sex,
                age,
                clear_age,
                weight_kg,
                clear_weight,
            } => {
                // A --clear-* flag sends an explicit null, distinct from
                // omitting the field.
                let sex = if clear_sex {
                    Some(None)
                } else {
                    sex.as_deref().map(Some)
                };
                let age = if clear_age { Some(None) } else { age.map(Some) };
                let weight_kg = if clear_weight {
                    Some(None)
                } else {
                    weight_kg.map(Some)
                };

                client
                    .update_user(
                        &id,
                        name.as_deref(),
                        email.as_deref(),
                        password.as_deref(),
                        sex,
                        age,
                        weight_kg,
                    )
                    .await
            }

            UserCommands::Delete { id } => client.delete_user(&id).await,
        },

        Commands::Stats => client.stats().await,

        Commands::Health => client.health().await,
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
