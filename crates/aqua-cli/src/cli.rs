use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "aqua")]
#[command(about = "Admin CLI for the aquatrack hydration service")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = "http://127.0.0.1:8000")]
    pub(crate) server: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
