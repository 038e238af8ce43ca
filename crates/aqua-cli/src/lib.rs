//! aqua-cli library
//!
//! Exposes the HTTP [`Client`] so integration tests can exercise it
//! against a mock server.

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod user_commands;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
