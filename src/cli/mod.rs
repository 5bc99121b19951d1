//! CLI module for the World League API

pub mod serve;

use clap::{Parser, Subcommand};

/// World League API - team group draws over HTTP
#[derive(Parser)]
#[command(name = "world-league-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
