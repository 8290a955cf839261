//! CLI module - Command-line interface for lawblog
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// lawblog - Indian law blog generator
/// Generates blog posts on Indian legal topics with an LLM and serves them over HTTP
#[derive(Parser)]
#[command(name = "lawblog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server (default)
    #[command(alias = "daemon")]
    Serve,

    /// Generate a batch of blogs for a topic, or "trending"
    #[command(alias = "gen")]
    Generate {
        /// Topic to write about
        #[arg(required = true)]
        topic: Vec<String>,
        /// Number of blogs to generate
        #[arg(short, long)]
        count: Option<i32>,
    },

    /// List stored blogs, newest first
    #[command(alias = "ls")]
    List,

    /// Delete a stored blog
    #[command(alias = "rm")]
    Delete {
        /// Blog ID
        id: i32,
    },

    /// Create default config file
    Init,
}

pub use commands::*;
