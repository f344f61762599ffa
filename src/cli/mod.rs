// CLI module for administrative operations requiring server access

pub mod seed;

use clap::{Parser, Subcommand};

/// TaskHub CLI
#[derive(Parser)]
#[command(name = "taskhub")]
#[command(about = "TaskHub task management backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default when no command is given)
    Serve,

    /// Seed the demo roles, users, and tasks
    Seed,
}
