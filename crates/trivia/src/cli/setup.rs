use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trivia", bin_name = "trivia", version)]
#[command(about = "Trivia question bank and quiz game over HTTP", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./trivia.toml, then the user config directory)
    #[arg(short, long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// SQLite database file
        #[arg(short, long, value_name = "FILE")]
        database: Option<PathBuf>,
    },

    /// Create the database and seed the default categories
    Init {
        /// SQLite database file
        #[arg(short, long, value_name = "FILE")]
        database: Option<PathBuf>,
    },
}
