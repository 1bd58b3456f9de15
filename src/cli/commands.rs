//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mints API command-line client
#[derive(Parser, Debug)]
#[command(name = "mints")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (YAML, `mints:` section)
    #[arg(short = 'C', long, global = true, env = "MINTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Instance base URL (overrides the config file)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// API key (overrides the config file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Session token with --user, contact token otherwise
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Use the authenticated user context
    #[arg(long, global = true)]
    pub user: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a raw request
    Request {
        /// HTTP method (GET, POST, PUT, PATCH, DELETE)
        method: String,

        /// Resource path, e.g. /ecommerce/products
        path: String,

        /// Columns to select (comma-separated)
        #[arg(long)]
        fields: Option<String>,

        /// Ordering, `-` prefix for descending
        #[arg(long)]
        sort: Option<String>,

        /// Free-text filter
        #[arg(long)]
        search: Option<String>,

        /// Relationship to embed
        #[arg(long)]
        include: Option<String>,

        /// Extra query option (repeatable)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Full options object as JSON
        #[arg(long)]
        options_json: Option<String>,

        /// Request body as JSON
        #[arg(long)]
        data: Option<String>,
    },

    /// Register a page visit
    Visit {
        /// Visitor IP address
        #[arg(long)]
        ip: String,

        /// Visitor user agent
        #[arg(long)]
        user_agent: String,

        /// URL visited
        #[arg(long)]
        url: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
