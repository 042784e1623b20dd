use std::path::PathBuf;

use clap::{Parser, Subcommand};
use llmr_client::{DEFAULT_PER_PAGE, DEFAULT_POST_TYPE};

/// LLM Ready MCP client
#[derive(Debug, Parser)]
#[command(name = "llmr", about = "Query the MCP endpoints of LLM Ready WordPress sites")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "llmr.toml", env = "LLMR_CONFIG")]
    pub config: PathBuf,

    /// Override the configured base URL
    #[arg(long, env = "LLMR_BASE_URL")]
    pub base_url: Option<String>,

    /// Override the configured log filter
    #[arg(long, env = "LLMR_LOG")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Search for "AI tools" and fetch business info
    Example,
    /// Search site content
    Search {
        query: String,
        #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
        per_page: u32,
        #[arg(long, default_value = DEFAULT_POST_TYPE)]
        post_type: String,
    },
    /// Fetch business information
    Business,
    /// Fetch the MCP discovery document
    Discovery,
    /// Fetch contact details
    Contact,
    /// Fetch the services listing
    Services,
    /// Fetch booking availability
    Booking,
    /// List configured sites
    Sites,
    /// Search every configured site, or a subset
    SearchSites {
        query: String,
        /// Only search this site id
        #[arg(long, conflicts_with = "tag")]
        site: Option<String>,
        /// Only search sites with this tag
        #[arg(long)]
        tag: Option<String>,
    },
}
