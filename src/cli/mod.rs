//! CLI command definitions and handlers

use clap::{Parser, Subcommand, ValueEnum};
pub use clap_complete::Shell;

pub mod args;
pub mod context;
pub mod decode;
pub mod query;
pub mod schema;
pub mod status;
pub mod types;

pub use args::{OutputFormat, PageArgs};
pub use context::CommandContext;

use crate::schema::BaseShape;

/// igcop - Inspect Information Governance Catalog asset payloads
#[derive(Parser, Debug)]
#[command(name = "igcop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json) [default: table]
    #[arg(long, global = true, env = "IGCOP_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "IGCOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "IGCOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Base shape filter for `types`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BaseFilter {
    /// Types that carry only the reference header
    Reference,
    /// Types that carry the common catalog properties
    MainObject,
}

impl From<BaseFilter> for BaseShape {
    fn from(filter: BaseFilter) -> Self {
        match filter {
            BaseFilter::Reference => BaseShape::Reference,
            BaseFilter::MainObject => BaseShape::MainObject,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known asset types
    Types {
        /// Only list types extending this base shape
        #[arg(long, value_enum)]
        base: Option<BaseFilter>,
    },

    /// Show the properties of an asset type
    Schema {
        /// Asset type-id (e.g. database_table)
        type_id: String,

        /// Only list paged relationships
        #[arg(long)]
        paged: bool,
    },

    /// Decode a catalog payload and list the assets it holds
    #[command(after_help = "\
Reads a single asset, an array of assets, or a paged {\"paging\", \"items\"}
envelope. Reads stdin when FILE is omitted or '-'.

With --format json the decoded assets are re-encoded in normalized form.")]
    Decode {
        /// JSON file to read
        file: Option<String>,

        /// Decode untagged assets as this type-id
        #[arg(long = "type", short = 't')]
        type_id: Option<String>,

        /// Fail when the payload has fields the type does not declare
        #[arg(long)]
        strict: bool,
    },

    /// Print the request parameters for fetching an asset type
    Query {
        /// Asset type-id (e.g. database_table)
        type_id: String,

        /// Property to request (repeatable; default: all non-relational)
        #[arg(long = "property", short = 'p')]
        properties: Vec<String>,

        /// Request every property, paged relationships included
        #[arg(long, conflicts_with = "properties")]
        all: bool,

        /// Fetch one page of this paged relationship instead
        #[arg(long, conflicts_with_all = ["properties", "all"])]
        relationship: Option<String>,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Generate shell completions (static)
    #[command(after_help = "\
Examples:
  bash:   igcop completion bash > /etc/bash_completion.d/igcop
  zsh:    igcop completion zsh > \"${fpath[1]}/_igcop\"
  fish:   igcop completion fish > ~/.config/fish/completions/igcop.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
