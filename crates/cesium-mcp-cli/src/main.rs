use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

use cesium_mcp::logging::{init_logging, LoggingConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Cesium globe MCP adapter and gazetteer utilities")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Tracing filter, overriding RUST_LOG (e.g. "debug", "cesium_mcp=trace").
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Largest JSON-RPC response the MCP server may emit, in bytes.
    /// Takes precedence over CESIUM_MCP_MAX_RESPONSE_BYTES.
    #[arg(long, global = true)]
    pub max_response_bytes: Option<usize>,

    /// Output format for one-shot commands.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve MCP over stdio (newline-delimited JSON-RPC).
    Mcp,
    /// Resolve a place name to coordinates.
    Resolve {
        /// Place name, alias or airport code.
        name: String,
    },
    /// List places whose name starts with a prefix.
    Search {
        /// Name prefix; matching ignores case and surrounding whitespace.
        prefix: String,
        /// Maximum number of places to print.
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// List every known place.
    Locations,
    /// List the tools advertised to MCP clients.
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if let Some(level) = cli.global.log_level.as_deref() {
        logging = logging.with_level(level);
    }
    init_logging(&logging)?;

    match cli.command {
        Command::Mcp => commands::mcp::run(&cli.global).await,
        Command::Resolve { name } => commands::locations::handle_resolve(&cli.global, &name),
        Command::Search { prefix, limit } => {
            commands::locations::handle_search(&cli.global, &prefix, limit)
        }
        Command::Locations => commands::locations::handle_list(&cli.global),
        Command::Tools => commands::tools::handle_list_tools(&cli.global),
    }
}
