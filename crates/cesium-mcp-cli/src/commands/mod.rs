// Handlers for CLI subcommands. main.rs parses arguments and dispatches here.

pub mod locations;
pub mod mcp;
pub mod tools;
