use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "keytrie", version, about = "Resolve key sequences against modal bindings")]
pub struct Cli {
    /// Binding configuration, TOML or JSON. Without it a `keytrie.toml` is searched for in the
    /// current directory and its ancestors, then the built-in bindings are used.
    #[arg(long, short, global = true, env = "KEYTRIE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file, or a directory to place it in.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the configuration and report how many bindings it has.
    Check,
    /// Print every binding in resolution order.
    Dump,
    /// Read key notation from stdin, one line at a time, and print resolved actions.
    Run,
}
