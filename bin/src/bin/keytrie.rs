use anyhow::Result;
use clap::Parser;
use keytrie_bin::{
    cli::{Cli, Command},
    commands,
};
use keytrie_log::LogConfig;
use std::io;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let _log_guard = keytrie_log::init(LogConfig {
        log_file_path: cli.log_file,
    })
    .map_err(|e| eprintln!("Warning: Failed to initialize logging: {e}"))
    .ok();

    let trie = commands::load_trie(cli.config.as_deref())?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Check => commands::check::handle(&trie, &mut stdout),
        Command::Dump => commands::dump::handle(&trie, &mut stdout),
        Command::Run => {
            commands::run::handle(&trie, io::stdin().lock(), &mut stdout, &mut io::stderr())
        },
    }
}
