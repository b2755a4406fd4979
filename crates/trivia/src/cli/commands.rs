use super::setup::{Cli, Commands};
use crate::server;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use triviaapp::config::TriviaConfig;
use triviaapp::store::seed_default_categories;
use triviaapp::store::sqlite::SqliteStore;

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TriviaConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Serve {
            bind,
            port,
            database,
        } => {
            apply_overrides(&mut config, bind, port, database);
            server::start_server(&config).await
        }
        Commands::Init { database } => {
            apply_overrides(&mut config, None, None, database);
            handle_init(&config)
        }
    }
}

/// `RUST_LOG` wins; otherwise the configured level, or `debug` with `--verbose`.
fn init_logging(config: &TriviaConfig, verbose: bool) {
    let fallback = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_overrides(
    config: &mut TriviaConfig,
    bind: Option<String>,
    port: Option<u16>,
    database: Option<PathBuf>,
) {
    if let Some(bind) = bind {
        config.bind = bind;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(database) = database {
        config.database = database;
    }
}

fn handle_init(config: &TriviaConfig) -> Result<()> {
    let mut store = SqliteStore::open(&config.database)
        .with_context(|| format!("opening {}", config.database.display()))?;
    let seeded = seed_default_categories(&mut store)?;
    info!(seeded, "database ready");

    println!("Initialized {}", config.database.display());
    if seeded > 0 {
        println!("Seeded {} categories", seeded);
    } else {
        println!("Categories already present");
    }
    Ok(())
}
