use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use rollcall::config::Config;
use rollcall::logging;
use rollcall::replay::{replay, ReplayReport};
use rollcall::source::{ApiClient, DataSource, FileStore};
use rollcall::ui;
use rollcall::ui::mvi::Reducer;
use rollcall::ui::roster::{RosterIntent, RosterReducer, RosterState};

#[derive(Debug, Parser)]
#[command(name = "rollcall", version, about = "Take the class roll from the terminal")]
struct Cli {
    /// Config file (default: <config dir>/rollcall/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Roll-call API base URL, overrides `api.base_url`
    #[arg(long, value_name = "URL")]
    api: Option<String>,

    /// Read students from a local JSON file instead of the API
    #[arg(long, value_name = "FILE")]
    students: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply JSON-line intents headlessly and print the resulting board
    Replay {
        /// Seed the roster from a students JSON file
        #[arg(long, value_name = "FILE")]
        students: Option<PathBuf>,

        /// One roster intent per line
        intents: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(api) = cli.api {
        config.api.base_url = api;
        config.validate().context("Invalid --api")?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.command {
        Some(Command::Replay { students, intents }) => {
            logging::init_stderr(&config.logging.level);
            let mut state = RosterState::with_sort((&config.roster).into());
            if let Some(path) = students {
                let students = runtime
                    .block_on(FileStore::new(path).fetch_students())
                    .context("Failed to read students")?;
                state = RosterReducer::reduce(state, RosterIntent::Load { students });
            }

            let file = File::open(&intents)
                .with_context(|| format!("Failed to open '{}'", intents.display()))?;
            let state = replay(state, BufReader::new(file))?;

            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &ReplayReport::new(&state))?;
            writeln!(stdout)?;
            Ok(())
        }
        None => {
            let log_path = config.log_file();
            logging::init_file(&config.logging.level, &log_path)
                .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

            let source = match cli.students {
                Some(path) => DataSource::File(FileStore::new(path)),
                None => DataSource::Api(ApiClient::new(&config.api)?),
            };
            tracing::info!(source = %source.describe(), "starting rollcall");

            ui::run(&config, source, runtime.handle())?;
            Ok(())
        }
    }
}
