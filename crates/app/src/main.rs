mod render;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use profinder_core::{
    update, ClientConfig, Effect, HttpTransport, ProfessorSearch, SearchDriver, SearchEvent,
    SearchState, DEFAULT_AUTHORIZATION, DEFAULT_ENDPOINT, DEFAULT_SCHOOL_ID,
};
use render::{render_once, render_state};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "profinder", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// GraphQL endpoint of the review API
    #[arg(long, env = "PROFINDER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Value sent in the Authorization header
    #[arg(
        long,
        env = "PROFINDER_AUTHORIZATION",
        default_value = DEFAULT_AUTHORIZATION,
        hide_env_values = true
    )]
    authorization: String,

    /// Global id of the school that name searches are restricted to
    #[arg(long, env = "PROFINDER_SCHOOL_ID", default_value = DEFAULT_SCHOOL_ID)]
    school_id: String,

    /// Numeric school id; takes precedence over --school-id
    #[arg(long, env = "PROFINDER_SCHOOL_LEGACY_ID")]
    school_legacy_id: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Search once by professor name or numeric id and print the results.
    Search {
        /// Professor name, or numeric professor id
        #[arg(long)]
        query: String,
        /// Print the professor records as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Read one search per line from stdin until EOF.
    Interactive,
}

impl Cli {
    fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let config = ClientConfig::new(&self.endpoint, &self.authorization, &self.school_id)
            .context("invalid client configuration")?;
        Ok(match self.school_legacy_id {
            Some(legacy_id) => config.with_school_legacy_id(legacy_id),
            None => config,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.client_config()?;
    let search = ProfessorSearch::from_config(&config)?;

    info!(
        version = app_version,
        endpoint = %config.endpoint,
        school_id = %config.school_id,
        started_at = %Utc::now().to_rfc3339(),
        "profinder boot"
    );

    match cli.command {
        Command::Search { query, json } => run_once(search, query, json).await,
        Command::Interactive => run_interactive(search).await,
    }
}

async fn run_once(
    search: ProfessorSearch<HttpTransport>,
    query: String,
    json: bool,
) -> anyhow::Result<()> {
    let (typed, _) = update(&SearchState::default(), SearchEvent::QueryChanged(query));
    let (mut state, effect) = update(&typed, SearchEvent::Submitted);

    let Some(Effect::Dispatch { ticket, text }) = effect else {
        warn!("empty search text, nothing to do");
        return Ok(());
    };

    let outcome = search
        .search(&text)
        .await
        .map_err(|error| error.user_message());
    state = update(&state, SearchEvent::Completed { ticket, outcome }).0;

    print!("{}", render_once(&state, json)?);
    Ok(())
}

async fn run_interactive(search: ProfessorSearch<HttpTransport>) -> anyhow::Result<()> {
    let (mut driver, mut completions) = SearchDriver::new(search);
    let mut state = SearchState::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt()?;
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                let (typed, _) = update(&state, SearchEvent::QueryChanged(line));
                let (next, effect) = update(&typed, SearchEvent::Submitted);
                state = next;

                match effect {
                    Some(effect) => {
                        driver.dispatch(effect);
                        print!("{}", render_state(&state));
                    }
                    None => prompt()?,
                }
            }
            Some(event) = completions.recv() => {
                let (next, _) = update(&state, event);
                if next != state {
                    state = next;
                    print!("{}", render_state(&state));
                    prompt()?;
                }
            }
        }
    }

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "search> ")?;
    stdout.flush()
}
