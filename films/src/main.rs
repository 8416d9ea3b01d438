//! Star Wars films TUI
//!
//! Event (keyboard / mouse) -> FilmsPage.handle_event() -> Action
//! -> reducer drives the films machine -> Effect::FetchFilms on entering
//! `loading` -> task -> FilmsDidLoad / FilmsDidError -> re-render.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p films
//! cargo run -p films -- --fetch-policy network-only --log-file films.log --debug
//! ```

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use films::action::Action;
use films::api::{FilmsClient, DEFAULT_ENDPOINT};
use films::components::{Component, FilmsPage, FilmsPageProps};
use films::effect::FilmsEffects;
use films::graphql::FetchPolicy;
use films::reducer::reducer;
use films::state::{AppState, LOADING_ANIM_TICK_MS};
use films_core::{EffectRuntime, EffectStoreWithMiddleware, EventKind, EventOutcome, LoggingMiddleware};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Star Wars films, fetched over GraphQL
#[derive(Parser, Debug)]
#[command(name = "films")]
#[command(about = "Lists Star Wars films from a GraphQL endpoint")]
struct Args {
    /// GraphQL endpoint serving `allFilms`
    #[arg(long, short, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// How refetches use the response cache
    #[arg(long, value_enum, default_value_t = FetchPolicy::CacheFirst)]
    fetch_policy: FetchPolicy,

    /// Write logs to this file (the terminal belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log every dispatched action
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path, args.debug)?;
    }

    // ===== Terminal setup =====
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app and capture result
    let result = run_app(&mut terminal, &args).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.context("films UI exited with an error")
}

/// Log to `path`; `--debug` lowers the default level so dispatched actions show up.
fn init_logging(path: &Path, debug: bool) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let default_filter = if debug {
        "films=debug,films_core=debug"
    } else {
        "films=info,films_core=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    args: &Args,
) -> io::Result<()> {
    let middleware = if args.debug {
        LoggingMiddleware::verbose()
    } else {
        LoggingMiddleware::new()
    };
    let store = EffectStoreWithMiddleware::new(AppState::new(&args.endpoint), reducer, middleware);
    let mut runtime = EffectRuntime::from_store(store);

    tracing::info!(endpoint = %args.endpoint, policy = ?args.fetch_policy, "Starting films UI");
    let effects = FilmsEffects::new(FilmsClient::http(&args.endpoint, args.fetch_policy));

    // Tick timer for the loading spinner
    runtime
        .subscriptions()
        .interval("tick", Duration::from_millis(LOADING_ANIM_TICK_MS), || {
            Action::Tick
        });

    // Start the machine; its initial loading state fetches
    runtime.enqueue(Action::FilmsStart);

    let page = RefCell::new(FilmsPage::new());

    runtime
        .run(
            terminal,
            |frame, area, state| {
                page.borrow_mut()
                    .render(frame, area, FilmsPageProps { state });
            },
            |event: &EventKind, state: &AppState| {
                if let EventKind::Resize(..) = event {
                    return EventOutcome::ignored().with_render();
                }
                EventOutcome::from_actions(
                    page.borrow_mut()
                        .handle_event(event, FilmsPageProps { state }),
                )
            },
            |action| matches!(action, Action::Quit),
            |effect, ctx| effects.handle(effect, ctx),
        )
        .await
}
