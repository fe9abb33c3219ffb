use std::io;
use std::sync::{mpsc, Arc, RwLock};
use std::time::Duration;

use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};

mod actions;
mod background;
mod dispatcher;
mod domain_models;
mod logger;
mod middleware;
mod reducers;
mod state;
mod theme;
mod utils;
mod view_models;
mod views;

use actions::{Action, BranchAction, GlobalAction};
use background::{spawn_background_worker, SharedState};
use cv_timeline_config::AppConfig;
use gh_history_client::{octocrab, OctocrabClient};
use middleware::{
    DocumentMiddleware, HistoryMiddleware, KeyboardMiddleware, LoggingMiddleware, Middleware,
};
use pdf_page_viewer::HttpHayroProvider;
use state::AppState;
use views::PageImageSurface;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init();

    // .env is optional; it usually only carries GITHUB_TOKEN
    dotenvy::dotenv().ok();

    log::info!("Starting cv-timeline (log file: {})", log_file.display());

    let config = AppConfig::load();
    let client = build_client(&config)?;
    let provider = Arc::new(HttpHayroProvider::new());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Shared state plus the two channels: actions into the worker,
    // surviving actions back out to the reducers
    let state: SharedState = Arc::new(RwLock::new(AppState::with_config(config)));
    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let (result_tx, result_rx) = mpsc::channel::<Action>();

    // Middleware chain, in execution order
    let middleware: Vec<Box<dyn Middleware + Send>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(HistoryMiddleware::new(client)),
        Box::new(DocumentMiddleware::new(provider)),
    ];

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&state),
        middleware,
    );

    // Kick off the initial branch fetch
    let _ = action_tx.send(Action::Branches(BranchAction::Load));

    let result = run_app(&mut terminal, &state, &action_tx, &result_rx);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    // Idempotent: if the worker already stopped on a Quit the send just fails
    let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    log::info!("Exiting cv-timeline");
    result
}

/// Build the GitHub client, authenticated when GITHUB_TOKEN is set
fn build_client(config: &AppConfig) -> anyhow::Result<Arc<OctocrabClient>> {
    let mut builder = octocrab::Octocrab::builder();

    match std::env::var("GITHUB_TOKEN") {
        Ok(token) if !token.is_empty() => {
            log::info!("Using GITHUB_TOKEN for API requests");
            builder = builder.personal_token(token);
        }
        _ => {
            log::info!("No GITHUB_TOKEN set, API requests are unauthenticated");
        }
    }

    if config.api_host != "https://api.github.com" {
        builder = builder
            .base_uri(&config.api_host)
            .context("Failed to set API base URI")?;
    }

    let octocrab = builder.build().context("Failed to build GitHub client")?;
    Ok(Arc::new(OctocrabClient::new(Arc::new(octocrab))))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &SharedState,
    action_tx: &mpsc::Sender<Action>,
    result_rx: &mpsc::Receiver<Action>,
) -> anyhow::Result<()> {
    let mut surface = PageImageSurface::new();

    loop {
        // Apply every action the worker forwarded since the last frame
        while let Ok(action) = result_rx.try_recv() {
            let mut guard = state
                .write()
                .map_err(|e| anyhow::anyhow!("Shared state lock poisoned: {}", e))?;
            let next = reducers::reduce(guard.clone(), &action);
            *guard = next;
        }

        let snapshot = {
            let guard = state
                .read()
                .map_err(|e| anyhow::anyhow!("Shared state lock poisoned: {}", e))?;
            guard.clone()
        };

        if !snapshot.running {
            break;
        }

        terminal.draw(|frame| {
            views::render(&snapshot, &mut surface, frame);
        })?;

        // Handle events
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let _ = action_tx.send(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
