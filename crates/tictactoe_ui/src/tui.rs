//! Terminal session: runs the application behind a mouse-driven board.

use crate::ui::{self, BoardLayout};
use crate::UiConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tictactoe_core::{
    Application, Board, Canvas, EventRouter, FileSymbolLoader, HumanPlayer, Marker,
    ResultAnnouncer, SymbolRegistry,
};
use tokio::sync::oneshot;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

/// Sends log output to the configured file so it does not interfere with the
/// terminal.
pub fn init_tracing(config: &UiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Loads all three symbols or fails startup.
#[instrument]
pub async fn load_symbols(dir: &Path) -> Result<SymbolRegistry> {
    let loader = FileSymbolLoader::new(dir.to_path_buf());
    SymbolRegistry::load(&loader)
        .await
        .with_context(|| format!("Failed to load symbols from {}", dir.display()))
}

/// Prints the loaded symbols, one block per marker.
pub async fn print_symbols(config: &UiConfig) -> Result<()> {
    let symbols = load_symbols(config.assets_dir()).await?;
    for marker in [Marker::Blank, Marker::Cross, Marker::Nought] {
        println!("{} ({}):", marker, marker.name());
        println!("{}", symbols.payload(marker));
    }
    Ok(())
}

/// Plays matches in the terminal until the user quits.
pub async fn run_play(config: &UiConfig) -> Result<()> {
    // Symbols first: no board is shown unless every asset loaded.
    let symbols = Arc::new(load_symbols(config.assets_dir()).await?);

    let canvas = Canvas::new().shared();
    let board = Board::new(canvas.clone(), symbols);
    let announcer = ResultAnnouncer::new(canvas.clone());
    let router = EventRouter::new(board.controller().clone(), announcer.clone());

    let first = config.first_player();
    let mut app = Application::new(
        board,
        announcer,
        Box::new(HumanPlayer::new(first.marker())),
        Box::new(HumanPlayer::new(first.other())),
    );

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let app_handle = tokio::spawn(async move {
        app.run_until(async {
            let _ = shutdown_rx.await;
        })
        .await
    });

    info!(first = %first.marker(), "Starting terminal session");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &canvas, &router);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    let _ = shutdown_tx.send(());
    match app_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(error = %e, "Application stopped with error"),
        Err(e) => error!(error = %e, "Application task failed"),
    }

    if let Err(err) = &res {
        error!(error = ?err, "Terminal loop error");
    }
    res
}

/// Draws the canvas and turns terminal input into surface events.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    canvas: &Arc<Mutex<Canvas>>,
    router: &EventRouter,
) -> Result<()> {
    let mut layout = BoardLayout::default();
    loop {
        {
            let canvas = canvas.lock().unwrap_or_else(PoisonError::into_inner);
            terminal.draw(|f| layout = ui::draw(f, &canvas))?;
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let input = event::read()?;
        // The result may have appeared since the last draw.
        let overlay_showing = canvas
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .overlay()
            .is_some();
        let surface_event = match input {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("User quit");
                    return Ok(());
                }
                code => ui::key_event(code, overlay_showing),
            },
            Event::Mouse(mouse) => ui::mouse_event(&layout, mouse, overlay_showing),
            _ => None,
        };

        if let Some(surface_event) = surface_event {
            debug!(?surface_event, "Dispatching");
            router.dispatch(surface_event);
        }
    }
}
