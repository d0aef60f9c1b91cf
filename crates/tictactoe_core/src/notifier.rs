//! Click routing from the render surface to whoever is waiting for a move.

use crate::surface::{self, SharedSurface, SurfaceEvent};
use crate::{Marker, Position, ResultAnnouncer, SymbolError, marker_for_name};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, trace};

/// One-shot callback receiving the clicked cell.
pub type MoveHandler = Box<dyn FnOnce(Position) + Send>;

/// Forwards clicks on blank cells to a single registered handler.
///
/// At most one handler is pending. Registering a new one silently replaces
/// the old one, and a handler is consumed by the first click it receives.
#[derive(Clone)]
pub struct InputNotifier {
    surface: SharedSurface,
    listener: Arc<Mutex<Option<MoveHandler>>>,
}

impl InputNotifier {
    /// Binds a notifier to the cells of `surface`.
    pub fn new(surface: SharedSurface) -> Self {
        Self {
            surface,
            listener: Arc::new(Mutex::new(None)),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<MoveHandler>> {
        self.listener.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `handler` for the next click on a blank cell.
    #[instrument(skip_all)]
    pub fn register_listener(&self, handler: MoveHandler) {
        if self.slot().replace(handler).is_some() {
            debug!("Replaced pending move handler");
        }
    }

    /// Whether a handler is waiting for a click.
    pub fn has_listener(&self) -> bool {
        self.slot().is_some()
    }

    /// Processes a raw click on `position`.
    ///
    /// Returns `true` when the click was delivered to a handler. Clicks on
    /// occupied cells, or with nobody listening, are ignored.
    #[instrument(skip(self))]
    pub fn process_event(&self, position: Position) -> Result<bool, SymbolError> {
        let marker = {
            let surface = surface::lock(&self.surface);
            marker_for_name(surface.cell_value(position))?
        };
        if marker != Marker::Blank {
            debug!(%marker, "Ignoring click on occupied cell");
            return Ok(false);
        }
        // Release the slot before calling out so the handler may re-register.
        let handler = self.slot().take();
        match handler {
            Some(handler) => {
                handler(position);
                Ok(true)
            }
            None => {
                trace!("Ignoring click with no pending move");
                Ok(false)
            }
        }
    }
}

/// Delivers surface events to the input notifier and result announcer.
#[derive(Clone, derive_new::new)]
pub struct EventRouter {
    notifier: InputNotifier,
    announcer: ResultAnnouncer,
}

impl EventRouter {
    /// Handles one event to completion.
    pub fn dispatch(&self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::CellClicked(position) => {
                if let Err(e) = self.notifier.process_event(position) {
                    error!(error = %e, %position, "Cell holds an unknown marker");
                }
            }
            SurfaceEvent::OverlayClicked => self.announcer.clear(),
        }
    }

    /// Dispatches events in arrival order until the sender side closes.
    #[instrument(skip_all)]
    pub async fn run(self, mut events: mpsc::UnboundedReceiver<SurfaceEvent>) {
        while let Some(event) = events.recv().await {
            self.dispatch(event);
        }
        info!("Surface event stream closed");
    }
}
