//! Win/draw announcement overlay.

use crate::surface::{self, SharedSurface};
use crate::{GameError, Marker};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;
use tracing::{debug, info, instrument};

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Marker),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Winning marker, `None` for a draw.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Winner(marker) => Some(*marker),
            Outcome::Draw => None,
        }
    }

    /// Message shown on the overlay.
    pub fn message(&self) -> String {
        match self {
            Outcome::Winner(marker) => format!("{marker} wins!"),
            Outcome::Draw => "It's a draw.".to_string(),
        }
    }
}

/// Shows match results and reports when the user dismisses them.
#[derive(Clone)]
pub struct ResultAnnouncer {
    surface: SharedSurface,
    dismissed: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl ResultAnnouncer {
    /// Creates an announcer drawing on `surface`.
    pub fn new(surface: SharedSurface) -> Self {
        Self {
            surface,
            dismissed: Arc::new(Mutex::new(None)),
        }
    }

    fn pending(&self) -> MutexGuard<'_, Option<oneshot::Sender<()>>> {
        self.dismissed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Shows the outcome and returns a handle that resolves on dismissal.
    ///
    /// The dismissal is registered before the overlay becomes visible, so a
    /// click can never land between the two.
    #[instrument(skip(self))]
    pub fn display(&self, outcome: &Outcome) -> Dismissal {
        let (tx, rx) = oneshot::channel();
        *self.pending() = Some(tx);
        surface::lock(&self.surface).show_overlay(&outcome.message());
        info!(message = %outcome.message(), "Result displayed");
        Dismissal(rx)
    }

    /// Hides the overlay and completes the pending dismissal, if any.
    #[instrument(skip(self))]
    pub fn clear(&self) {
        surface::lock(&self.surface).hide_overlay();
        if let Some(tx) = self.pending().take() {
            let _ = tx.send(());
            debug!("Result dismissed");
        }
    }

    /// Whether a result is waiting to be dismissed.
    pub fn is_displayed(&self) -> bool {
        self.pending().is_some()
    }
}

/// Completes once the announced result is dismissed.
#[derive(Debug)]
pub struct Dismissal(oneshot::Receiver<()>);

impl Dismissal {
    /// Waits for the user to dismiss the result.
    pub async fn wait(self) -> Result<(), GameError> {
        self.0.await.map_err(|_| GameError::AnnouncerDropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Canvas;

    #[test]
    fn test_messages() {
        assert_eq!(Outcome::Winner(Marker::Cross).message(), "Cross wins!");
        assert_eq!(Outcome::Winner(Marker::Nought).message(), "Nought wins!");
        assert_eq!(Outcome::Draw.message(), "It's a draw.");
    }

    #[tokio::test]
    async fn test_clear_resolves_dismissal() {
        let canvas = Canvas::new().shared();
        let announcer = ResultAnnouncer::new(canvas.clone());

        let dismissal = announcer.display(&Outcome::Draw);
        assert!(announcer.is_displayed());
        assert_eq!(canvas.lock().unwrap().overlay(), Some("It's a draw."));

        announcer.clear();
        assert!(!announcer.is_displayed());
        assert_eq!(canvas.lock().unwrap().overlay(), None);
        assert_eq!(dismissal.wait().await, Ok(()));
    }

    #[tokio::test]
    async fn test_redisplay_abandons_previous_dismissal() {
        let canvas = Canvas::new().shared();
        let announcer = ResultAnnouncer::new(canvas);

        let stale = announcer.display(&Outcome::Draw);
        let _fresh = announcer.display(&Outcome::Winner(Marker::Cross));
        assert_eq!(stale.wait().await, Err(GameError::AnnouncerDropped));
    }

    #[test]
    fn test_clear_without_display_hides_overlay() {
        let canvas = Canvas::new().shared();
        let announcer = ResultAnnouncer::new(canvas.clone());
        announcer.clear();
        assert_eq!(canvas.lock().unwrap().overlay(), None);
    }
}
