//! Markers and their display assets.
//!
//! A cell stores a marker by name; [`marker_for_name`] is the only way back
//! from that stored string to a typed [`Marker`].

use crate::{AssetError, SymbolError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::{debug, error, info, instrument};

/// Content of a board cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Marker {
    /// Empty cell.
    Blank,
    /// Cross (X).
    Cross,
    /// Nought (O).
    Nought,
}

impl Marker {
    /// Stable name stored in a cell.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The other playing marker. Blank has no opponent.
    pub fn opponent(self) -> Self {
        match self {
            Marker::Cross => Marker::Nought,
            Marker::Nought => Marker::Cross,
            Marker::Blank => Marker::Blank,
        }
    }
}

/// Maps a stored cell name back to its marker.
#[instrument]
pub fn marker_for_name(name: &str) -> Result<Marker, SymbolError> {
    Marker::iter()
        .find(|marker| marker.name() == name)
        .ok_or_else(|| SymbolError::NotFound(name.to_string()))
}

/// Display payloads for the three markers, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRegistry {
    blank: String,
    cross: String,
    nought: String,
}

impl SymbolRegistry {
    /// Creates a registry from already loaded payloads.
    pub fn new(
        blank: impl Into<String>,
        cross: impl Into<String>,
        nought: impl Into<String>,
    ) -> Self {
        Self {
            blank: blank.into(),
            cross: cross.into(),
            nought: nought.into(),
        }
    }

    /// Loads all three symbols concurrently.
    ///
    /// Fails on the first symbol that cannot be loaded; there is no partial
    /// registry.
    #[instrument(skip(loader))]
    pub async fn load(loader: &dyn SymbolLoader) -> Result<Self, AssetError> {
        let (blank, cross, nought) = tokio::try_join!(
            load_one(loader, Marker::Blank),
            load_one(loader, Marker::Cross),
            load_one(loader, Marker::Nought),
        )?;
        info!("All symbols loaded");
        Ok(Self {
            blank,
            cross,
            nought,
        })
    }

    /// Display payload for a marker.
    pub fn payload(&self, marker: Marker) -> &str {
        match marker {
            Marker::Blank => &self.blank,
            Marker::Cross => &self.cross,
            Marker::Nought => &self.nought,
        }
    }
}

async fn load_one(loader: &dyn SymbolLoader, marker: Marker) -> Result<String, AssetError> {
    loader.load(marker.name()).await.inspect_err(|e| {
        error!(symbol = marker.name(), error = %e, "Error loading symbol");
    })
}

/// Retrieves the display payload for a marker name from storage.
#[async_trait]
pub trait SymbolLoader: Send + Sync {
    /// Loads the payload for `name` ("blank", "cross" or "nought").
    async fn load(&self, name: &str) -> Result<String, AssetError>;
}

/// Loads symbols from `<dir>/<name>.txt`.
#[derive(Debug, Clone, derive_new::new)]
pub struct FileSymbolLoader {
    dir: PathBuf,
}

impl FileSymbolLoader {
    /// Path of the asset file for a marker name.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.txt"))
    }
}

#[async_trait]
impl SymbolLoader for FileSymbolLoader {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    async fn load(&self, name: &str) -> Result<String, AssetError> {
        let path = self.path_for(name);
        debug!(path = %path.display(), "Loading symbol");
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            AssetError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;
        if content.trim().is_empty() {
            return Err(AssetError::new(format!("Symbol file {} is empty", path.display())));
        }
        Ok(content)
    }
}
