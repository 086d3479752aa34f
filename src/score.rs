//! Score tallies and their on-disk snapshot.
//!
//! Every grid game keeps a running tally of wins per seat and draws. Tallies
//! are saved as one JSON object keyed by game id, rewritten whole after each
//! finished game.

use crate::error::{ArcadeError, Result};
use crate::player::{Outcome, Seat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Wins per seat plus draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub first: u32,
    pub second: u32,
    pub draws: u32,
}

impl ScoreTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Seat::First) => self.first += 1,
            Outcome::Win(Seat::Second) => self.second += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, seat: Seat) -> u32 {
        match seat {
            Seat::First => self.first,
            Seat::Second => self.second,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.first + self.second + self.draws
    }
}

/// Key-value store of tallies, optionally backed by a JSON file.
#[derive(Debug, Default)]
pub struct ScoreStore {
    path: Option<PathBuf>,
    tallies: BTreeMap<String, ScoreTally>,
}

impl ScoreStore {
    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the store at `path`. A missing file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tallies = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(ArcadeError::Io { path, source }),
        };
        debug!(path = %path.display(), games = tallies.len(), "loaded score store");
        Ok(Self {
            path: Some(path),
            tallies,
        })
    }

    /// Like [`ScoreStore::load`], but a corrupt or unreadable file is logged
    /// and replaced by an empty store that still saves to `path`.
    pub fn load_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::load(path.clone()).unwrap_or_else(|e| {
            warn!(error = %e, "starting with empty scores");
            Self {
                path: Some(path),
                tallies: BTreeMap::new(),
            }
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, game_id: &str) -> ScoreTally {
        self.tallies.get(game_id).copied().unwrap_or_default()
    }

    /// Stores the tally and writes the snapshot if the store is file-backed.
    pub fn put(&mut self, game_id: &str, tally: ScoreTally) -> Result<()> {
        self.tallies.insert(game_id.to_string(), tally);
        self.save()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScoreTally)> {
        self.tallies.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let io_err = |source| ArcadeError::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(&self.tallies)?;
        fs::write(path, text).map_err(io_err)?;
        debug!(path = %path.display(), "saved score store");
        Ok(())
    }
}
