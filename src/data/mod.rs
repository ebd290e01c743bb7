//! The track repository: static, bundled, read-only.
//!
//! Records are loaded exactly once at startup, either from the dataset
//! embedded in the binary or from a file override, and never mutated.
//! Every view reads from the same repository by reference.

mod types;

pub use types::{Basin, Track, TrackPoint};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The dataset shipped inside the binary.
const EMBEDDED_DATASET: &str = include_str!("../../data/itcc_tracks.json");

/// Errors loading the track repository.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse track data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Track not found: {id}")]
    TrackNotFound { id: String },
}

#[derive(Debug, Deserialize)]
struct Dataset {
    tracks: Vec<Track>,
}

/// In-memory collection of all tracks.
#[derive(Debug, Clone)]
pub struct TrackRepository {
    tracks: Vec<Track>,
}

impl TrackRepository {
    /// Load the dataset embedded in the binary.
    pub fn embedded() -> Result<Self, DataError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    /// Load a dataset from a file path override.
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path).map_err(|e| DataError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Load either the override path or the embedded dataset.
    pub fn load(file: Option<&Path>) -> Result<Self, DataError> {
        let repo = match file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading track data from file");
                Self::from_path(path)?
            }
            None => Self::embedded()?,
        };
        tracing::info!(
            tracks = repo.len(),
            points = repo.tracks.iter().map(|t| t.track_points.len()).sum::<usize>(),
            "Track repository loaded"
        );
        Ok(repo)
    }

    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Ok(Self {
            tracks: dataset.tracks,
        })
    }

    /// Build a repository from already-constructed tracks.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// All tracks, in archive order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Look up a track by identifier.
    pub fn find(&self, track_id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.track_id == track_id)
    }

    /// Like [`find`](Self::find), but with a typed not-found error for the
    /// CLI path where an unknown ID must map to an exit code.
    pub fn get(&self, track_id: &str) -> Result<&Track, DataError> {
        self.find(track_id).ok_or_else(|| DataError::TrackNotFound {
            id: track_id.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_loads() {
        let repo = TrackRepository::embedded().unwrap();
        assert!(!repo.is_empty());
        for track in repo.tracks() {
            assert!(!track.track_id.is_empty());
            for point in &track.track_points {
                assert!(!point.image_filename.is_empty());
            }
        }
    }

    #[test]
    fn test_embedded_dataset_ids_are_unique() {
        let repo = TrackRepository::embedded().unwrap();
        let mut ids: Vec<&str> = repo.tracks().iter().map(|t| t.track_id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_embedded_dataset_unifies_field_variants() {
        // The bundled data deliberately mixes archive spellings; every
        // point must come out with canonical coordinates and an image.
        let repo = TrackRepository::embedded().unwrap();
        for track in repo.tracks() {
            for point in &track.track_points {
                assert!(point.centroid_lat.is_finite());
                assert!(point.centroid_lon.is_finite());
            }
        }
    }

    #[test]
    fn test_find_known_and_unknown() {
        let repo = TrackRepository::embedded().unwrap();
        let first = &repo.tracks()[0];
        assert!(repo.find(&first.track_id).is_some());
        assert!(repo.find("TCC_9999_XXX_000").is_none());
    }

    #[test]
    fn test_get_unknown_is_typed_not_found() {
        let repo = TrackRepository::embedded().unwrap();
        let err = repo.get("TCC_9999_XXX_000").unwrap_err();
        assert!(matches!(err, DataError::TrackNotFound { .. }));
        assert_eq!(err.to_string(), "Track not found: TCC_9999_XXX_000");
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = TrackRepository::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn test_from_json_empty_tracks() {
        let repo = TrackRepository::from_json(r#"{"tracks": []}"#).unwrap();
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);
    }
}
