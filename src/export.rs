//! Fixed dataset artifacts for download.
//!
//! Three pre-existing files ship with the application: the tabular export
//! and two scientific container formats. They are embedded byte-for-byte
//! and written out verbatim on request; nothing is regenerated or
//! transformed client-side.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The downloadable artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Dataset {
    /// Tabular export, one row per track point.
    Csv,

    /// NetCDF container.
    #[value(name = "netcdf")]
    NetCdf,

    /// HDF5 container.
    #[value(name = "hdf5")]
    Hdf5,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Csv, Dataset::NetCdf, Dataset::Hdf5];

    /// Fixed output filename of this artifact.
    pub fn filename(self) -> &'static str {
        match self {
            Dataset::Csv => "itcc_tracks.csv",
            Dataset::NetCdf => "itcc_tracks.nc",
            Dataset::Hdf5 => "itcc_tracks.h5",
        }
    }

    /// The shipped bytes, exactly as bundled.
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Dataset::Csv => include_bytes!("../assets/itcc_tracks.csv"),
            Dataset::NetCdf => include_bytes!("../assets/itcc_tracks.nc"),
            Dataset::Hdf5 => include_bytes!("../assets/itcc_tracks.h5"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dataset::Csv => "CSV",
            Dataset::NetCdf => "NetCDF",
            Dataset::Hdf5 => "HDF5",
        }
    }

    /// Write the artifact into `dir` under its fixed filename.
    pub fn save_to(self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(self.filename());
        std::fs::write(&path, self.bytes()).map_err(|e| ExportError::Write {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }
}
