//! # tccview
//!
//! A showcase-quality TUI for browsing Indian Tropical Cloud Cluster
//! (ITCC) tracking records.
//!
//! ## Overview
//!
//! tccview presents pre-computed tropical-cyclone tracking data in a
//! terminal dashboard: a paginated, basin-filterable track list and a
//! per-track point table with a side-by-side image comparison view. All
//! records are static and bundled; there is no network I/O.
//!
//! ## Modules
//!
//! - [`data`] — static track repository and canonical record shapes
//! - [`browse`] — pure pagination, selection, aggregation, timestamps
//! - [`tui`] — terminal user interface
//! - [`cli`] — command-line interface commands
//! - [`config`] — configuration loading and validation
//! - [`export`] — fixed dataset artifacts for download

pub mod browse;
pub mod cli;
pub mod config;
pub mod data;
pub mod export;
pub mod i18n;
pub mod logging;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use data::TrackRepository;
