//! Pure view-state helpers shared by the TUI and CLI.
//!
//! Everything in this module is side-effect free: pagination, selection,
//! per-track aggregation, and timestamp formatting are all plain functions
//! over borrowed data. The owning view holds the only mutable state.

pub mod aggregate;
pub mod page;
pub mod selection;
pub mod timefmt;

pub use aggregate::{summarize, LatLonBounds, TrackAggregates};
pub use page::{page_window, paginate, Page, PageState};
pub use selection::Selection;
pub use timefmt::format_timestamp;
