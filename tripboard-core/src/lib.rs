//! # Tripboard Core
//!
//! Panel layout engine of the Tripboard travel dashboard. This crate owns the
//! layout of up to four content panels arranged on a resizable 2×2 grid:
//! which panels exist, which are shown, which one has focus, and how the
//! grid is split. It persists that layout across sessions and turns splitter
//! drags into ratio updates.
//!
//! ## Architecture
//!
//! - [`LayoutState`] is the single writer of the [`Layout`] and saves it
//!   through an injected [`LayoutPersistence`] after every change
//! - [`LayoutStore`] implements that persistence on top of a
//!   [`KeyValueStorage`](storage::KeyValueStorage) using the versioned
//!   [`schema`]
//! - [`compute_geometry`] derives the grid placement from the visible count
//!   and split ratios
//! - [`DragController`] maps splitter drags to split ratios and collapses
//!   the grid to one panel when a quadrant dominates
//!
//! ## Example
//!
//! ```rust
//! use tripboard_core::{compute_geometry, LayoutState, LayoutStore};
//! use tripboard_core::storage::MemoryStorage;
//!
//! let mut state = LayoutState::new(LayoutStore::new(MemoryStorage::new(), "layout"));
//! state.toggle_visibility(4);
//!
//! let geometry = compute_geometry(state.visible_panels().len(), state.cols(), state.rows());
//! assert_eq!(geometry.placements.len(), 3);
//! ```

pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod schema;
pub mod storage;
pub mod store;

pub use config::Config;
pub use drag::{DragAxis, DragController, DragOutcome};
pub use error::{Error, Result};
pub use geometry::{compute_geometry, Bounds, GridGeometry};
pub use layout::LayoutState;
pub use model::{Layout, Panel, PanelId, PanelMode, SplitRatio};
pub use store::{LayoutPersistence, LayoutStore, DEFAULT_LAYOUT_KEY};
pub use tripboard_panel_api::ContentKind;

/// Initialize tracing for the application.
///
/// Installs a formatting subscriber at `DEBUG` when `debug` is set and at
/// `INFO` otherwise. Does nothing if a global subscriber is already set.
/// `log` records are left alone so the binary can route them elsewhere.
///
/// # Example
///
/// ```rust
/// tripboard_core::init_tracing(false);
/// tracing::info!("Application started");
/// ```
pub fn init_tracing(debug: bool) {
    init_tracing_at(if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    });
}

/// Initialize tracing at an explicit maximum `level`.
pub fn init_tracing_at(level: tracing::Level) {
    let subscriber = tracing_subscriber::fmt().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
