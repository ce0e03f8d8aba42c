//! # Tripboard Panel API
//!
//! This crate defines the contract between the dashboard grid and the content
//! that is mounted inside each panel. The grid only knows a closed set of
//! content kinds; every kind is rendered by a type implementing
//! [`ContentView`].
//!
//! ## Example
//!
//! ```rust
//! use tripboard_panel_api::{ContentKind, ContentView};
//! use egui::Ui;
//!
//! struct Forecast;
//!
//! impl ContentView for Forecast {
//!     fn kind(&self) -> ContentKind {
//!         ContentKind::Weather
//!     }
//!
//!     fn render(&mut self, ui: &mut Ui) {
//!         ui.label("Sunny, 24°C");
//!     }
//! }
//! ```

pub mod content;
pub mod view;

pub use content::ContentKind;
pub use view::ContentView;

/// Result type used throughout the panel API
pub type Result<T> = std::result::Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_serialization() {
        let json = serde_json::to_string(&ContentKind::Calendar).unwrap();
        assert_eq!(json, "\"calendar\"");

        let kind: ContentKind = serde_json::from_str("\"map\"").unwrap();
        assert_eq!(kind, ContentKind::Map);
    }

    #[test]
    fn test_unknown_content_kind_is_rejected() {
        let result: std::result::Result<ContentKind, _> = serde_json::from_str("\"news\"");
        assert!(result.is_err());
    }
}
