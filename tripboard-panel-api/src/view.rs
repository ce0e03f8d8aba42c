//! Rendering contract for panel content.
//!
//! Content views are self-contained: they receive no layout information
//! beyond the [`Ui`] of the panel body they are mounted in, and they manage
//! their own state.

use crate::{ContentKind, Result};
use egui::Ui;

/// Trait for types that render the body of a dashboard panel.
///
/// # Example
///
/// ```rust
/// use tripboard_panel_api::{ContentKind, ContentView};
/// use egui::Ui;
///
/// struct Notes {
///     text: String,
/// }
///
/// impl ContentView for Notes {
///     fn kind(&self) -> ContentKind {
///         ContentKind::Travel
///     }
///
///     fn render(&mut self, ui: &mut Ui) {
///         ui.text_edit_multiline(&mut self.text);
///     }
/// }
///
/// let notes = Notes { text: String::new() };
/// assert_eq!(notes.title(), "Travel");
/// ```
pub trait ContentView: Send + Sync {
    /// The content kind this view renders.
    fn kind(&self) -> ContentKind;

    /// Title shown in the panel header.
    fn title(&self) -> &str {
        self.kind().display_name()
    }

    /// Icon shown next to the title.
    fn icon(&self) -> &str {
        self.kind().icon()
    }

    /// Update the view state.
    ///
    /// Called once per frame before rendering, whether or not the hosting
    /// panel is visible.
    fn update(&mut self) -> Result<()> {
        Ok(())
    }

    /// Render the view into the panel body.
    fn render(&mut self, ui: &mut Ui);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestView {
        frames: usize,
    }

    impl ContentView for TestView {
        fn kind(&self) -> ContentKind {
            ContentKind::Map
        }

        fn update(&mut self) -> Result<()> {
            self.frames += 1;
            Ok(())
        }

        fn render(&mut self, ui: &mut Ui) {
            ui.label(format!("frames: {}", self.frames));
        }
    }

    #[test]
    fn test_view_defaults_follow_kind() {
        let view = TestView { frames: 0 };
        assert_eq!(view.title(), "Map");
        assert_eq!(view.icon(), ContentKind::Map.icon());
    }

    #[test]
    fn test_view_update() {
        let mut view = TestView { frames: 0 };
        view.update().unwrap();
        view.update().unwrap();
        assert_eq!(view.frames, 2);
    }
}
