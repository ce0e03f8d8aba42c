//! # Layout data model
//!
//! Plain data describing the dashboard: the panel roster, which panels are
//! visible and in what order, which one is focused, and how the grid is
//! split along each axis. Behavior lives in [`crate::layout`],
//! [`crate::geometry`] and [`crate::drag`]; this module only holds values and
//! their defaults.

use serde::{Deserialize, Serialize};
use tripboard_panel_api::ContentKind;

/// Stable identity of a panel within the roster.
pub type PanelId = u32;

/// Smallest fraction either side of a split may take during interactive edits.
pub const RATIO_MIN: f64 = 0.02;

/// Largest fraction either side of a split may take during interactive edits.
pub const RATIO_MAX: f64 = 0.98;

/// Focus the layout falls back to when the active panel is closed.
pub const DEFAULT_ACTIVE_PANEL_ID: PanelId = 1;

/// One addressable content slot of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Stable identifier, unique within the roster
    pub id: PanelId,
    /// Free-form address kept for forward compatibility
    pub url: String,
    /// Content rendered in the panel body, if any
    #[serde(rename = "panelType")]
    pub content: Option<ContentKind>,
}

impl Panel {
    /// Create a panel hosting `content`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard_core::Panel;
    /// use tripboard_panel_api::ContentKind;
    ///
    /// let panel = Panel::new(3, Some(ContentKind::Weather));
    /// assert_eq!(panel.id, 3);
    /// assert!(panel.url.is_empty());
    /// ```
    pub fn new(id: PanelId, content: Option<ContentKind>) -> Self {
        Self {
            id,
            url: String::new(),
            content,
        }
    }

    /// Header label of the panel.
    pub fn title(&self) -> String {
        match self.content {
            Some(kind) => format!("Panel {} · {}", self.id, kind.display_name()),
            None => format!("Panel {}", self.id),
        }
    }
}

/// Two fractions `[leading, trailing]` dividing one axis of the grid.
///
/// Serialized as a two-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitRatio(pub [f64; 2]);

impl SplitRatio {
    /// The even split `[0.5, 0.5]`.
    pub const EVEN: SplitRatio = SplitRatio([0.5, 0.5]);

    /// Build a ratio from its leading fraction, clamped to
    /// [`RATIO_MIN`]..=[`RATIO_MAX`]; the trailing side takes the remainder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard_core::SplitRatio;
    ///
    /// let ratio = SplitRatio::from_leading(1.4);
    /// assert_eq!(ratio.leading(), 0.98);
    /// assert!((ratio.trailing() - 0.02).abs() < 1e-12);
    /// ```
    pub fn from_leading(leading: f64) -> Self {
        let leading = leading.clamp(RATIO_MIN, RATIO_MAX);
        SplitRatio([leading, 1.0 - leading])
    }

    /// Fraction taken by the left column or top row.
    pub fn leading(&self) -> f64 {
        self.0[0]
    }

    /// Fraction taken by the right column or bottom row.
    pub fn trailing(&self) -> f64 {
        self.0[1]
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self::EVEN
    }
}

/// Whether one panel is focused or the grid shows everything evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    /// No panel is exclusively active
    All,
    /// One panel carries the focus
    Single,
}

/// The complete, persisted description of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Roster in identity order
    pub panels: Vec<Panel>,
    /// Ids currently shown; order decides grid placement
    pub visible_panels: Vec<PanelId>,
    /// Focused panel, `None` meaning no exclusive focus
    pub active_panel_id: Option<PanelId>,
    /// Horizontal split
    pub cols: SplitRatio,
    /// Vertical split
    pub rows: SplitRatio,
}

impl Layout {
    /// The roster shipped with the dashboard: travel, calendar, weather, map.
    pub fn default_panels() -> Vec<Panel> {
        ContentKind::all()
            .into_iter()
            .zip(1..)
            .map(|(kind, id)| Panel::new(id, Some(kind)))
            .collect()
    }

    /// Get a panel by id.
    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.id == id)
    }

    /// Get a mutable panel by id.
    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|panel| panel.id == id)
    }

    /// Whether `id` is part of the roster.
    pub fn has_panel(&self, id: PanelId) -> bool {
        self.panel(id).is_some()
    }

    /// Whether `id` is currently shown.
    pub fn is_visible(&self, id: PanelId) -> bool {
        self.visible_panels.contains(&id)
    }

    /// Derived focus mode.
    pub fn mode(&self) -> PanelMode {
        match self.active_panel_id {
            Some(_) => PanelMode::Single,
            None => PanelMode::All,
        }
    }

    /// Visible panels in placement order, skipping ids missing from the roster.
    pub fn visible(&self) -> impl Iterator<Item = &Panel> {
        self.visible_panels.iter().filter_map(|id| self.panel(*id))
    }
}

impl Default for Layout {
    fn default() -> Self {
        let panels = Self::default_panels();
        let visible_panels = panels.iter().map(|panel| panel.id).collect();
        Self {
            panels,
            visible_panels,
            active_panel_id: Some(DEFAULT_ACTIVE_PANEL_ID),
            cols: SplitRatio::EVEN,
            rows: SplitRatio::EVEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = Layout::default();
        assert_eq!(layout.panels.len(), 4);
        assert_eq!(layout.visible_panels, vec![1, 2, 3, 4]);
        assert_eq!(layout.active_panel_id, Some(1));
        assert_eq!(layout.cols, SplitRatio([0.5, 0.5]));
        assert_eq!(layout.rows, SplitRatio([0.5, 0.5]));

        let kinds: Vec<_> = layout.panels.iter().map(|p| p.content).collect();
        assert_eq!(
            kinds,
            vec![
                Some(ContentKind::Travel),
                Some(ContentKind::Calendar),
                Some(ContentKind::Weather),
                Some(ContentKind::Map),
            ]
        );
    }

    #[test]
    fn test_split_ratio_clamping() {
        assert_eq!(SplitRatio::from_leading(-3.0).leading(), RATIO_MIN);
        assert_eq!(SplitRatio::from_leading(0.98).leading(), 0.98);
        assert_eq!(SplitRatio::from_leading(f64::INFINITY).leading(), RATIO_MAX);

        let ratio = SplitRatio::from_leading(0.3);
        assert!((ratio.leading() + ratio.trailing() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_split_ratio_serializes_as_array() {
        let json = serde_json::to_string(&SplitRatio([0.25, 0.75])).unwrap();
        assert_eq!(json, "[0.25,0.75]");
    }

    #[test]
    fn test_panel_serializes_content_as_panel_type() {
        let json = serde_json::to_value(Panel::new(2, Some(ContentKind::Calendar))).unwrap();
        assert_eq!(json["panelType"], "calendar");
        assert_eq!(json["id"], 2);
        assert_eq!(json["url"], "");

        let unset = serde_json::to_value(Panel::new(5, None)).unwrap();
        assert!(unset["panelType"].is_null());
    }

    #[test]
    fn test_mode_follows_active_panel() {
        let mut layout = Layout::default();
        assert_eq!(layout.mode(), PanelMode::Single);
        layout.active_panel_id = None;
        assert_eq!(layout.mode(), PanelMode::All);
    }

    #[test]
    fn test_visible_skips_unknown_ids() {
        let mut layout = Layout::default();
        layout.visible_panels = vec![3, 9, 1];
        let ids: Vec<_> = layout.visible().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_panel_title() {
        assert_eq!(Panel::new(2, Some(ContentKind::Calendar)).title(), "Panel 2 · Calendar");
        assert_eq!(Panel::new(4, None).title(), "Panel 4");
    }
}
