//! # Layout state for Tripboard Core
//!
//! [`LayoutState`] owns the canonical [`Layout`] of the dashboard and is the
//! only writer of it. Every operation that changes the layout saves the full
//! layout through the injected [`LayoutPersistence`] once the change has been
//! applied, so the persisted copy always matches the last state shown.
//!
//! The persisted slot is read exactly once, on construction; changes made to
//! it afterwards by someone else are not observed.

use crate::model::{
    Layout, Panel, PanelId, PanelMode, SplitRatio, DEFAULT_ACTIVE_PANEL_ID,
};
use crate::store::{LayoutPersistence, LayoutStore};
use tracing::{debug, info};
use tripboard_panel_api::ContentKind;

/// Owner of the dashboard layout.
///
/// # Example
///
/// ```rust
/// use tripboard_core::layout::LayoutState;
/// use tripboard_core::store::LayoutStore;
///
/// let mut state = LayoutState::new(LayoutStore::detached());
/// state.toggle_visibility(2);
/// assert_eq!(state.visible_panels(), &[1, 3, 4]);
/// ```
pub struct LayoutState {
    /// Current layout
    layout: Layout,
    /// Where every change is written
    persistence: Box<dyn LayoutPersistence>,
}

impl LayoutState {
    /// Create the state from whatever `persistence` loads.
    pub fn new<P: LayoutPersistence + 'static>(persistence: P) -> Self {
        let layout = persistence.load();
        debug!(
            "Layout state initialized with {} panels, {} visible",
            layout.panels.len(),
            layout.visible_panels.len()
        );
        Self {
            layout,
            persistence: Box::new(persistence),
        }
    }

    /// State without persistence, starting from the default layout.
    pub fn detached() -> Self {
        Self::new(LayoutStore::detached())
    }

    /// Get the current layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Panel roster.
    pub fn panels(&self) -> &[Panel] {
        &self.layout.panels
    }

    /// Get a panel by id.
    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.layout.panel(id)
    }

    /// Visible ids in placement order.
    pub fn visible_panels(&self) -> &[PanelId] {
        &self.layout.visible_panels
    }

    /// Whether `id` is currently shown.
    pub fn is_visible(&self, id: PanelId) -> bool {
        self.layout.is_visible(id)
    }

    /// Focused panel.
    pub fn active_panel_id(&self) -> Option<PanelId> {
        self.layout.active_panel_id
    }

    /// Derived focus mode.
    pub fn mode(&self) -> PanelMode {
        self.layout.mode()
    }

    /// Horizontal split.
    pub fn cols(&self) -> SplitRatio {
        self.layout.cols
    }

    /// Vertical split.
    pub fn rows(&self) -> SplitRatio {
        self.layout.rows
    }

    /// Replace the url of panel `id`. Unknown ids are ignored.
    pub fn set_panel_url<S: Into<String>>(&mut self, id: PanelId, url: S) {
        let Some(panel) = self.layout.panel_mut(id) else {
            debug!("Ignoring url change for unknown panel {}", id);
            return;
        };
        panel.url = url.into();
        self.commit("panel url changed");
    }

    /// Replace the content kind of panel `id`. Unknown ids are ignored.
    pub fn set_panel_content(&mut self, id: PanelId, content: Option<ContentKind>) {
        let Some(panel) = self.layout.panel_mut(id) else {
            debug!("Ignoring content change for unknown panel {}", id);
            return;
        };
        panel.content = content;
        self.commit("panel content changed");
    }

    /// Show `id` if hidden, hide it if shown.
    ///
    /// Hiding the active panel moves the focus back to the default panel.
    /// Ids that are neither visible nor part of the roster are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard_core::layout::LayoutState;
    ///
    /// let mut state = LayoutState::detached();
    /// state.set_active(3);
    /// state.toggle_visibility(3);
    /// assert_eq!(state.active_panel_id(), Some(1));
    /// assert!(!state.is_visible(3));
    /// ```
    pub fn toggle_visibility(&mut self, id: PanelId) {
        if let Some(position) = self.layout.visible_panels.iter().position(|v| *v == id) {
            self.layout.visible_panels.remove(position);
            if self.layout.active_panel_id == Some(id) {
                self.layout.active_panel_id = Some(DEFAULT_ACTIVE_PANEL_ID);
            }
        } else if self.layout.has_panel(id) {
            self.layout.visible_panels.push(id);
        } else {
            debug!("Ignoring visibility toggle for unknown panel {}", id);
            return;
        }
        self.commit("visibility toggled");
    }

    /// Close button of a panel.
    pub fn close_panel(&mut self, id: PanelId) {
        self.toggle_visibility(id);
    }

    /// Focus `id`. No membership check is made.
    pub fn set_active(&mut self, id: PanelId) {
        self.layout.active_panel_id = Some(id);
        self.commit("active panel changed");
    }

    /// Replace the visible list as a whole.
    pub fn set_visible_ids(&mut self, ids: Vec<PanelId>) {
        self.layout.visible_panels = ids;
        self.commit("visible panels replaced");
    }

    /// Focus `id` and show it alone.
    pub fn show_only(&mut self, id: PanelId) {
        self.layout.active_panel_id = Some(id);
        self.layout.visible_panels = vec![id];
        self.commit("single panel shown");
    }

    /// Set the horizontal split.
    pub fn set_cols(&mut self, cols: SplitRatio) {
        self.layout.cols = cols;
        self.commit("columns resized");
    }

    /// Set the vertical split.
    pub fn set_rows(&mut self, rows: SplitRatio) {
        self.layout.rows = rows;
        self.commit("rows resized");
    }

    /// Set both splits in one update.
    pub fn set_splits(&mut self, cols: SplitRatio, rows: SplitRatio) {
        self.layout.cols = cols;
        self.layout.rows = rows;
        self.commit("grid resized");
    }

    /// Restore the default roster, visibility, focus and splits.
    pub fn reset_all(&mut self) {
        self.layout = Layout::default();
        info!("Layout reset to defaults");
        self.commit("layout reset");
    }

    fn commit(&mut self, reason: &str) {
        debug!(
            visible = ?self.layout.visible_panels,
            active = ?self.layout.active_panel_id,
            "Layout changed: {}",
            reason
        );
        self.persistence.save(&self.layout);
    }
}
