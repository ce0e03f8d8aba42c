//! # Splitter drag controller
//!
//! Turns a pointer drag on one of the splitter handles into live updates of
//! the split ratios.
//!
//! ```text
//! Idle --begin(axis, bounds)--> Dragging --drag_to(x, y)--> Dragging
//!   ^                              |
//!   +------------end()-------------+
//! ```
//!
//! The container bounds are captured when the gesture begins and reused for
//! every move, so a reflow during the gesture is only picked up by the next
//! one. While four panels are visible, a move that leaves one quadrant with
//! at least [`MAXIMIZE_THRESHOLD`] of the area collapses the grid to that
//! panel. The grid never expands back on its own.

use crate::geometry::Bounds;
use crate::layout::LayoutState;
use crate::model::{PanelId, SplitRatio};
use tracing::{debug, info};

/// Share of the grid a quadrant must reach to maximize its panel.
pub const MAXIMIZE_THRESHOLD: f64 = 0.95;

/// Which split a handle moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragAxis {
    /// Column divider: moves `cols`
    Vertical,
    /// Row divider: moves `rows`
    Horizontal,
    /// Corner handle: moves both
    Both,
}

impl DragAxis {
    /// Whether dragging along this axis changes the column split.
    pub fn moves_cols(&self) -> bool {
        matches!(self, DragAxis::Vertical | DragAxis::Both)
    }

    /// Whether dragging along this axis changes the row split.
    pub fn moves_rows(&self) -> bool {
        matches!(self, DragAxis::Horizontal | DragAxis::Both)
    }
}

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { axis: DragAxis, bounds: Bounds },
}

/// Effect of one pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// No gesture in progress
    Ignored,
    /// Split ratios updated
    Resized,
    /// Split ratios updated and the grid collapsed to this panel
    Maximized(PanelId),
}

/// Drives split ratio updates from a drag gesture.
///
/// # Example
///
/// ```rust
/// use tripboard_core::drag::{DragAxis, DragController, DragOutcome};
/// use tripboard_core::geometry::Bounds;
/// use tripboard_core::layout::LayoutState;
///
/// let mut state = LayoutState::detached();
/// let mut drag = DragController::new();
///
/// drag.begin(DragAxis::Vertical, Bounds::new(0.0, 0.0, 1000.0, 800.0));
/// assert_eq!(drag.drag_to(&mut state, 250.0, 400.0), DragOutcome::Resized);
/// drag.end();
///
/// assert_eq!(state.cols().leading(), 0.25);
/// assert!(!drag.is_dragging());
/// ```
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture state.
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Axis of the gesture in progress.
    pub fn axis(&self) -> Option<DragAxis> {
        match self.state {
            DragState::Dragging { axis, .. } => Some(axis),
            DragState::Idle => None,
        }
    }

    /// Start a gesture on `axis` inside a container measured as `bounds`.
    ///
    /// Replaces any gesture already in progress.
    pub fn begin(&mut self, axis: DragAxis, bounds: Bounds) {
        debug!("Drag started on {:?} splitter", axis);
        self.state = DragState::Dragging { axis, bounds };
    }

    /// Apply a pointer move at container coordinates `(x, y)`.
    pub fn drag_to(&mut self, layout: &mut LayoutState, x: f64, y: f64) -> DragOutcome {
        let DragState::Dragging { axis, bounds } = self.state else {
            return DragOutcome::Ignored;
        };

        let (fx, fy) = bounds.fraction_of(x, y);
        let mut cols = layout.cols();
        let mut rows = layout.rows();

        // NaN only comes from a zero-sized container; keep that axis as is.
        if axis.moves_cols() && !fx.is_nan() {
            cols = SplitRatio::from_leading(fx);
        }
        if axis.moves_rows() && !fy.is_nan() {
            rows = SplitRatio::from_leading(fy);
        }

        let quad_grid = layout.visible_panels().len() == 4;
        layout.set_splits(cols, rows);

        if !quad_grid {
            return DragOutcome::Resized;
        }

        match dominant_quadrant(&quadrant_areas(cols, rows)) {
            Some(index) => {
                let id = layout
                    .panels()
                    .get(index)
                    .map(|panel| panel.id)
                    .unwrap_or_else(|| PanelId::try_from(index + 1).unwrap_or(PanelId::MAX));
                info!("Quadrant {} dominates the grid, maximizing panel {}", index, id);
                layout.set_visible_ids(vec![id]);
                DragOutcome::Maximized(id)
            }
            None => DragOutcome::Resized,
        }
    }

    /// Finish the gesture.
    pub fn end(&mut self) {
        if self.is_dragging() {
            debug!("Drag ended");
        }
        self.state = DragState::Idle;
    }
}

/// Areas of the top-left, top-right, bottom-left and bottom-right quadrants
/// as fractions of the whole grid.
pub fn quadrant_areas(cols: SplitRatio, rows: SplitRatio) -> [f64; 4] {
    [
        cols.leading() * rows.leading(),
        cols.trailing() * rows.leading(),
        cols.leading() * rows.trailing(),
        cols.trailing() * rows.trailing(),
    ]
}

/// Index of the largest area if it reaches [`MAXIMIZE_THRESHOLD`]; the first
/// one wins a tie.
pub fn dominant_quadrant(areas: &[f64; 4]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, area) in areas.iter().copied().enumerate() {
        if best.map_or(true, |(_, max)| area > max) {
            best = Some((index, area));
        }
    }
    best.filter(|(_, area)| *area >= MAXIMIZE_THRESHOLD)
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Panel, RATIO_MAX, RATIO_MIN};
    use crate::store::LayoutStore;

    fn container() -> Bounds {
        Bounds::new(0.0, 0.0, 1000.0, 1000.0)
    }

    fn assert_ratio_invariant(ratio: SplitRatio) {
        assert!((ratio.leading() + ratio.trailing() - 1.0).abs() < 1e-12);
        assert!(ratio.leading() >= RATIO_MIN && ratio.leading() <= RATIO_MAX);
        assert!(ratio.trailing() >= RATIO_MIN - 1e-12 && ratio.trailing() <= RATIO_MAX + 1e-12);
    }

    #[test]
    fn test_idle_moves_are_ignored() {
        let mut state = LayoutState::detached();
        let mut drag = DragController::new();

        assert_eq!(drag.drag_to(&mut state, 10.0, 10.0), DragOutcome::Ignored);
        assert_eq!(state.cols(), SplitRatio::EVEN);
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn test_axis_selects_split() {
        let mut state = LayoutState::detached();
        let mut drag = DragController::new();

        drag.begin(DragAxis::Horizontal, container());
        drag.drag_to(&mut state, 100.0, 300.0);
        assert_eq!(state.cols(), SplitRatio::EVEN);
        assert_eq!(state.rows().leading(), 0.3);

        drag.begin(DragAxis::Vertical, container());
        drag.drag_to(&mut state, 600.0, 900.0);
        assert_eq!(state.cols().leading(), 0.6);
        assert_eq!(state.rows().leading(), 0.3);

        drag.begin(DragAxis::Both, container());
        drag.drag_to(&mut state, 400.0, 700.0);
        assert_eq!(state.cols().leading(), 0.4);
        assert_eq!(state.rows().leading(), 0.7);
    }

    #[test]
    fn test_ratio_invariant_holds_for_any_sequence() {
        let mut state = LayoutState::detached();
        state.set_visible_ids(vec![1, 2, 3]);
        let mut drag = DragController::new();
        drag.begin(DragAxis::Both, Bounds::new(50.0, 30.0, 800.0, 600.0));

        let moves = [
            (-500.0, -20.0),
            (0.0, 0.0),
            (51.0, 31.0),
            (333.3, 444.4),
            (849.0, 629.0),
            (5000.0, 9000.0),
            (f64::INFINITY, f64::NEG_INFINITY),
        ];
        for (x, y) in moves {
            drag.drag_to(&mut state, x, y);
            assert_ratio_invariant(state.cols());
            assert_ratio_invariant(state.rows());
        }
    }

    #[test]
    fn test_zero_sized_container_keeps_ratios() {
        let mut state = LayoutState::detached();
        let mut drag = DragController::new();
        drag.begin(DragAxis::Both, Bounds::new(10.0, 10.0, 0.0, 0.0));

        drag.drag_to(&mut state, 10.0, 10.0);
        assert_eq!(state.cols(), SplitRatio::EVEN);
        assert_eq!(state.rows(), SplitRatio::EVEN);

        drag.drag_to(&mut state, 30.0, 0.0);
        assert_eq!(state.cols().leading(), RATIO_MAX);
        assert_eq!(state.rows().leading(), RATIO_MIN);
    }

    #[test]
    fn test_auto_maximize_boundary() {
        let mut state = LayoutState::detached();
        let mut drag = DragController::new();

        drag.begin(DragAxis::Vertical, container());
        assert_eq!(drag.drag_to(&mut state, 970.0, 0.0), DragOutcome::Resized);
        assert_eq!(state.visible_panels().len(), 4);
        assert_eq!(state.cols().leading(), 0.97);
        drag.end();

        drag.begin(DragAxis::Both, container());
        let outcome = drag.drag_to(&mut state, 980.0, 980.0);
        let first = state.panels()[0].id;
        assert_eq!(outcome, DragOutcome::Maximized(first));
        assert_eq!(state.visible_panels(), &[first]);
    }

    #[test]
    fn test_maximize_picks_quadrant_by_roster_index() {
        let mut state = LayoutState::detached();
        // Visible order differs from roster order; the roster decides.
        state.set_visible_ids(vec![4, 3, 2, 1]);
        let mut drag = DragController::new();

        drag.begin(DragAxis::Both, container());
        let outcome = drag.drag_to(&mut state, 20.0, 20.0);
        assert_eq!(outcome, DragOutcome::Maximized(4));
        assert_eq!(state.visible_panels(), &[4]);
    }

    #[test]
    fn test_maximize_falls_back_to_index_past_roster() {
        let mut layout = crate::Layout::default();
        layout.panels = vec![Panel::new(10, None)];
        layout.visible_panels = vec![10, 11, 12, 13];
        let mut storage = crate::storage::MemoryStorage::new();
        crate::storage::KeyValueStorage::set(
            &mut storage,
            "slot",
            &crate::schema::encode(&layout).unwrap(),
        )
        .unwrap();

        let mut state = LayoutState::new(LayoutStore::new(storage, "slot"));
        let mut drag = DragController::new();
        drag.begin(DragAxis::Both, container());

        // Bottom-left quadrant is index 2, past the single-entry roster.
        assert_eq!(drag.drag_to(&mut state, 980.0, 20.0), DragOutcome::Maximized(3));
    }

    #[test]
    fn test_no_maximize_below_four_panels() {
        let mut state = LayoutState::detached();
        state.toggle_visibility(4);
        let mut drag = DragController::new();

        drag.begin(DragAxis::Both, container());
        assert_eq!(drag.drag_to(&mut state, 980.0, 980.0), DragOutcome::Resized);
        assert_eq!(state.visible_panels(), &[1, 2, 3]);
    }

    #[test]
    fn test_end_returns_to_idle() {
        let mut state = LayoutState::detached();
        let mut drag = DragController::new();

        drag.begin(DragAxis::Horizontal, container());
        assert_eq!(drag.axis(), Some(DragAxis::Horizontal));
        drag.end();
        assert_eq!(drag.axis(), None);
        assert_eq!(drag.drag_to(&mut state, 100.0, 100.0), DragOutcome::Ignored);
    }

    #[test]
    fn test_quadrant_areas() {
        let areas = quadrant_areas(SplitRatio([0.97, 0.03]), SplitRatio::EVEN);
        assert_eq!(dominant_quadrant(&areas), None);

        let areas = quadrant_areas(SplitRatio([0.98, 0.02]), SplitRatio([0.98, 0.02]));
        assert!((areas[0] - 0.9604).abs() < 1e-12);
        assert_eq!(dominant_quadrant(&areas), Some(0));

        assert_eq!(dominant_quadrant(&[0.96, 0.96, 0.0, 0.0]), Some(0));
        assert_eq!(dominant_quadrant(&[0.0, 0.01, 0.0, 0.99]), Some(3));
    }
}
