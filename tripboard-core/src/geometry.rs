//! # Grid geometry
//!
//! Maps the number of visible panels and the two split ratios to a grid: the
//! column and row track templates, the cell each visible panel occupies, and
//! which splitter handles are offered. Everything here is a pure function of
//! its inputs.
//!
//! | visible | columns | rows | cells |
//! |---------|---------|------|-------|
//! | 0 | `1fr` | `1fr` | none |
//! | 1 | `1fr` | `1fr` | whole area |
//! | 2 | `cols` | `1fr` | left, right |
//! | 3 | `cols` | `rows` | top-left, top-right, bottom spanning both |
//! | 4+ | `cols` | `rows` | top-left, top-right, bottom-left, bottom-right |
//!
//! Cells are handed out in the order of the visible list, so the first
//! visible panel always lands top-left.

use crate::drag::DragAxis;
use crate::model::SplitRatio;
use std::ops::Range;

/// Axis-aligned rectangle in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Position of `(x, y)` as fractions of the width and height.
    ///
    /// A zero-sized rectangle yields non-finite fractions.
    pub fn fraction_of(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.left) / self.width, (y - self.top) / self.height)
    }
}

/// Size of one grid track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Track {
    /// Takes whatever space the percentage tracks leave (`1fr`)
    Fill,
    /// Fixed share of the container, stored as a fraction
    Percent(f64),
}

impl Track {
    /// CSS track size, e.g. `1fr` or `50%`.
    pub fn css(&self) -> String {
        match self {
            Track::Fill => "1fr".to_string(),
            Track::Percent(fraction) => format!("{}%", fraction * 100.0),
        }
    }
}

/// The tracks a placement spans, as 0-based half-open ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridArea {
    pub column: Range<usize>,
    pub row: Range<usize>,
}

impl GridArea {
    fn new(column: Range<usize>, row: Range<usize>) -> Self {
        Self { column, row }
    }

    /// CSS `grid-column` value using 1-based grid lines, e.g. `1 / 3`.
    pub fn column_css(&self) -> String {
        format!("{} / {}", self.column.start + 1, self.column.end + 1)
    }

    /// CSS `grid-row` value using 1-based grid lines.
    pub fn row_css(&self) -> String {
        format!("{} / {}", self.row.start + 1, self.row.end + 1)
    }
}

/// Which splitter handles the grid offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Splitters {
    /// Column divider, dragged horizontally
    pub vertical: bool,
    /// Row divider, dragged vertically
    pub horizontal: bool,
    /// Intersection of both dividers; only offered for a true 2x2 grid
    pub corner: bool,
}

/// Hit area of one splitter handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitterHandle {
    pub axis: DragAxis,
    pub rect: Bounds,
}

/// Grid derived from the visible count and split ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    pub column_template: Vec<Track>,
    pub row_template: Vec<Track>,
    pub placements: Vec<GridArea>,
    pub splitters: Splitters,
    pub cols: SplitRatio,
    pub rows: SplitRatio,
}

/// Compute the grid for `visible_count` panels.
///
/// # Example
///
/// ```rust
/// use tripboard_core::geometry::compute_geometry;
/// use tripboard_core::SplitRatio;
///
/// let grid = compute_geometry(3, SplitRatio([0.25, 0.75]), SplitRatio::EVEN);
/// assert_eq!(grid.column_template_css(), "25% 75%");
/// assert_eq!(grid.placements.len(), 3);
/// assert_eq!(grid.placements[2].column_css(), "1 / 3");
/// assert!(grid.splitters.horizontal && !grid.splitters.corner);
/// ```
pub fn compute_geometry(visible_count: usize, cols: SplitRatio, rows: SplitRatio) -> GridGeometry {
    let split_columns = vec![Track::Percent(cols.leading()), Track::Percent(cols.trailing())];
    let split_rows = vec![Track::Percent(rows.leading()), Track::Percent(rows.trailing())];

    let (column_template, row_template, placements) = match visible_count {
        0 => (vec![Track::Fill], vec![Track::Fill], Vec::new()),
        1 => (
            vec![Track::Fill],
            vec![Track::Fill],
            vec![GridArea::new(0..1, 0..1)],
        ),
        2 => (
            split_columns,
            vec![Track::Fill],
            vec![GridArea::new(0..1, 0..1), GridArea::new(1..2, 0..1)],
        ),
        3 => (
            split_columns,
            split_rows,
            vec![
                GridArea::new(0..1, 0..1),
                GridArea::new(1..2, 0..1),
                GridArea::new(0..2, 1..2),
            ],
        ),
        _ => (
            split_columns,
            split_rows,
            vec![
                GridArea::new(0..1, 0..1),
                GridArea::new(1..2, 0..1),
                GridArea::new(0..1, 1..2),
                GridArea::new(1..2, 1..2),
            ],
        ),
    };

    let splitters = Splitters {
        vertical: visible_count >= 2,
        horizontal: visible_count >= 3,
        corner: visible_count >= 4,
    };

    GridGeometry {
        column_template,
        row_template,
        placements,
        splitters,
        cols,
        rows,
    }
}

impl GridGeometry {
    /// `grid-template-columns` value.
    pub fn column_template_css(&self) -> String {
        template_css(&self.column_template)
    }

    /// `grid-template-rows` value.
    pub fn row_template_css(&self) -> String {
        template_css(&self.row_template)
    }

    /// Absolute rectangle of every placement inside `bounds`, in placement order.
    pub fn resolve(&self, bounds: Bounds) -> Vec<Bounds> {
        let column_sizes = track_sizes(&self.column_template, bounds.width);
        let row_sizes = track_sizes(&self.row_template, bounds.height);

        self.placements
            .iter()
            .map(|area| {
                let left = bounds.left + column_sizes[..area.column.start].iter().sum::<f64>();
                let top = bounds.top + row_sizes[..area.row.start].iter().sum::<f64>();
                let width = column_sizes[area.column.clone()].iter().sum();
                let height = row_sizes[area.row.clone()].iter().sum();
                Bounds::new(left, top, width, height)
            })
            .collect()
    }

    /// Hit areas of the offered splitters inside `bounds`, in paint order
    /// (the corner handle last, so it wins where the dividers cross).
    pub fn handles(&self, bounds: Bounds, thickness: f64) -> Vec<SplitterHandle> {
        let x = bounds.left + self.cols.leading() * bounds.width;
        let y = bounds.top + self.rows.leading() * bounds.height;
        let half = thickness / 2.0;
        let mut handles = Vec::with_capacity(3);

        if self.splitters.vertical {
            handles.push(SplitterHandle {
                axis: DragAxis::Vertical,
                rect: Bounds::new(x - half, bounds.top, thickness, bounds.height),
            });
        }
        if self.splitters.horizontal {
            handles.push(SplitterHandle {
                axis: DragAxis::Horizontal,
                rect: Bounds::new(bounds.left, y - half, bounds.width, thickness),
            });
        }
        if self.splitters.corner {
            handles.push(SplitterHandle {
                axis: DragAxis::Both,
                rect: Bounds::new(x - thickness, y - thickness, thickness * 2.0, thickness * 2.0),
            });
        }

        handles
    }
}

fn template_css(tracks: &[Track]) -> String {
    tracks.iter().map(Track::css).collect::<Vec<_>>().join(" ")
}

fn track_sizes(tracks: &[Track], total: f64) -> Vec<f64> {
    let fixed: f64 = tracks
        .iter()
        .map(|track| match track {
            Track::Percent(fraction) => fraction * total,
            Track::Fill => 0.0,
        })
        .sum();
    let fills = tracks.iter().filter(|track| **track == Track::Fill).count();
    let fill_size = if fills == 0 {
        0.0
    } else {
        (total - fixed).max(0.0) / fills as f64
    };

    tracks
        .iter()
        .map(|track| match track {
            Track::Percent(fraction) => fraction * total,
            Track::Fill => fill_size,
        })
        .collect()
}
