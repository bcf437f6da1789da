use egui::{Pos2, Rect, Vec2};

/// Column/row packing of a day sequence into a rectangular surface.
///
/// Coordinates are relative to the surface's top-left corner. One geometry
/// is computed per frame and shared by painting and hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub columns: usize,
    pub rows: usize,
    /// Side length of one square cell, gap included.
    pub cell_size: f32,
    /// Empty border kept around the grid on every side.
    pub padding: f32,
}

impl GridGeometry {
    /// Geometry with no cells; nothing is painted and nothing can be hit.
    pub fn empty(padding: f32) -> Self {
        Self {
            columns: 0,
            rows: 0,
            cell_size: 0.0,
            padding,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0 || self.cell_size <= 0.0
    }

    /// Full cell rectangle (gap included) for a day index.
    pub fn cell_bounds(&self, index: usize) -> Rect {
        if self.columns == 0 {
            return Rect::NOTHING;
        }
        let col = (index % self.columns) as f32;
        let row = (index / self.columns) as f32;
        Rect::from_min_size(
            Pos2::new(
                self.padding + col * self.cell_size,
                self.padding + row * self.cell_size,
            ),
            Vec2::splat(self.cell_size),
        )
    }

    /// Painted interior of a cell: the bounds shrunk by `gap` on every side.
    ///
    /// When two gaps would swallow the whole cell, the gap drops to a quarter
    /// of the cell so the day stays visible.
    pub fn cell_interior(&self, index: usize, gap: f32) -> Rect {
        let gap = gap.max(0.0);
        let gap = if self.cell_size <= 2.0 * gap {
            self.cell_size * 0.25
        } else {
            gap
        };
        self.cell_bounds(index).shrink(gap)
    }

    /// Map a surface-relative point back to the day index under it.
    pub fn resolve_day_at(&self, x: f32, y: f32, day_count: usize) -> Option<usize> {
        resolve_day_at(x, y, self, day_count)
    }
}

/// Choose columns, rows and cell size so `day_count` square cells fill a
/// `width` x `height` surface with the given padding.
///
/// The column count follows the usable aspect ratio:
/// `C = ceil(sqrt(n * w / h))`, `R = ceil(n / C)`, `cell = min(w / C, h / R)`.
/// Empty sequences and surfaces narrower than one pixel after padding give
/// [`GridGeometry::empty`].
pub fn compute_geometry(day_count: usize, width: f32, height: f32, padding: f32) -> GridGeometry {
    let padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
    let usable_w = (width - 2.0 * padding) as f64;
    let usable_h = (height - 2.0 * padding) as f64;

    if day_count == 0 || !(usable_w >= 1.0) || !(usable_h >= 1.0) {
        return GridGeometry::empty(padding);
    }

    let n = day_count as f64;
    let columns = ((n * usable_w / usable_h).sqrt().ceil() as usize).clamp(1, day_count);
    let rows = day_count.div_ceil(columns);
    let cell_size = (usable_w / columns as f64).min(usable_h / rows as f64);

    GridGeometry {
        columns,
        rows,
        cell_size: cell_size as f32,
        padding,
    }
}

/// Inverse of the grid layout: which day index is drawn at `(x, y)`.
///
/// Returns `None` in the padding, right of the last column, below the last
/// row, and in the unused tail of the last row.
pub fn resolve_day_at(x: f32, y: f32, geometry: &GridGeometry, day_count: usize) -> Option<usize> {
    if geometry.is_empty() || day_count == 0 {
        return None;
    }
    let fx = (x - geometry.padding) / geometry.cell_size;
    let fy = (y - geometry.padding) / geometry.cell_size;
    if !(fx >= 0.0) || !(fy >= 0.0) {
        return None;
    }
    let col = fx.floor() as usize;
    let row = fy.floor() as usize;
    if col >= geometry.columns {
        return None;
    }
    let index = row.checked_mul(geometry.columns)?.checked_add(col)?;
    (index < day_count).then_some(index)
}
