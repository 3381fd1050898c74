//! Board geometry: pixel to cell conversion and boundary tests

use super::Cell;
use crate::core::config::GridConfig;
use crate::foundation::math::{Point2, Vec2};

/// Geometry provider for a game board
///
/// The cursor controller only needs these two queries; how the board is laid
/// out (square grid, hex map, isometric) is up to the implementor.
pub trait BoardGeometry {
    /// Convert a point in board pixel space to the cell containing it
    ///
    /// The result may lie outside the board; use [`boundary_contains`](Self::boundary_contains)
    /// to check.
    fn pixel_to_cell(&self, point: Point2) -> Cell;

    /// Whether the cell lies inside the board boundary
    fn boundary_contains(&self, cell: Cell) -> bool;
}

/// Rectangular grid of equally sized cells
///
/// Cell `(0, 0)` starts at `origin`; columns grow along +X and rows along +Y.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    origin: Vec2,
    cell_size: Vec2,
    columns: i32,
    rows: i32,
}

impl GridGeometry {
    /// Create a grid with its top-left corner at `origin`
    pub fn new(origin: Vec2, cell_size: Vec2, columns: i32, rows: i32) -> Self {
        Self {
            origin,
            cell_size,
            columns,
            rows,
        }
    }

    /// Create a grid from configuration values
    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.origin, config.cell_size, config.columns, config.rows)
    }

    /// Number of columns
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Number of rows
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Size of one cell in pixels
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Pixel position of a cell's centre, for placing highlight sprites
    pub fn cell_to_pixel(&self, cell: Cell) -> Point2 {
        let corner = self.origin
            + Vec2::new(
                cell.x as f32 * self.cell_size.x,
                cell.y as f32 * self.cell_size.y,
            );
        Point2::from(corner + self.cell_size * 0.5)
    }
}

impl BoardGeometry for GridGeometry {
    fn pixel_to_cell(&self, point: Point2) -> Cell {
        let offset = point.coords - self.origin;
        // NaN would saturate to cell 0; keep non-finite input off the board
        if !offset.x.is_finite() || !offset.y.is_finite() {
            return Cell::new(i32::MIN, i32::MIN);
        }
        // floor, not truncation: pixels left of the origin land in column -1
        Cell::new(
            (offset.x / self.cell_size.x).floor() as i32,
            (offset.y / self.cell_size.y).floor() as i32,
        )
    }

    fn boundary_contains(&self, cell: Cell) -> bool {
        (0..self.columns).contains(&cell.x) && (0..self.rows).contains(&cell.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn board() -> GridGeometry {
        GridGeometry::new(Vec2::zeros(), Vec2::new(32.0, 32.0), 10, 10)
    }

    #[test]
    fn test_pixel_to_cell() {
        let grid = board();
        assert_eq!(grid.pixel_to_cell(Point2::new(0.0, 0.0)), Cell::new(0, 0));
        assert_eq!(grid.pixel_to_cell(Point2::new(31.9, 31.9)), Cell::new(0, 0));
        assert_eq!(grid.pixel_to_cell(Point2::new(32.0, 64.0)), Cell::new(1, 2));
        assert_eq!(grid.pixel_to_cell(Point2::new(140.0, 150.0)), Cell::new(4, 4));
    }

    #[test]
    fn test_negative_pixels_floor() {
        let grid = board();
        assert_eq!(grid.pixel_to_cell(Point2::new(-0.5, -40.0)), Cell::new(-1, -2));
    }

    #[test]
    fn test_non_finite_pixels_fall_off_board() {
        let grid = board();
        for point in [
            Point2::new(f32::NAN, 10.0),
            Point2::new(10.0, f32::NAN),
            Point2::new(f32::INFINITY, 10.0),
            Point2::new(10.0, f32::NEG_INFINITY),
        ] {
            let cell = grid.pixel_to_cell(point);
            assert!(!grid.boundary_contains(cell), "{point:?} resolved to {cell:?}");
        }
    }

    #[test]
    fn test_origin_offset() {
        let grid = GridGeometry::new(Vec2::new(100.0, 50.0), Vec2::new(10.0, 20.0), 4, 4);
        assert_eq!(grid.pixel_to_cell(Point2::new(105.0, 55.0)), Cell::new(0, 0));
        assert_eq!(grid.pixel_to_cell(Point2::new(99.0, 55.0)), Cell::new(-1, 0));
        assert_eq!(grid.pixel_to_cell(Point2::new(131.0, 91.0)), Cell::new(3, 2));
    }

    #[test]
    fn test_boundary_contains() {
        let grid = board();
        assert!(grid.boundary_contains(Cell::new(0, 0)));
        assert!(grid.boundary_contains(Cell::new(9, 9)));
        assert!(!grid.boundary_contains(Cell::new(10, 0)));
        assert!(!grid.boundary_contains(Cell::new(0, -1)));
    }

    #[test]
    fn test_cell_to_pixel_centre() {
        let grid = board();
        let centre = grid.cell_to_pixel(Cell::new(2, 1));
        assert_relative_eq!(centre, Point2::new(80.0, 48.0));
        assert_eq!(grid.pixel_to_cell(centre), Cell::new(2, 1));
    }
}
