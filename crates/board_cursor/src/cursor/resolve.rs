//! Pointer to cell resolution

use crate::board::{BoardGeometry, Cell};
use crate::foundation::math::Point2;
use crate::input::CursorTransform;

/// Resolve the board cell under a pointer position
///
/// The pointer is moved into the controller's local space, converted by the
/// geometry, and rejected when the cell falls outside the board boundary.
/// The allow-list plays no part here.
pub fn resolve_cell(
    geometry: &dyn BoardGeometry,
    transform: &CursorTransform,
    pointer: Point2,
) -> Option<Cell> {
    let local = transform.to_local(pointer);
    let cell = geometry.pixel_to_cell(local);
    geometry.boundary_contains(cell).then_some(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GridGeometry;
    use crate::foundation::math::Vec2;

    fn board() -> GridGeometry {
        GridGeometry::new(Vec2::zeros(), Vec2::new(10.0, 10.0), 10, 10)
    }

    #[test]
    fn test_resolves_inside_board() {
        let cell = resolve_cell(&board(), &CursorTransform::identity(), Point2::new(45.0, 45.0));
        assert_eq!(cell, Some(Cell::new(4, 4)));
    }

    #[test]
    fn test_outside_board_is_none() {
        let transform = CursorTransform::identity();
        assert_eq!(resolve_cell(&board(), &transform, Point2::new(100.0, 5.0)), None);
        assert_eq!(resolve_cell(&board(), &transform, Point2::new(-1.0, 5.0)), None);
    }

    #[test]
    fn test_transform_removed_before_lookup() {
        let transform = CursorTransform::new(Vec2::new(200.0, 100.0), Vec2::new(2.0, 2.0));
        // (290 - 200) / 2 = 45, (110 - 100) / 2 = 5
        let cell = resolve_cell(&board(), &transform, Point2::new(290.0, 110.0));
        assert_eq!(cell, Some(Cell::new(4, 0)));
        // Unscaled this pointer would be off the board entirely
        assert_eq!(
            resolve_cell(&board(), &CursorTransform::identity(), Point2::new(290.0, 110.0)),
            None
        );
    }
}
