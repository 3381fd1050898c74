//! Pointer space conversion
//!
//! Pointer events arrive in the host's screen space. The cursor controller
//! sits at its own position and scale within that space; removing both gives
//! the board-local pixel position the board geometry works in.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{safe_div, Point2, Vec2};

/// Position and scale of the cursor controller within pointer space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorTransform {
    /// Offset of the controller's origin in pointer space (pixels)
    pub position: Vec2,
    /// Scale applied to the controller (1.0 = unscaled)
    pub scale: Vec2,
}

impl CursorTransform {
    /// Create a transform with the given offset and scale
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        Self { position, scale }
    }

    /// Identity transform: pointer space equals local space
    pub fn identity() -> Self {
        Self::new(Vec2::zeros(), Vec2::new(1.0, 1.0))
    }

    /// Create a transform with only an offset
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Convert a pointer-space position into controller-local space
    ///
    /// A zero scale component is treated as 1.0 on that axis.
    ///
    /// # Examples
    /// ```
    /// # use board_cursor::input::CursorTransform;
    /// # use board_cursor::foundation::math::{Point2, Vec2};
    /// let transform = CursorTransform::new(Vec2::new(100.0, 50.0), Vec2::new(2.0, 2.0));
    /// let local = transform.to_local(Point2::new(164.0, 114.0));
    /// assert_eq!(local, Point2::new(32.0, 32.0));
    /// ```
    pub fn to_local(&self, pointer: Point2) -> Point2 {
        Point2::from(safe_div(pointer.coords - self.position, self.scale))
    }
}

impl Default for CursorTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_to_local() {
        let transform = CursorTransform::identity();
        let local = transform.to_local(Point2::new(12.5, -3.0));
        assert_relative_eq!(local, Point2::new(12.5, -3.0));
    }

    #[test]
    fn test_offset_and_scale() {
        let transform = CursorTransform::new(Vec2::new(10.0, 20.0), Vec2::new(0.5, 4.0));
        let local = transform.to_local(Point2::new(15.0, 60.0));
        assert_relative_eq!(local, Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_zero_scale_axis_ignored() {
        let transform = CursorTransform::new(Vec2::zeros(), Vec2::new(0.0, 2.0));
        let local = transform.to_local(Point2::new(8.0, 8.0));
        assert_relative_eq!(local, Point2::new(8.0, 4.0));
    }
}
