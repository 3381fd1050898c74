//! Math utilities and types
//!
//! Pointer positions and board pixels are 2D single-precision values.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Component-wise division that leaves a component untouched when its divisor is zero
pub fn safe_div(value: Vec2, divisor: Vec2) -> Vec2 {
    Vec2::new(
        if divisor.x == 0.0 { value.x } else { value.x / divisor.x },
        if divisor.y == 0.0 { value.y } else { value.y / divisor.y },
    )
}
