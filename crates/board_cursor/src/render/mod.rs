//! Rendering seam for the focus highlight

pub mod highlight;

pub use highlight::{HighlightCommand, HighlightQueue, HighlightSink};
