//! Mathematical utilities for rendering and pacing

/// Deterministic per-cell cosmetic colors
pub mod color;
/// Linear range mapping and the speed to delay curve
pub mod interpolation;
