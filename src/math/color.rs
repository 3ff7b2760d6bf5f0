//! Deterministic cosmetic wall colors
//!
//! Each hex digit of the color comes from a sine hash of the seed and cell
//! coordinates, so a run's seed keeps colors stable across every frame it
//! emits.

const X_FACTOR: f64 = 12.9898;
const Y_FACTOR: f64 = 78.233;
const SCALE: f64 = 43_758.5453;

/// Map a 64-bit run seed onto `[0, 1)`
pub fn seed_fraction(seed: u64) -> f64 {
    // Top 53 bits fit an f64 mantissa exactly
    (seed >> 11) as f64 / (1_u64 << 53) as f64
}

/// Hex digit `index` (0..6) of the color at `(x, y)`
pub fn hash_digit(seed: f64, x: usize, y: usize, index: usize) -> u8 {
    let value = (seed + x as f64 * X_FACTOR + y as f64 * Y_FACTOR).sin() * SCALE * (index + 1) as f64;
    let fraction = value - value.floor();
    ((fraction * 16.0).floor() as u8).min(15)
}

/// Opaque RGBA color for the cell at `(x, y)` under `seed`
pub fn color_at(seed: u64, x: usize, y: usize) -> [u8; 4] {
    let fraction = seed_fraction(seed);
    let digit = |index| hash_digit(fraction, x, y, index);
    [
        digit(0) * 16 + digit(1),
        digit(2) * 16 + digit(3),
        digit(4) * 16 + digit(5),
        255,
    ]
}

/// `#RRGGBB` form of a color, ignoring alpha
pub fn to_hex(color: [u8; 4]) -> String {
    format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}
