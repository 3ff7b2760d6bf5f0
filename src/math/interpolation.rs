//! Linear range mapping and the generation speed curve

use std::time::Duration;

use crate::io::configuration::{MAX_PACING_VALUE, MIN_PACING_VALUE};

/// Map `value` linearly from `[min_in, max_in]` onto `[min_out, max_out]`
///
/// Values outside the input range extrapolate. A degenerate input range
/// maps everything to `min_out`.
pub fn map_range(value: f64, min_in: f64, max_in: f64, min_out: f64, max_out: f64) -> f64 {
    let span = max_in - min_in;
    if span == 0.0 {
        return min_out;
    }
    (value - min_in) * (max_out - min_out) / span + min_out
}

/// Map a value in `[0, 1]` onto `[min, max]`
pub fn map_unit(value: f64, min: f64, max: f64) -> f64 {
    map_range(value, 0.0, 1.0, min, max)
}

/// Merge delay in milliseconds for a generation speed in `[0, 1]`
///
/// Follows `ln(v)^2` with `v` sliding from `MAX_PACING_VALUE` at speed 0
/// down to `MIN_PACING_VALUE` at speed 1, which gives fine control at the
/// fast end. Speeds outside the unit interval are clamped; NaN counts as 0.
pub fn merge_delay_ms_for_speed(speed: f64) -> f64 {
    let speed = if speed.is_nan() {
        0.0
    } else {
        speed.clamp(0.0, 1.0)
    };
    let value = map_unit(1.0 - speed, MIN_PACING_VALUE, MAX_PACING_VALUE);
    let log = value.ln();
    log * log
}

/// Merge delay for a generation speed in `[0, 1]`
pub fn merge_delay_for_speed(speed: f64) -> Duration {
    Duration::from_secs_f64(merge_delay_ms_for_speed(speed) / 1000.0)
}
