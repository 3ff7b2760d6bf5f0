//! Tests for seeded wall colors

#[cfg(test)]
mod tests {
    use mazecarve::math::color::{color_at, hash_digit, seed_fraction, to_hex};

    // Tests seeds map into the unit interval
    // Verified by dividing by 2^64 without shifting
    #[test]
    fn test_seed_fraction_range() {
        assert!(seed_fraction(0).abs() < f64::EPSILON);
        for seed in [1, 42, u64::MAX / 3, u64::MAX] {
            let fraction = seed_fraction(seed);
            assert!((0.0..1.0).contains(&fraction), "seed {seed} -> {fraction}");
        }
    }

    // Tests hash digits are valid hex digits
    // Verified by removing the final min clamp
    #[test]
    fn test_hash_digit_range() {
        for x in 0..20 {
            for y in 0..20 {
                for index in 0..6 {
                    assert!(hash_digit(0.37, x, y, index) < 16);
                }
            }
        }
    }

    // Tests colors are stable for one seed and vary between cells
    // Verified by ignoring the cell coordinates
    #[test]
    fn test_color_at_deterministic() {
        let seed = 0xDEAD_BEEF_u64 << 20;
        assert_eq!(color_at(seed, 3, 4), color_at(seed, 3, 4));

        let distinct: std::collections::HashSet<[u8; 4]> =
            (0..10).map(|x| color_at(seed, x, 0)).collect();
        assert!(distinct.len() > 1);
        assert!(distinct.iter().all(|color| color[3] == 255));
    }

    // Tests hex formatting ignores alpha and pads digits
    // Verified by using lowercase formatting
    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex([0xF3, 0x5E, 0x06, 0]), "#F35E06");
        assert_eq!(to_hex([0, 0, 0, 255]), "#000000");
    }
}
