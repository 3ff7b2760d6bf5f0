//! Tests for start and destination placement

#[cfg(test)]
mod tests {
    use mazecarve::algorithm::executor::RandomSelector;
    use mazecarve::spatial::dimensions::GridDimensions;
    use mazecarve::spatial::endpoints::{cell_center, random_end_point, random_start_point};
    use mazecarve::spatial::grid::CellPosition;

    fn dimensions(width: usize, height: usize) -> GridDimensions {
        let Ok(dimensions) = GridDimensions::new(width, height, 10) else {
            unreachable!("test dimensions should be valid");
        };
        dimensions
    }

    // Tests start points stay in the top-left quadrant
    // Verified by scaling with the full width
    #[test]
    fn test_start_point_in_top_left_quadrant() {
        let dims = dimensions(13, 10);
        let mut selector = RandomSelector::new(3);

        for _ in 0..200 {
            let start = random_start_point(&dims, &mut selector);
            assert!(start.x <= 6, "x = {} outside left half", start.x);
            assert!(start.y <= 4, "y = {} outside top half", start.y);
        }
    }

    // Tests destinations sit on the far bottom or right edge, far half
    // Verified by dropping the 0.5 offset
    #[test]
    fn test_end_point_on_far_edges() {
        let dims = dimensions(13, 10);
        let mut selector = RandomSelector::new(11);
        let mut seen_bottom = false;
        let mut seen_right = false;

        for _ in 0..200 {
            let end = random_end_point(&dims, &mut selector);
            assert!(end.x < 13 && end.y < 10);
            if end.y == 9 && end.x >= 6 {
                seen_bottom = true;
            } else if end.x == 12 && end.y >= 5 {
                seen_right = true;
            } else {
                unreachable!("destination {end:?} off the far edges");
            }
        }

        assert!(seen_bottom && seen_right);
    }

    // Tests a single cell grid places both endpoints on that cell
    // Verified by removing the saturating subtraction
    #[test]
    fn test_single_cell_endpoints() {
        let dims = dimensions(1, 1);
        let mut selector = RandomSelector::new(0);
        assert_eq!(
            random_start_point(&dims, &mut selector),
            CellPosition::new(0, 0)
        );
        assert_eq!(
            random_end_point(&dims, &mut selector),
            CellPosition::new(0, 0)
        );
    }

    // Tests cell centres in viewport units
    // Verified by omitting the half-cell offset
    #[test]
    fn test_cell_center() {
        assert_eq!(cell_center(CellPosition::new(0, 0), 20), (10.0, 10.0));
        assert_eq!(cell_center(CellPosition::new(2, 1), 20), (50.0, 30.0));
    }
}
