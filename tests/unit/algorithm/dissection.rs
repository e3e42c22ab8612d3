//! Tests for the pipeline entry point and result packaging

#[cfg(test)]
mod tests {
    use minsquares::minimum_dissection;

    // Tests reducible sizes come back rescaled into original grid units
    // Verified by dropping the rescale step after the search
    #[test]
    fn test_result_is_rescaled() {
        let dissection = minimum_dissection(6, None);

        assert_eq!(dissection.count, 4);
        for square in &dissection.squares {
            assert_eq!(square.x % 3, 0);
            assert_eq!(square.y % 3, 0);
            assert_eq!(square.size, 3);
        }
        let total: u64 = dissection.squares.iter().map(|square| square.area()).sum();
        assert_eq!(total, 36);
    }

    // Tests the step counter reflects work done even on the fast path
    // Verified by returning a zeroed counter from the session
    #[test]
    fn test_steps_are_reported() {
        let dissection = minimum_dissection(4, None);
        assert!(dissection.steps > 0);

        let larger = minimum_dissection(5, None);
        assert!(larger.steps > dissection.steps);
    }

    // Tests the count always matches the returned square list
    // Verified by reporting the bound instead of the stored solution size
    #[test]
    fn test_count_matches_squares() {
        for grid_size in 2..=8 {
            let dissection = minimum_dissection(grid_size, None);
            assert_eq!(dissection.count as usize, dissection.squares.len());
        }
    }
}
