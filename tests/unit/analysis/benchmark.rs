//! Tests for the benchmark sweep over grid sizes

#[cfg(test)]
mod tests {
    use minsquares::analysis::benchmark::sweep;

    // Tests the sweep returns one measurement per size in input order
    // Verified by collecting into a map keyed by size
    #[test]
    fn test_sweep_preserves_order() {
        let measurements = sweep(&[4, 2, 3], None);

        let sizes: Vec<u32> = measurements.iter().map(|m| m.grid_size).collect();
        assert_eq!(sizes, vec![4, 2, 3]);
        for measurement in &measurements {
            assert!(measurement.steps > 0);
            assert!(measurement.count > 1);
        }
    }

    // Tests measurements match standalone invocations exactly
    // Verified by perturbing shared state between sweep entries
    #[test]
    fn test_sweep_matches_direct_runs() {
        use minsquares::minimum_dissection;

        let measurements = sweep(&[2, 5], None);
        let direct_two = minimum_dissection(2, None);
        let direct_five = minimum_dissection(5, None);

        assert_eq!(measurements[0].steps, direct_two.steps);
        assert_eq!(measurements[0].count, direct_two.count);
        assert_eq!(measurements[1].steps, direct_five.steps);
        assert_eq!(measurements[1].count, direct_five.count);
    }
}
