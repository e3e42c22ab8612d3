//! Tests for benchmark chart rendering

#[cfg(test)]
mod tests {
    use minsquares::DissectionError;
    use minsquares::analysis::benchmark::Measurement;
    use minsquares::io::chart::render_step_chart;
    use minsquares::io::configuration::{CHART_HEIGHT, CHART_WIDTH};

    fn sample_sweep() -> Vec<Measurement> {
        vec![
            Measurement {
                grid_size: 2,
                steps: 1,
                count: 4,
            },
            Measurement {
                grid_size: 5,
                steps: 20,
                count: 8,
            },
            Measurement {
                grid_size: 7,
                steps: 110,
                count: 9,
            },
        ]
    }

    // Tests a sweep renders to the configured canvas size
    // Verified by deriving the canvas from the data range
    #[test]
    fn test_chart_canvas_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        render_step_chart(&sample_sweep(), &path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.width(), CHART_WIDTH);
        assert_eq!(img.height(), CHART_HEIGHT);
    }

    // Tests an empty sweep is rejected instead of producing a blank chart
    // Verified by rendering the empty background anyway
    #[test]
    fn test_empty_sweep_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");

        let err = render_step_chart(&[], &path).unwrap_err();
        assert!(matches!(err, DissectionError::Computation { .. }));
        assert!(!path.exists());
    }

    // Tests a single measurement still renders without dividing by zero
    // Verified by removing the degenerate-interval fallback
    #[test]
    fn test_single_point_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("single.png");

        let sweep = vec![Measurement {
            grid_size: 13,
            steps: 500,
            count: 11,
        }];
        render_step_chart(&sweep, &path).unwrap();
        assert!(path.exists());
    }
}
