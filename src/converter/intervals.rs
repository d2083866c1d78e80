use crate::jams::container::Datapoint;
use crate::svl::document::Point;
use crate::DataError;

/// Turns consecutive points into labeled intervals.
///
/// Each interval runs from the carried start to the next point's frame and
/// takes the carried label. Only the first start is converted to seconds;
/// every `end`, and every later start, is a raw frame value.
pub fn build_intervals(points: &[Point], sample_rate: f64) -> Result<Vec<Datapoint>, DataError> {
    let (first, rest) = points.split_first().ok_or(DataError::EmptyPoints)?;

    let carried = (first.frame / sample_rate, first.label.clone());
    let datapoints = rest.iter()
        .scan(carried, |carried, point| {
            let (start, label) = std::mem::replace(carried, (point.frame, point.label.clone()));
            Some(Datapoint::new(start, point.frame, label))
        })
        .collect();

    Ok(datapoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn points(pairs: &[(f64, &str)]) -> Vec<Point> {
        pairs.iter()
            .map(|(frame, label)| Point { frame: *frame, label: label.to_string() })
            .collect()
    }

    fn summary(datapoints: &[Datapoint]) -> Vec<(f64, f64, String)> {
        datapoints.iter()
            .map(|d| (d.start.value, d.end.value, d.label.value.clone()))
            .collect()
    }

    #[test]
    fn first_start_is_scaled_and_ends_are_raw_frames() {
        let datapoints = build_intervals(&points(&[(0.0, "a"), (100.0, "b"), (200.0, "c")]), 100.0).unwrap();

        assert_eq!(summary(&datapoints), vec![
            (0.0, 100.0, "a".to_string()),
            (100.0, 200.0, "b".to_string()),
        ]);
        assert!(datapoints.iter().all(|d| d.label.context.is_empty()));
    }

    #[test]
    fn nonzero_first_frame_is_divided_by_sample_rate() {
        let datapoints = build_intervals(&points(&[(22050.0, "x"), (44100.0, "y")]), 44100.0).unwrap();
        assert_eq!(summary(&datapoints), vec![(0.5, 44100.0, "x".to_string())]);
    }

    #[test]
    fn produces_one_fewer_interval_than_points() {
        for n in 1..6 {
            let input: Vec<Point> = (0..n)
                .map(|i| Point { frame: (i * 10) as f64, label: format!("p{}", i) })
                .collect();
            let datapoints = build_intervals(&input, 10.0).unwrap();
            assert_eq!(datapoints.len(), n - 1);

            let labels: Vec<_> = datapoints.iter().map(|d| d.label.value.clone()).collect();
            let expected: Vec<_> = (0..n.saturating_sub(1)).map(|i| format!("p{}", i)).collect();
            assert_eq!(labels, expected);
        }
    }

    #[test]
    fn keeps_document_order_even_when_unsorted() {
        let datapoints = build_intervals(&points(&[(0.0, "a"), (300.0, "b"), (100.0, "c")]), 1.0).unwrap();
        assert_eq!(summary(&datapoints), vec![
            (0.0, 300.0, "a".to_string()),
            (300.0, 100.0, "b".to_string()),
        ]);
    }

    #[test]
    fn no_points_is_an_error() {
        assert_eq!(build_intervals(&[], 100.0), Err(DataError::EmptyPoints));
    }
}
