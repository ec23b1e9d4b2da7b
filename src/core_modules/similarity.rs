// THEORY:
// The `similarity` module compares two signatures with normalized histogram
// intersection: sum the per-bin minimums, then divide by the reference histogram's
// total mass. Identical histograms score 1.0, histograms with no overlapping mass
// score 0.0.
//
// The normalization is asymmetric. The first argument is the reference distribution
// and only its mass is used, so `intersection(a, b)` and `intersection(b, a)` differ
// when the two masses differ.
//
// Comparisons usually run in large batches (one patch against many candidates). A
// single malformed pair, two histograms of different lengths, is logged and scored
// 0.0 instead of aborting the batch. A reference with zero total mass has no defined
// score; callers must not pass one.

pub mod similarity {
    use crate::core_modules::binner::binner::{Frequency, Histogram};
    use tracing::warn;

    pub type IntersectionScore = f64;

    /// Normalized intersection of `histogram2` against the reference `histogram1`.
    pub fn histogram_intersection(
        histogram1: &[Frequency],
        histogram2: &[Frequency],
    ) -> IntersectionScore {
        if histogram1.len() != histogram2.len() {
            warn!(
                reference_len = histogram1.len(),
                candidate_len = histogram2.len(),
                "histograms must be the same size, scoring 0"
            );
            return 0.0;
        }

        let total_intersection: Frequency = histogram1
            .iter()
            .zip(histogram2)
            .map(|(a, b)| a.min(*b))
            .sum();

        total_intersection / total_mass(histogram1)
    }

    /// Sum of all bin counts.
    pub fn total_mass(histogram: &[Frequency]) -> Frequency {
        histogram.iter().sum()
    }

    /// Scales a histogram so its bins sum to 1.0.
    /// An all-zero histogram is returned unchanged.
    pub fn normalize(histogram: &[Frequency]) -> Histogram {
        let mass = total_mass(histogram);
        if mass == 0.0 {
            return histogram.to_vec();
        }
        histogram.iter().map(|count| count / mass).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::similarity::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    #[test]
    fn shifted_ramp_scores_five_sixths() {
        let h1 = [1.0, 1.0, 1.0, 1.0, 2.0];
        let h2 = [2.0, 1.0, 1.0, 1.0, 1.0];
        let score = histogram_intersection(&h1, &h2);
        assert!((score - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn self_intersection_is_one() {
        let h = [0.0, 3.0, 7.0, 1.0];
        assert_eq!(histogram_intersection(&h, &h), 1.0);
    }

    #[test]
    fn disjoint_mass_scores_zero() {
        let h1 = [4.0, 0.0, 2.0, 0.0];
        let h2 = [0.0, 5.0, 0.0, 1.0];
        assert_eq!(histogram_intersection(&h1, &h2), 0.0);
    }

    /// Collects formatted log output so tests can assert on it.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn length_mismatch_scores_zero_and_warns() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(Level::WARN)
            .finish();

        let score = tracing::subscriber::with_default(subscriber, || {
            histogram_intersection(&[1.0, 2.0], &[1.0, 2.0, 3.0])
        });

        assert_eq!(score, 0.0);
        let output = logs.contents();
        assert!(output.contains("WARN"));
        assert!(output.contains("histograms must be the same size"));
        assert!(output.contains("reference_len=2"));
        assert!(output.contains("candidate_len=3"));
    }

    #[test]
    fn equal_lengths_do_not_warn() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(Level::WARN)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            histogram_intersection(&[1.0, 2.0], &[2.0, 1.0])
        });

        assert!(logs.contents().is_empty());
    }

    #[test]
    fn normalization_uses_reference_mass_only() {
        let small = [1.0, 1.0];
        let large = [4.0, 4.0];
        // min is bounded by the reference, so the reference side never exceeds 1.
        assert_eq!(histogram_intersection(&small, &large), 1.0);
        assert_eq!(histogram_intersection(&large, &small), 0.25);
    }

    #[test]
    fn score_stays_in_unit_interval_for_counts() {
        let h1 = [3.0, 0.0, 9.0, 2.0, 5.0];
        let h2 = [1.0, 8.0, 2.0, 2.0, 0.0];
        let score = histogram_intersection(&h1, &h2);
        assert!((0.0..=1.0).contains(&score));
        assert!((score - 5.0 / 19.0).abs() < 1e-12);
    }

    #[test]
    fn zero_mass_reference_is_undefined() {
        assert!(histogram_intersection(&[0.0, 0.0], &[1.0, 1.0]).is_nan());
    }

    #[test]
    fn normalize_scales_to_unit_mass() {
        let normalized = normalize(&[1.0, 3.0, 0.0, 4.0]);
        assert_eq!(normalized, vec![0.125, 0.375, 0.0, 0.5]);
        assert_eq!(total_mass(&normalized), 1.0);
        assert_eq!(normalize(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn normalized_histograms_intersect_like_raw_ones() {
        let h1 = [1.0, 1.0, 1.0, 1.0, 2.0];
        let h2 = [1.0, 1.0, 1.0, 1.0, 2.0];
        assert_eq!(
            histogram_intersection(&normalize(&h1), &normalize(&h2)),
            histogram_intersection(&h1, &h2)
        );
    }
}
