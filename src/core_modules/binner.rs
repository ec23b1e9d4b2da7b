// THEORY:
// The `binner` is the lowest analytical layer of the histogram engine. It turns an
// unordered bag of scalar samples into a fixed-length vector of counts over a range
// the caller declares up front.
//
// Key architectural principles:
// 1.  **Declared Range, Not Observed Range**: The bins are equal-width slices of
//     `[range_min, range_max]` as *declared*, never of the data's own min/max. Two
//     patches binned with the same declaration are positionally comparable.
// 2.  **Closed Upper Bound**: `floor((v - min) / width)` sends `v == max` one bin past
//     the end. Nudging `max` by an epsilon is not an option for bounded integer pixels
//     (`255 + epsilon` does not exist in a `u8`), so the exact maximum is matched in
//     the sample's native type and routed to the last bin.
// 3.  **Loud Misuse**: A sample outside the declared range means the caller's range
//     metadata is wrong. That is returned as a `RangeError` with the full diagnosis,
//     never clamped or dropped.
// 4.  **Quiet Degeneracy**: A collapsed range (`min == max`) has no meaningful bins.
//     The binner returns all zeros rather than dividing by zero; the caller owns the
//     responsibility of noticing that its range was a point.
// 5.  **Real-Valued Counts**: Counts are stored as `f64` so a histogram can be
//     normalized in place later without a type change.

pub mod binner {
    use crate::core_modules::component::component::HistogramComponent;
    use crate::core_modules::error::error::{HistogramError, RangeError};
    use tracing::debug;

    pub type Frequency = f64;
    pub type Histogram = Vec<Frequency>;
    pub type BinWidth = f64;

    /// Bin widths closer to zero than this are treated as a collapsed range.
    pub const DEGENERATE_BIN_WIDTH: BinWidth = 1e-6;

    /// Counts `values` into `number_of_bins` equal-width bins spanning
    /// `[range_min, range_max]`.
    ///
    /// - A value exactly equal to `range_max` lands in the last bin.
    /// - A value outside the range fails with [`RangeError`].
    /// - A range narrower than [`DEGENERATE_BIN_WIDTH`] per bin yields all zeros.
    pub fn scalar_histogram<T: HistogramComponent>(
        values: &[T],
        number_of_bins: usize,
        range_min: T,
        range_max: T,
    ) -> Result<Histogram, HistogramError> {
        if number_of_bins == 0 {
            return Err(HistogramError::ZeroBins);
        }

        let mut bins: Histogram = vec![0.0; number_of_bins];

        let min = range_min.to_f64();
        let max = range_max.to_f64();
        let bin_width: BinWidth = (max - min) / number_of_bins as f64;

        if bin_width.abs() < DEGENERATE_BIN_WIDTH {
            debug!(
                range_min = min,
                range_max = max,
                number_of_bins,
                "degenerate histogram range, returning empty bins"
            );
            return Ok(bins);
        }

        let last_bin = number_of_bins - 1;
        for (index, &value) in values.iter().enumerate() {
            if value == range_max {
                bins[last_bin] += 1.0;
                continue;
            }

            let sample = value.to_f64();
            let position = ((sample - min) / bin_width).floor();
            if position >= 0.0 && position < number_of_bins as f64 {
                bins[position as usize] += 1.0;
            } else if position == number_of_bins as f64 && sample >= min && sample < max {
                // Within an ulp of `max`, the division can round up past the last bin.
                bins[last_bin] += 1.0;
            } else {
                return Err(RangeError {
                    value: sample,
                    index,
                    range_min: min,
                    range_max: max,
                    bin_width,
                    bin: if position.is_nan() { i64::MIN } else { position as i64 },
                    bin_count: number_of_bins,
                    sample_count: values.len(),
                }
                .into());
            }
        }

        Ok(bins)
    }
}
