// THEORY:
// The `ChannelAggregator` turns a multi-channel image patch into one flat signature.
// It is the orchestration layer above the binner, in the same spirit as a grid
// manager: it owns no analysis of its own, it only sequences calls.
//
// For each channel, in ascending order, it asks the `ChannelSource` collaborator for
// that channel as a scalar image, asks again for the values inside the region, bins
// them with the shared bin count and range, and appends the result. Segment `k` of the
// output (length `bins_per_channel`) therefore always belongs to channel `k`, and the
// same segment of two signatures can be compared bin for bin.
//
// Failure is all-or-nothing. A partial signature would silently compare as a shorter
// histogram downstream, so the first error from any channel ends the call.

pub mod channel_aggregator {
    use crate::core_modules::binner::binner::{Histogram, scalar_histogram};
    use crate::core_modules::component::component::HistogramComponent;
    use crate::core_modules::error::error::HistogramError;
    use crate::core_modules::region::region::{ChannelSource, Region};
    use tracing::debug;

    /// A concatenation of per-channel histograms, channel 0 first.
    pub type Signature = Histogram;

    /// The bin layout shared by every channel of a signature.
    #[derive(Debug, Clone, PartialEq)]
    pub struct HistogramConfig<T> {
        pub bins_per_channel: usize,
        pub range_min: T,
        pub range_max: T,
    }

    impl<T: HistogramComponent> HistogramConfig<T> {
        pub fn new(bins_per_channel: usize, range_min: T, range_max: T) -> Self {
            Self {
                bins_per_channel,
                range_min,
                range_max,
            }
        }

        /// Bins spanning the component type's whole nominal range.
        pub fn full_range(bins_per_channel: usize) -> Self {
            Self::new(bins_per_channel, T::MIN, T::MAX)
        }

        /// Length of a signature over `channel_count` channels.
        pub fn signature_len(&self, channel_count: usize) -> usize {
            channel_count * self.bins_per_channel
        }
    }

    /// Histograms every channel of `image` inside `region` and concatenates them in
    /// channel order.
    pub fn compute_concatenated_histogram<I: ChannelSource>(
        image: &I,
        region: &Region,
        bins_per_channel: usize,
        range_min: I::Component,
        range_max: I::Component,
    ) -> Result<Signature, HistogramError> {
        let channel_count = image.channel_count();
        let mut signature = Signature::with_capacity(channel_count * bins_per_channel);

        for channel in 0..channel_count {
            let histogram =
                channel_histogram(image, channel, region, bins_per_channel, range_min, range_max)?;
            signature.extend_from_slice(&histogram);
        }

        Ok(signature)
    }

    /// [`compute_concatenated_histogram`] with the layout taken from a config.
    pub fn compute_concatenated_histogram_with<I: ChannelSource>(
        image: &I,
        region: &Region,
        config: &HistogramConfig<I::Component>,
    ) -> Result<Signature, HistogramError> {
        compute_concatenated_histogram(
            image,
            region,
            config.bins_per_channel,
            config.range_min,
            config.range_max,
        )
    }

    /// One channel's histogram. Shared with the parallel aggregator so both paths
    /// bin identically.
    pub(crate) fn channel_histogram<I: ChannelSource>(
        image: &I,
        channel: usize,
        region: &Region,
        bins_per_channel: usize,
        range_min: I::Component,
        range_max: I::Component,
    ) -> Result<Histogram, HistogramError> {
        let scalar = image.extract_channel(channel)?;
        let values = image.values_in_region(&scalar, region)?;
        let histogram = scalar_histogram(&values, bins_per_channel, range_min, range_max)?;
        debug!(channel, samples = values.len(), "channel histogram computed");
        Ok(histogram)
    }
}
