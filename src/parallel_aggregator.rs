// THEORY:
// Channels of a signature are independent: each one reads its own band of the image
// and writes its own segment of the output. That makes the channel loop trivially
// parallel. This module runs each channel on tokio's blocking pool and keeps at most
// one channel per CPU in flight, then stitches the segments back together by channel
// index. The result is bit-for-bit the same as the sequential aggregator.

use crate::core_modules::binner::binner::Histogram;
use crate::core_modules::channel_aggregator::channel_aggregator::{
    HistogramConfig, Signature, channel_histogram,
};
use crate::core_modules::error::error::HistogramError;
use crate::core_modules::region::region::{ChannelSource, Region};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;

/// Parallel counterpart of `compute_concatenated_histogram_with`.
///
/// The first failing channel fails the whole call; no partial signature is returned.
pub async fn compute_concatenated_histogram_parallel<I>(
    image: Arc<I>,
    region: Region,
    config: HistogramConfig<I::Component>,
) -> Result<Signature, HistogramError>
where
    I: ChannelSource + Send + Sync + 'static,
{
    let channel_count = image.channel_count();
    let max_in_flight = num_cpus::get().max(1);

    let histograms: Vec<Histogram> = stream::iter(0..channel_count)
        .map(|channel| {
            let image = Arc::clone(&image);
            let config = config.clone();
            async move {
                tokio::task::spawn_blocking(move || {
                    channel_histogram(
                        &*image,
                        channel,
                        &region,
                        config.bins_per_channel,
                        config.range_min,
                        config.range_max,
                    )
                })
                .await
                .map_err(|e| HistogramError::Join(e.to_string()))?
            }
        })
        // `buffered` yields in submission order, so channel order is preserved.
        .buffered(max_in_flight)
        .try_collect()
        .await?;

    let mut signature = Signature::with_capacity(config.signature_len(channel_count));
    for histogram in histograms {
        signature.extend(histogram);
    }
    Ok(signature)
}
