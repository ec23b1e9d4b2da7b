// THEORY:
// Every failure the histogram engine can report lives here. The engine is a set of
// pure functions, so "failure" means one of two things: the caller handed us metadata
// that contradicts the data (a declared range that does not bound the samples, a
// region that leaves the image), or the outside world failed us (file I/O, a decoder,
// a worker thread). Both are returned as values; nothing in the library panics.
//
// `RangeError` is split out as its own struct because it is the one error callers
// routinely want to inspect: it carries every number needed to see *why* a sample
// missed the histogram.

pub mod error {
    use crate::core_modules::region::region::Region;
    use thiserror::Error;

    /// A sample fell outside the declared `[range_min, range_max]`.
    #[derive(Error, Debug, Clone, PartialEq)]
    #[error(
        "can't write to bin {bin}: values[{index}] = {value} is outside [{range_min}, {range_max}] \
         (bin width {bin_width}, {bin_count} bins, {sample_count} values)"
    )]
    pub struct RangeError {
        /// The offending sample, widened to `f64`.
        pub value: f64,
        /// Position of the sample in the input sequence.
        pub index: usize,
        pub range_min: f64,
        pub range_max: f64,
        pub bin_width: f64,
        /// The bin the sample mapped to. `i64::MIN` when the value was not a number.
        pub bin: i64,
        pub bin_count: usize,
        pub sample_count: usize,
    }

    #[derive(Error, Debug)]
    pub enum HistogramError {
        #[error(transparent)]
        Range(#[from] RangeError),
        #[error("a histogram needs at least one bin")]
        ZeroBins,
        #[error("region {region:?} does not fit inside a {width}x{height} image")]
        RegionOutOfBounds {
            region: Region,
            width: u32,
            height: u32,
        },
        #[error("channel {channel} requested from an image with {channel_count} channels")]
        ChannelOutOfBounds { channel: usize, channel_count: usize },
        #[error("I/O error: {0}")]
        Io(#[from] std::io::Error),
        #[error("image error: {0}")]
        Image(#[from] image::ImageError),
        #[error("channel worker failed: {0}")]
        Join(String),
    }
}
