// THEORY:
// The `histogram` module is the top-level API for the whole engine. It re-exports
// every component under one path so that callers can write
// `use patch_histogram::histogram::*` and get the full data flow:
//
//   image region -> per-channel values -> per-channel histograms
//                -> concatenated signature -> intersection score / export
//
// Every function here is stateless. Nothing is cached between calls and every
// returned histogram is owned by the caller.

pub use crate::core_modules::binner::binner::{
    BinWidth, DEGENERATE_BIN_WIDTH, Frequency, Histogram, scalar_histogram,
};
pub use crate::core_modules::channel_aggregator::channel_aggregator::{
    HistogramConfig, Signature, compute_concatenated_histogram, compute_concatenated_histogram_with,
};
pub use crate::core_modules::component::component::HistogramComponent;
pub use crate::core_modules::error::error::{HistogramError, RangeError};
pub use crate::core_modules::exporter::exporter::{
    output_histogram, write_histogram, write_histogram_to,
};
pub use crate::core_modules::region::region::{ChannelSource, Region};
pub use crate::core_modules::similarity::similarity::{
    IntersectionScore, histogram_intersection, normalize, total_mass,
};
pub use crate::parallel_aggregator::compute_concatenated_histogram_parallel;
