// THEORY:
// This file is the main entry point for the `patch_histogram` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (patch matchers, texture
// comparison tools, inpainting front ends).
//
// The primary goal is to export the `histogram` facade: the binner, the
// per-channel signature builder, the intersection score and the exporter, plus
// their data types (`Histogram`, `Region`, `HistogramConfig`, `HistogramError`).
// The `core_modules` hold one component each; `parallel_aggregator` is the
// optional multi-threaded signature builder.

pub mod core_modules;
pub mod histogram;
pub mod parallel_aggregator;
