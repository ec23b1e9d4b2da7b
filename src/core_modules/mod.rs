pub mod binner;
pub mod channel_aggregator;
pub mod component;
pub mod error;
pub mod exporter;
pub mod region;
pub mod similarity;
