pub mod aggregation_model;

pub use aggregation_model::{AggregationStore, FlowDirection};
