pub mod aggregation;
pub mod calendar;
pub mod constants;
pub mod errors;
pub mod instruments;
pub mod portfolio;
pub mod reporting;
pub mod settlement;
pub mod utils;

pub use errors::{Error, Result};
pub use reporting::*;
pub use settlement::*;
