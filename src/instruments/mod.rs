pub mod instruments_errors;
pub mod instruments_model;

pub use instruments_errors::InstrumentError;
pub use instruments_model::{Instrument, InstrumentCatalog};
