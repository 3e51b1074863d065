//! Data module - CSV loading and typed column access

mod dataset;
mod loader;

pub use dataset::{is_numeric_dtype, Dataset, DatasetError};
pub use loader::{DataLoader, LoaderError};
