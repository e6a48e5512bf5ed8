//! Dataset loaders.

pub mod file_source;
pub mod lines;
pub mod static_source;
pub mod stations;

pub use file_source::FileDatasetSource;
pub use static_source::StaticDatasetSource;
