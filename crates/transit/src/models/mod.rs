//! Dataset models, types, and traits.

pub mod records;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use records::{StationSnapshot, TransitLineSegment};
pub use traits::DatasetSource;
pub use types::{DatasetError, Result, StationState, VehicleType};
