// Formatting module - pure algorithms shaping report fields

pub mod error;
pub mod source;

pub use error::{FlattenError, error_json};
pub use source::clean;
