mod error;
mod reference_value;

pub use error::ReferenceError;
pub use reference_value::{DEFAULT_REFERENCE_FILE, ReferenceMode, ReferenceValue};
