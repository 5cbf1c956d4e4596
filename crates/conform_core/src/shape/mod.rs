mod coerce;
mod convert;
mod error;
mod json;
mod options;
mod value;

/// Scalar coercion helpers used by the template handlers.
pub use coerce::{is_truthy, to_number, to_text};
/// Template-driven coercion entry points.
pub use convert::{conform, conform_with, convert, convert_with, defaults};
/// Error and result aliases.
pub use error::{ConformError, Result};
/// Coercion behavior switches.
pub use options::{ConvertOptions, NumberFallback};
/// Runtime value and shape classification types.
pub use value::{FieldValue, ObjectValue, Shape, Value};
