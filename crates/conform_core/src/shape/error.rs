use thiserror::Error;

use crate::shape::Shape;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ConformError>;

/// Errors produced while coercing values against a template.
///
/// Input never fails coercion; only malformed templates do.
#[derive(Debug, Error)]
pub enum ConformError {
	/// Template value has a shape the coercer cannot interpret.
	#[error("unsupported template type: {shape}")]
	UnsupportedTemplateType {
		/// Actual shape of the offending template.
		shape: Shape,
	},
}
