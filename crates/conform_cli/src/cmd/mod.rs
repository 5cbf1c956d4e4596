/// Template application command.
pub mod apply;
/// Template default-value command.
pub mod defaults;
/// Tree rendering for coerced values.
pub mod print;
/// Document shape report command.
pub mod shape;
/// Shared file and output helpers.
pub(crate) mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// How a command writes its resulting value to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
	/// Compact single-line JSON.
	Json,
	/// Indented JSON.
	PrettyJson,
	/// Human-readable tree.
	Tree,
}
