/// Policy for number templates when the input cannot be read as a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFallback {
	/// Use the template's own default number.
	#[default]
	TemplateDefault,
	/// Use `1` when the input is truthy, else `0`.
	Truthiness,
}

/// Behavior switches for template-driven coercion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
	/// Trim leading/trailing whitespace from string outputs.
	pub trim_strings: bool,
	/// Fallback used when number coercion fails.
	pub number_fallback: NumberFallback,
}

impl Default for ConvertOptions {
	fn default() -> Self {
		Self {
			trim_strings: true,
			number_fallback: NumberFallback::TemplateDefault,
		}
	}
}

impl ConvertOptions {
	/// Preset matching the earliest string/number rules: no trimming, truthiness fallback.
	pub fn legacy() -> Self {
		Self {
			trim_strings: false,
			number_fallback: NumberFallback::Truthiness,
		}
	}
}
