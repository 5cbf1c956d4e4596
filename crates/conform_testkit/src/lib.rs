//! JSON fixture helpers shared by the workspace test suites.

use std::path::{Path, PathBuf};

/// Directory holding the template/input JSON fixtures.
pub fn fixtures_dir() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir.ancestors().nth(2).unwrap_or(manifest_dir).join("fixtures")
}

/// Resolve `name` inside [`fixtures_dir`].
pub fn fixture_path(name: &str) -> PathBuf {
	fixtures_dir().join(name)
}

/// Read and parse a JSON fixture, panicking with the fixture path on failure.
pub fn load_json_fixture(name: &str) -> serde_json::Value {
	let path = fixture_path(name);
	let text = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read fixture {}: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("fixture {} is not valid json: {err}", path.display()))
}

/// Named template fixture together with its sample input and, when recorded, the expected coerced output.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
	/// Template fixture name.
	pub template: &'static str,
	/// Input fixture name.
	pub input: &'static str,
	/// Expected output fixture name, if one is recorded.
	pub expected: Option<&'static str>,
}

/// Every template/input pairing stored under `fixtures/`.
pub const SCENARIOS: &[Scenario] = &[
	Scenario {
		template: "profile_template.json",
		input: "profile_input.json",
		expected: Some("profile_expected.json"),
	},
	Scenario {
		template: "form_template.json",
		input: "form_input.json",
		expected: None,
	},
];
