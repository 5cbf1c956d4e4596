use std::path::PathBuf;
use std::process::{Command, Output};

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	conform_testkit::fixture_path(name)
}

/// Run the `conform` binary that cargo builds alongside this test executable.
pub(crate) fn run_conform(args: &[&str]) -> Output {
	Command::new(conform_bin()).args(args).output().expect("conform command executes")
}

/// Test executables live in `target/<profile>/deps`; the binary sits one level up.
fn conform_bin() -> PathBuf {
	if let Some(path) = std::env::var_os("CARGO_BIN_EXE_conform") {
		return PathBuf::from(path);
	}

	let exe = std::env::current_exe().expect("test executable path");
	let profile_dir = exe.parent().and_then(|deps| deps.parent()).expect("test executable under target/<profile>/deps");
	let bin = profile_dir.join(if cfg!(windows) { "conform.exe" } else { "conform" });
	assert!(bin.exists(), "conform binary not built at {}", bin.display());
	bin
}
