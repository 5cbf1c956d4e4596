use std::path::PathBuf;

use conform::shape::defaults;

use crate::cmd::OutputMode;
use crate::cmd::util::{emit, read_value};
use crate::error::Result;

/// Print the fully populated default value of the template at `template`.
pub fn run(template: PathBuf, mode: OutputMode) -> Result<()> {
	let template = read_value(&template)?;
	emit(&defaults(&template)?, mode)
}
