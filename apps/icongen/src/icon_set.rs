use std::io::Write;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IconTarget {
	pub size: u32,
	pub file_name: &'static str,
}

pub const DEFAULT_TARGETS: [IconTarget; 3] = [
	IconTarget { size: 16, file_name: "icon16.png" },
	IconTarget { size: 48, file_name: "icon48.png" },
	IconTarget { size: 128, file_name: "icon128.png" },
];

pub fn generate_all(dir: &Path, out: &mut impl Write) -> Result<Vec<PathBuf>> {
	generate(dir, &DEFAULT_TARGETS, out)
}

/// Writes each target into `dir` in order, stopping at the first failure.
///
/// A `Created <file>` line goes to `out` after each file is written.
pub fn generate(
	dir: &Path,
	targets: &[IconTarget],
	out: &mut impl Write,
) -> Result<Vec<PathBuf>> {
	let mut written = Vec::with_capacity(targets.len());

	for target in targets {
		let path = dir.join(target.file_name);

		icon_render::write_icon(target.size, &path)
			.wrap_err_with(|| format!("Failed to create {}", target.file_name))?;

		writeln!(out, "Created {}", target.file_name)
			.wrap_err("Failed to report created icon")?;

		written.push(path);
	}

	tracing::info!(count = written.len(), dir = %dir.display(), "Icon set generated.");

	Ok(written)
}
