mod icon_set;

use std::path::Path;

use color_eyre::eyre::Result;

fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();

	tracing::info!("Generating icon set.");

	icon_set::generate_all(Path::new("."), &mut std::io::stdout().lock())?;

	Ok(())
}
