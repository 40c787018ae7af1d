use std::path::PathBuf;

use nvset::nvs::Result;

use crate::cmd::util::load_nvs;

#[derive(clap::Args)]
pub struct Args {
	pub pattern: PathBuf,
	pub other: PathBuf,
}

/// Report whether `pattern` is a subset of `other`. Exits non-zero when the
/// relation does not hold, so scripts can branch on it.
pub fn run(args: Args) -> Result<()> {
	let Args { pattern, other } = args;

	let holds = load_nvs(&pattern)?.subset(&load_nvs(&other)?);
	println!("subset: {holds}");
	if !holds {
		std::process::exit(2);
	}
	Ok(())
}
