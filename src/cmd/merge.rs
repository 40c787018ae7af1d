use std::path::PathBuf;

use nvset::nvs::{Result, to_json_string};

use crate::cmd::util::load_nvs;

#[derive(clap::Args)]
pub struct Args {
	pub base: PathBuf,
	pub extra: PathBuf,
}

/// Merge `extra` into `base` and print the result as JSON. Entries already
/// present in `base` win.
pub fn run(args: Args) -> Result<()> {
	let Args { base, extra } = args;

	let mut merged = load_nvs(&base)?;
	merged.merge(&load_nvs(&extra)?)?;

	println!("{}", to_json_string(&merged)?);
	Ok(())
}
