use std::path::PathBuf;

use nvset::nvs::{KeyKind, Result};

use crate::cmd::util::load_nvs;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
}

/// Print entry counts and a line per entry in enumeration order.
pub fn run(args: Args) -> Result<()> {
	let Args { path } = args;

	let nvs = load_nvs(&path)?;
	let number_keys = nvs.iter().filter(|(key, _)| key.kind() == KeyKind::Number).count();

	println!("path: {}", path.display());
	println!("entries: {}", nvs.num_names());
	println!("number_keys: {number_keys}");
	println!("string_keys: {}", nvs.num_names() - number_keys);

	for (key, value) in nvs.iter() {
		println!("  {key}: {}[{}] = {value}", value.kind().as_str(), value.size());
	}

	Ok(())
}
