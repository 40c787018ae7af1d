use std::fs::File;
use std::path::Path;

use nvset::nvs::{NamedValueSet, Result, from_json_reader};

/// Load a JSON-marshalled container from disk.
pub fn load_nvs(path: &Path) -> Result<NamedValueSet> {
	let file = File::open(path)?;
	from_json_reader(file)
}
