//! JSON marshalling helpers over the serde derives.
//!
//! The container's wire grammar is owned by whichever serde format the
//! transport picks; these helpers cover the JSON case used by the CLI and
//! map decode failures onto the container's reserved transport codes.

use std::io::Read;

use crate::nvs::{NamedValueSet, NvsError, Result};

/// Marshal a container to a JSON string.
pub fn to_json_string(nvs: &NamedValueSet) -> Result<String> {
	serde_json::to_string_pretty(nvs).map_err(|err| NvsError::InvalidNameFormat { detail: err.to_string() })
}

/// Reconstruct a container from JSON text.
///
/// Truncated input reports `UnexpectedEof`; any other grammar problem
/// reports `InvalidNameFormat`.
pub fn from_json_str(text: &str) -> Result<NamedValueSet> {
	serde_json::from_str(text).map_err(map_json_err)
}

/// Reconstruct a container from a JSON byte stream.
pub fn from_json_reader(reader: impl Read) -> Result<NamedValueSet> {
	serde_json::from_reader(reader).map_err(map_json_err)
}

fn map_json_err(err: serde_json::Error) -> NvsError {
	if err.is_eof() {
		NvsError::UnexpectedEof
	} else if err.is_io() {
		NvsError::Io(std::io::Error::from(err))
	} else {
		NvsError::InvalidNameFormat { detail: err.to_string() }
	}
}
