use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NvsError>;

/// Errors produced by named-value container operations.
///
/// Every failure is reported synchronously at the call that caused it and
/// leaves the container in its prior valid state.
#[derive(Debug, Error)]
pub enum NvsError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Key lookup failed in its namespace.
	#[error("name not found: {name}")]
	NameNotFound {
		/// Key that was looked up.
		name: crate::nvs::Key,
	},
	/// Key already bound in its namespace.
	#[error("duplicate name: {name}")]
	DuplicateName {
		/// Key that collided.
		name: crate::nvs::Key,
	},
	/// Stored tag differs from the requested type.
	#[error("bad type: expected {expected}, got {got}")]
	BadType {
		/// Requested type label.
		expected: &'static str,
		/// Actual type label.
		got: &'static str,
	},
	/// Array value had zero elements.
	#[error("zero sized array for name: {name}")]
	ZeroSizedArray {
		/// Key the array was being bound to.
		name: crate::nvs::Key,
	},
	/// Enumeration index beyond the last entry.
	#[error("index out of range: index={index}, len={len}")]
	IndexOutOfRange {
		/// Offending enumeration index.
		index: usize,
		/// Total entry count across both namespaces.
		len: usize,
	},
	/// A set may never contain itself as a nested value.
	#[error("recursive add of a set to itself")]
	RecursiveAdd,
	/// Allocation failed before any state change was committed.
	#[error("out of memory")]
	OutOfMemory,
	/// Marshalled input did not follow the expected name grammar.
	#[error("invalid name format: {detail}")]
	InvalidNameFormat {
		/// Decoder-supplied detail text.
		detail: String,
	},
	/// Marshalled input ended mid-value.
	#[error("unexpected end of input")]
	UnexpectedEof,
	/// Marshalled input ended cleanly between values.
	#[error("end of input")]
	EndOfFile,
}
