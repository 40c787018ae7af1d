mod error;
mod fmt;
mod key;
#[cfg(feature = "serde")]
mod marshal;
mod set;
mod value;

/// Error and result aliases.
pub use error::{NvsError, Result};
/// Entry key types and namespace discriminant.
pub use key::{Key, KeyKind, KeyRef};
/// JSON marshalling helpers.
#[cfg(feature = "serde")]
pub use marshal::{from_json_reader, from_json_str, to_json_string};
/// Container and entry types.
pub use set::{Entry, NamedValueSet};
/// Tagged value, its discriminant, and the opaque handle type.
pub use value::{ObjRef, Value, ValueKind};
