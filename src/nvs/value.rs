use crate::nvs::set::NamedValueSet;
use crate::nvs::{NvsError, Result};

/// Opaque object handle stored verbatim.
///
/// An `ObjRef` records a relation to some caller-side object, never
/// ownership: the container copies the handle bits, equality compares the
/// bits, and nothing ever dereferences or frees what they point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjRef(pub u64);

/// One dynamically-typed value.
///
/// Exactly one variant is active at a time. String, array, and nested-set
/// payloads are owned by the value; clones are deep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
	/// Boolean scalar.
	Bool(bool),
	/// Unsigned 8-bit scalar.
	Byte(u8),
	/// Signed 32-bit scalar.
	Int32(i32),
	/// Unsigned 32-bit scalar.
	UInt32(u32),
	/// Signed 64-bit scalar.
	Int64(i64),
	/// Unsigned 64-bit scalar.
	UInt64(u64),
	/// 64-bit float scalar.
	Float(f64),
	/// Owned text.
	String(Box<str>),
	/// Unowned opaque handle.
	Object(ObjRef),
	/// Owned nested container.
	Set(Box<NamedValueSet>),
	/// Owned byte array.
	ByteArray(Vec<u8>),
	/// Owned signed 32-bit array.
	Int32Array(Vec<i32>),
	/// Owned unsigned 32-bit array.
	UInt32Array(Vec<u32>),
	/// Owned signed 64-bit array.
	Int64Array(Vec<i64>),
	/// Owned unsigned 64-bit array.
	UInt64Array(Vec<u64>),
	/// Owned float array.
	FloatArray(Vec<f64>),
	/// Owned string array.
	StringArray(Vec<Box<str>>),
	/// Array of unowned opaque handles.
	ObjectArray(Vec<ObjRef>),
}

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
	/// Boolean scalar.
	Bool,
	/// Unsigned 8-bit scalar.
	Byte,
	/// Signed 32-bit scalar.
	Int32,
	/// Unsigned 32-bit scalar.
	UInt32,
	/// Signed 64-bit scalar.
	Int64,
	/// Unsigned 64-bit scalar.
	UInt64,
	/// 64-bit float scalar.
	Float,
	/// Owned text.
	String,
	/// Unowned opaque handle.
	Object,
	/// Nested container.
	Set,
	/// Byte array.
	ByteArray,
	/// Signed 32-bit array.
	Int32Array,
	/// Unsigned 32-bit array.
	UInt32Array,
	/// Signed 64-bit array.
	Int64Array,
	/// Unsigned 64-bit array.
	UInt64Array,
	/// Float array.
	FloatArray,
	/// String array.
	StringArray,
	/// Opaque handle array.
	ObjectArray,
}

impl ValueKind {
	/// Stable lowercase label, used in error messages.
	pub fn as_str(&self) -> &'static str {
		match self {
			ValueKind::Bool => "bool",
			ValueKind::Byte => "byte",
			ValueKind::Int32 => "i32",
			ValueKind::UInt32 => "u32",
			ValueKind::Int64 => "i64",
			ValueKind::UInt64 => "u64",
			ValueKind::Float => "f64",
			ValueKind::String => "string",
			ValueKind::Object => "object",
			ValueKind::Set => "set",
			ValueKind::ByteArray => "byte array",
			ValueKind::Int32Array => "i32 array",
			ValueKind::UInt32Array => "u32 array",
			ValueKind::Int64Array => "i64 array",
			ValueKind::UInt64Array => "u64 array",
			ValueKind::FloatArray => "f64 array",
			ValueKind::StringArray => "string array",
			ValueKind::ObjectArray => "object array",
		}
	}

	/// Whether this kind is one of the array variants.
	pub fn is_array(&self) -> bool {
		matches!(
			self,
			ValueKind::ByteArray
				| ValueKind::Int32Array
				| ValueKind::UInt32Array
				| ValueKind::Int64Array
				| ValueKind::UInt64Array
				| ValueKind::FloatArray
				| ValueKind::StringArray
				| ValueKind::ObjectArray
		)
	}
}

impl Value {
	/// Active discriminant.
	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Bool(_) => ValueKind::Bool,
			Value::Byte(_) => ValueKind::Byte,
			Value::Int32(_) => ValueKind::Int32,
			Value::UInt32(_) => ValueKind::UInt32,
			Value::Int64(_) => ValueKind::Int64,
			Value::UInt64(_) => ValueKind::UInt64,
			Value::Float(_) => ValueKind::Float,
			Value::String(_) => ValueKind::String,
			Value::Object(_) => ValueKind::Object,
			Value::Set(_) => ValueKind::Set,
			Value::ByteArray(_) => ValueKind::ByteArray,
			Value::Int32Array(_) => ValueKind::Int32Array,
			Value::UInt32Array(_) => ValueKind::UInt32Array,
			Value::Int64Array(_) => ValueKind::Int64Array,
			Value::UInt64Array(_) => ValueKind::UInt64Array,
			Value::FloatArray(_) => ValueKind::FloatArray,
			Value::StringArray(_) => ValueKind::StringArray,
			Value::ObjectArray(_) => ValueKind::ObjectArray,
		}
	}

	/// Element count: 1 for scalars, strings, objects, and nested sets;
	/// array length for array variants.
	pub fn size(&self) -> usize {
		match self {
			Value::ByteArray(v) => v.len(),
			Value::Int32Array(v) => v.len(),
			Value::UInt32Array(v) => v.len(),
			Value::Int64Array(v) => v.len(),
			Value::UInt64Array(v) => v.len(),
			Value::FloatArray(v) => v.len(),
			Value::StringArray(v) => v.len(),
			Value::ObjectArray(v) => v.len(),
			_ => 1,
		}
	}

	fn bad_type(&self, expected: ValueKind) -> NvsError {
		NvsError::BadType {
			expected: expected.as_str(),
			got: self.kind().as_str(),
		}
	}

	/// Read as boolean.
	pub fn as_bool(&self) -> Result<bool> {
		match self {
			Value::Bool(v) => Ok(*v),
			other => Err(other.bad_type(ValueKind::Bool)),
		}
	}

	/// Read as byte.
	pub fn as_byte(&self) -> Result<u8> {
		match self {
			Value::Byte(v) => Ok(*v),
			other => Err(other.bad_type(ValueKind::Byte)),
		}
	}

	/// Read as signed 32-bit integer.
	pub fn as_i32(&self) -> Result<i32> {
		match self {
			Value::Int32(v) => Ok(*v),
			other => Err(other.bad_type(ValueKind::Int32)),
		}
	}

	/// Read as unsigned 32-bit integer.
	pub fn as_u32(&self) -> Result<u32> {
		match self {
			Value::UInt32(v) => Ok(*v),
			other => Err(other.bad_type(ValueKind::UInt32)),
		}
	}

	/// Read as signed 64-bit integer.
	pub fn as_i64(&self) -> Result<i64> {
		match self {
			Value::Int64(v) => Ok(*v),
			other => Err(other.bad_type(ValueKind::Int64)),
		}
	}

	/// Read as unsigned 64-bit integer.
	pub fn as_u64(&self) -> Result<u64> {
		match self {
			Value::UInt64(v) => Ok(*v),
			other => Err(other.bad_type(ValueKind::UInt64)),
		}
	}

	/// Read as 64-bit float.
	pub fn as_f64(&self) -> Result<f64> {
		match self {
			Value::Float(v) => Ok(*v),
			other => Err(other.bad_type(ValueKind::Float)),
		}
	}

	/// Read as text.
	pub fn as_str(&self) -> Result<&str> {
		match self {
			Value::String(v) => Ok(v),
			other => Err(other.bad_type(ValueKind::String)),
		}
	}

	/// Read as opaque handle.
	pub fn as_object(&self) -> Result<ObjRef> {
		match self {
			Value::Object(v) => Ok(*v),
			other => Err(other.bad_type(ValueKind::Object)),
		}
	}

	/// Read as nested container.
	pub fn as_set(&self) -> Result<&NamedValueSet> {
		match self {
			Value::Set(v) => Ok(v),
			other => Err(other.bad_type(ValueKind::Set)),
		}
	}

	/// Read as byte array.
	pub fn as_byte_array(&self) -> Result<&[u8]> {
		match self {
			Value::ByteArray(v) => Ok(v),
			other => Err(other.bad_type(ValueKind::ByteArray)),
		}
	}

	/// Read as signed 32-bit array.
	pub fn as_i32_array(&self) -> Result<&[i32]> {
		match self {
			Value::Int32Array(v) => Ok(v),
			other => Err(other.bad_type(ValueKind::Int32Array)),
		}
	}

	/// Read as unsigned 32-bit array.
	pub fn as_u32_array(&self) -> Result<&[u32]> {
		match self {
			Value::UInt32Array(v) => Ok(v),
			other => Err(other.bad_type(ValueKind::UInt32Array)),
		}
	}

	/// Read as signed 64-bit array.
	pub fn as_i64_array(&self) -> Result<&[i64]> {
		match self {
			Value::Int64Array(v) => Ok(v),
			other => Err(other.bad_type(ValueKind::Int64Array)),
		}
	}

	/// Read as unsigned 64-bit array.
	pub fn as_u64_array(&self) -> Result<&[u64]> {
		match self {
			Value::UInt64Array(v) => Ok(v),
			other => Err(other.bad_type(ValueKind::UInt64Array)),
		}
	}

	/// Read as float array.
	pub fn as_f64_array(&self) -> Result<&[f64]> {
		match self {
			Value::FloatArray(v) => Ok(v),
			other => Err(other.bad_type(ValueKind::FloatArray)),
		}
	}

	/// Read as string array.
	pub fn as_str_array(&self) -> Result<&[Box<str>]> {
		match self {
			Value::StringArray(v) => Ok(v),
			other => Err(other.bad_type(ValueKind::StringArray)),
		}
	}

	/// Read as opaque handle array.
	pub fn as_object_array(&self) -> Result<&[ObjRef]> {
		match self {
			Value::ObjectArray(v) => Ok(v),
			other => Err(other.bad_type(ValueKind::ObjectArray)),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<u8> for Value {
	fn from(v: u8) -> Self {
		Value::Byte(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int32(v)
	}
}

impl From<u32> for Value {
	fn from(v: u32) -> Self {
		Value::UInt32(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int64(v)
	}
}

impl From<u64> for Value {
	fn from(v: u64) -> Self {
		Value::UInt64(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(Box::from(v))
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::String(v.into_boxed_str())
	}
}

impl From<ObjRef> for Value {
	fn from(v: ObjRef) -> Self {
		Value::Object(v)
	}
}

impl From<NamedValueSet> for Value {
	fn from(v: NamedValueSet) -> Self {
		Value::Set(Box::new(v))
	}
}

impl From<&NamedValueSet> for Value {
	/// Deep-copy snapshot that remembers which set it was taken from, so
	/// that `add` can reject inserting a set into itself.
	fn from(v: &NamedValueSet) -> Self {
		Value::Set(Box::new(v.clone_preserving_id()))
	}
}

impl From<Vec<u8>> for Value {
	fn from(v: Vec<u8>) -> Self {
		Value::ByteArray(v)
	}
}

impl From<&[u8]> for Value {
	fn from(v: &[u8]) -> Self {
		Value::ByteArray(v.to_vec())
	}
}

impl From<Vec<i32>> for Value {
	fn from(v: Vec<i32>) -> Self {
		Value::Int32Array(v)
	}
}

impl From<&[i32]> for Value {
	fn from(v: &[i32]) -> Self {
		Value::Int32Array(v.to_vec())
	}
}

impl From<Vec<u32>> for Value {
	fn from(v: Vec<u32>) -> Self {
		Value::UInt32Array(v)
	}
}

impl From<&[u32]> for Value {
	fn from(v: &[u32]) -> Self {
		Value::UInt32Array(v.to_vec())
	}
}

impl From<Vec<i64>> for Value {
	fn from(v: Vec<i64>) -> Self {
		Value::Int64Array(v)
	}
}

impl From<&[i64]> for Value {
	fn from(v: &[i64]) -> Self {
		Value::Int64Array(v.to_vec())
	}
}

impl From<Vec<u64>> for Value {
	fn from(v: Vec<u64>) -> Self {
		Value::UInt64Array(v)
	}
}

impl From<&[u64]> for Value {
	fn from(v: &[u64]) -> Self {
		Value::UInt64Array(v.to_vec())
	}
}

impl From<Vec<f64>> for Value {
	fn from(v: Vec<f64>) -> Self {
		Value::FloatArray(v)
	}
}

impl From<&[f64]> for Value {
	fn from(v: &[f64]) -> Self {
		Value::FloatArray(v.to_vec())
	}
}

impl From<Vec<Box<str>>> for Value {
	fn from(v: Vec<Box<str>>) -> Self {
		Value::StringArray(v)
	}
}

impl From<Vec<String>> for Value {
	fn from(v: Vec<String>) -> Self {
		Value::StringArray(v.into_iter().map(String::into_boxed_str).collect())
	}
}

impl From<&[&str]> for Value {
	fn from(v: &[&str]) -> Self {
		Value::StringArray(v.iter().map(|item| Box::from(*item)).collect())
	}
}

impl From<Vec<ObjRef>> for Value {
	fn from(v: Vec<ObjRef>) -> Self {
		Value::ObjectArray(v)
	}
}

impl From<&[ObjRef]> for Value {
	fn from(v: &[ObjRef]) -> Self {
		Value::ObjectArray(v.to_vec())
	}
}
