use std::fmt;

use crate::nvs::{Key, KeyRef, NamedValueSet, ObjRef, Value};

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.as_ref(), f)
	}
}

impl fmt::Display for KeyRef<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			KeyRef::Number(n) => write!(f, "{n}"),
			KeyRef::Str(s) => write!(f, "{s:?}"),
		}
	}
}

impl fmt::Display for ObjRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{:016x}", self.0)
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Bool(v) => write!(f, "{v}"),
			Value::Byte(v) => write!(f, "{v}"),
			Value::Int32(v) => write!(f, "{v}"),
			Value::UInt32(v) => write!(f, "{v}"),
			Value::Int64(v) => write!(f, "{v}"),
			Value::UInt64(v) => write!(f, "{v}"),
			Value::Float(v) => write!(f, "{v}"),
			Value::String(v) => write!(f, "{v:?}"),
			Value::Object(v) => write!(f, "{v}"),
			Value::Set(v) => write!(f, "{v}"),
			Value::ByteArray(v) => write_array(f, v),
			Value::Int32Array(v) => write_array(f, v),
			Value::UInt32Array(v) => write_array(f, v),
			Value::Int64Array(v) => write_array(f, v),
			Value::UInt64Array(v) => write_array(f, v),
			Value::FloatArray(v) => write_array(f, v),
			Value::StringArray(v) => write_quoted_array(f, v),
			Value::ObjectArray(v) => write_array(f, v),
		}
	}
}

impl fmt::Display for NamedValueSet {
	/// Flat `key = value` dump with brace-wrapped nested sets. Inspection
	/// aid only; the marshalled form is owned by the serde layer.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		let mut first = true;
		for (key, value) in self.iter() {
			if !first {
				f.write_str(",")?;
			}
			first = false;
			write!(f, " {key} = {value}")?;
		}
		if first { f.write_str("}") } else { f.write_str(" }") }
	}
}

fn write_array<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
	f.write_str("[")?;
	for (index, item) in items.iter().enumerate() {
		if index > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{item}")?;
	}
	f.write_str("]")
}

fn write_quoted_array(f: &mut fmt::Formatter<'_>, items: &[Box<str>]) -> fmt::Result {
	f.write_str("[")?;
	for (index, item) in items.iter().enumerate() {
		if index > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{item:?}")?;
	}
	f.write_str("]")
}

#[cfg(test)]
mod tests {
	use crate::nvs::{NamedValueSet, Value};

	#[test]
	fn empty_set_renders_as_braces() {
		assert_eq!(NamedValueSet::new().to_string(), "{}");
	}

	#[test]
	fn entries_render_in_grouped_order() {
		let mut nvs = NamedValueSet::new();
		nvs.add("name", "dev0").unwrap();
		nvs.add(4u64, vec![1u8, 2]).unwrap();
		assert_eq!(nvs.to_string(), r#"{ 4 = [1, 2], "name" = "dev0" }"#);
	}

	#[test]
	fn nested_sets_render_recursively() {
		let mut inner = NamedValueSet::new();
		inner.add("x", 1i32).unwrap();

		let mut outer = NamedValueSet::new();
		outer.add("inner", Value::from(&inner)).unwrap();
		assert_eq!(outer.to_string(), r#"{ "inner" = { "x" = 1 } }"#);
	}
}
