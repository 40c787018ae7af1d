/// Owned entry key.
///
/// Number and string keys occupy independent namespaces: `Key::Number(3)` and
/// `Key::Str("3")` may coexist in the same container without conflict.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
	/// Numeric key.
	Number(u64),
	/// Text key.
	Str(Box<str>),
}

impl Key {
	/// Namespace this key belongs to.
	pub fn kind(&self) -> KeyKind {
		match self {
			Key::Number(_) => KeyKind::Number,
			Key::Str(_) => KeyKind::Str,
		}
	}

	/// Borrowed view of this key.
	pub fn as_ref(&self) -> KeyRef<'_> {
		match self {
			Key::Number(n) => KeyRef::Number(*n),
			Key::Str(s) => KeyRef::Str(s),
		}
	}
}

/// Borrowed lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRef<'a> {
	/// Numeric key.
	Number(u64),
	/// Text key.
	Str(&'a str),
}

impl KeyRef<'_> {
	/// Namespace this key belongs to.
	pub fn kind(&self) -> KeyKind {
		match self {
			KeyRef::Number(_) => KeyKind::Number,
			KeyRef::Str(_) => KeyKind::Str,
		}
	}

	/// Owned copy of this key.
	pub fn to_owned(&self) -> Key {
		match self {
			KeyRef::Number(n) => Key::Number(*n),
			KeyRef::Str(s) => Key::Str(Box::from(*s)),
		}
	}
}

/// Key namespace discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyKind {
	/// Numeric-key namespace.
	Number,
	/// String-key namespace.
	Str,
}

impl KeyKind {
	/// Stable lowercase label, used in error messages.
	pub fn as_str(&self) -> &'static str {
		match self {
			KeyKind::Number => "number key",
			KeyKind::Str => "string key",
		}
	}
}

impl From<u64> for Key {
	fn from(n: u64) -> Self {
		Key::Number(n)
	}
}

impl From<u32> for Key {
	fn from(n: u32) -> Self {
		Key::Number(u64::from(n))
	}
}

impl From<&str> for Key {
	fn from(s: &str) -> Self {
		Key::Str(Box::from(s))
	}
}

impl From<String> for Key {
	fn from(s: String) -> Self {
		Key::Str(s.into_boxed_str())
	}
}

impl From<u64> for KeyRef<'_> {
	fn from(n: u64) -> Self {
		KeyRef::Number(n)
	}
}

impl From<u32> for KeyRef<'_> {
	fn from(n: u32) -> Self {
		KeyRef::Number(u64::from(n))
	}
}

impl<'a> From<&'a str> for KeyRef<'a> {
	fn from(s: &'a str) -> Self {
		KeyRef::Str(s)
	}
}

impl<'a> From<&'a Key> for KeyRef<'a> {
	fn from(key: &'a Key) -> Self {
		key.as_ref()
	}
}
