use std::borrow::Borrow;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::nvs::{Key, KeyKind, KeyRef, NvsError, Result, Value, ValueKind};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate an instance id no live set has used before.
fn fresh_id() -> u64 {
	NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// One key/value binding inside a namespace group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<K> {
	/// Key, unique within its namespace.
	pub key: K,
	/// Bound value.
	pub value: Value,
}

/// Ordered entries of one key namespace. Appends preserve insertion order,
/// removals preserve the relative order of survivors.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Group<K> {
	entries: Vec<Entry<K>>,
}

impl<K> Group<K> {
	fn position<Q>(&self, key: &Q) -> Option<usize>
	where
		K: Borrow<Q>,
		Q: Eq + ?Sized,
	{
		self.entries.iter().position(|entry| entry.key.borrow() == key)
	}

	fn get<Q>(&self, key: &Q) -> Option<&Value>
	where
		K: Borrow<Q>,
		Q: Eq + ?Sized,
	{
		self.position(key).map(|index| &self.entries[index].value)
	}

	fn push(&mut self, key: K, value: Value) -> Result<()> {
		self.entries.try_reserve(1).map_err(|_| NvsError::OutOfMemory)?;
		self.entries.push(Entry { key, value });
		Ok(())
	}

	fn remove<Q>(&mut self, key: &Q) -> Option<Entry<K>>
	where
		K: Borrow<Q>,
		Q: Eq + ?Sized,
	{
		self.position(key).map(|index| self.entries.remove(index))
	}

	fn len(&self) -> usize {
		self.entries.len()
	}
}

/// Ordered, dual-keyed container of dynamically-typed values.
///
/// Entries live in two independent namespaces, one keyed by number and one
/// by string. Enumeration by index walks the number-key group first, then
/// the string-key group, each in insertion order. The container owns every
/// string, array, and nested-set payload; copies are deep, and no payload is
/// ever shared between two live instances.
///
/// The container is not internally thread-safe: callers serialize concurrent
/// mutation externally (which `&`/`&mut` borrows already enforce in-process).
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedValueSet {
	numbers: Group<u64>,
	strings: Group<Box<str>>,
	/// Instance identity for the recursive-add guard. Never part of the
	/// value: equality, marshalling, and clones all ignore it.
	#[cfg_attr(feature = "serde", serde(skip, default = "fresh_id"))]
	id: u64,
}

impl NamedValueSet {
	/// Create an empty container.
	pub fn new() -> Self {
		Self {
			numbers: Group::default(),
			strings: Group::default(),
			id: fresh_id(),
		}
	}

	/// Deep copy that keeps the source's instance id, so the copy still
	/// answers to "is this the same set?" at `add` time. Only
	/// `Value::from(&NamedValueSet)` uses this; every other copy path
	/// allocates a fresh id.
	pub(crate) fn clone_preserving_id(&self) -> Self {
		let mut copy = self.clone();
		copy.id = self.id;
		copy
	}

	/// Bind `value` to `key`, appending to the key's namespace group.
	///
	/// Fails with `DuplicateName` if the key is already bound in its own
	/// namespace, `ZeroSizedArray` for an array value with no elements,
	/// `RecursiveAdd` when asked to nest the set inside itself, and
	/// `OutOfMemory` if the entry cannot be reserved. No failure mutates
	/// the container.
	pub fn add(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<()> {
		let key = key.into();
		let mut value = value.into();

		let duplicate = match &key {
			Key::Number(n) => self.numbers.position(n).is_some(),
			Key::Str(s) => self.strings.position(&**s).is_some(),
		};
		if duplicate {
			return Err(NvsError::DuplicateName { name: key });
		}

		if value.kind().is_array() && value.size() == 0 {
			return Err(NvsError::ZeroSizedArray { name: key });
		}

		if let Value::Set(inner) = &mut value {
			if inner.id == self.id {
				return Err(NvsError::RecursiveAdd);
			}
			// The snapshot's source identity is only meaningful until it
			// lands somewhere; restamp so it cannot alias anything later.
			inner.id = fresh_id();
		}

		match key {
			Key::Number(n) => self.numbers.push(n, value),
			Key::Str(s) => self.strings.push(s, value),
		}
	}

	/// Look up the value bound to `key` in the key's own namespace.
	pub fn get<'k>(&self, key: impl Into<KeyRef<'k>>) -> Result<&Value> {
		match key.into() {
			KeyRef::Number(n) => self.numbers.get(&n).ok_or(NvsError::NameNotFound { name: Key::Number(n) }),
			KeyRef::Str(s) => self.strings.get(s).ok_or_else(|| NvsError::NameNotFound { name: Key::from(s) }),
		}
	}

	/// Remove the entry bound to `key`.
	pub fn delete<'k>(&mut self, key: impl Into<KeyRef<'k>>) -> Result<()> {
		match key.into() {
			KeyRef::Number(n) => self.numbers.remove(&n).map(|_| ()).ok_or(NvsError::NameNotFound { name: Key::Number(n) }),
			KeyRef::Str(s) => self.strings.remove(s).map(|_| ()).ok_or_else(|| NvsError::NameNotFound { name: Key::from(s) }),
		}
	}

	/// Whether `key` is bound in its own namespace.
	pub fn has<'k>(&self, key: impl Into<KeyRef<'k>>) -> bool {
		match key.into() {
			KeyRef::Number(n) => self.numbers.position(&n).is_some(),
			KeyRef::Str(s) => self.strings.position(s).is_some(),
		}
	}

	/// Tag of the value bound to `key`.
	pub fn kind_of<'k>(&self, key: impl Into<KeyRef<'k>>) -> Result<ValueKind> {
		self.get(key).map(Value::kind)
	}

	/// Element count of the value bound to `key`.
	pub fn size_of<'k>(&self, key: impl Into<KeyRef<'k>>) -> Result<usize> {
		self.get(key).map(Value::size)
	}

	/// Total entry count across both namespaces.
	pub fn num_names(&self) -> usize {
		self.numbers.len() + self.strings.len()
	}

	/// Alias of [`NamedValueSet::num_names`].
	pub fn len(&self) -> usize {
		self.num_names()
	}

	/// Whether the container holds no entries.
	pub fn is_empty(&self) -> bool {
		self.num_names() == 0
	}

	/// Remove every entry from both namespaces.
	pub fn clear(&mut self) {
		self.numbers.entries.clear();
		self.strings.entries.clear();
	}

	/// Namespace of the entry at enumeration `index` (number-key group
	/// first, then string-key group).
	pub fn name_kind_at(&self, index: usize) -> Result<KeyKind> {
		let i = self.numbers.len();
		if index < i {
			Ok(KeyKind::Number)
		} else if index < self.num_names() {
			Ok(KeyKind::Str)
		} else {
			Err(NvsError::IndexOutOfRange { index, len: self.num_names() })
		}
	}

	/// Number key at enumeration `index`.
	///
	/// Returns `BadType` when the index lands in the string-key group and
	/// `IndexOutOfRange` past the last entry.
	pub fn number_name_at(&self, index: usize) -> Result<u64> {
		match self.name_kind_at(index)? {
			KeyKind::Number => Ok(self.numbers.entries[index].key),
			KeyKind::Str => Err(NvsError::BadType {
				expected: KeyKind::Number.as_str(),
				got: KeyKind::Str.as_str(),
			}),
		}
	}

	/// String key at enumeration `index`.
	///
	/// Returns `BadType` when the index lands in the number-key group and
	/// `IndexOutOfRange` past the last entry.
	pub fn string_name_at(&self, index: usize) -> Result<&str> {
		match self.name_kind_at(index)? {
			KeyKind::Str => Ok(&self.strings.entries[index - self.numbers.len()].key),
			KeyKind::Number => Err(NvsError::BadType {
				expected: KeyKind::Str.as_str(),
				got: KeyKind::Number.as_str(),
			}),
		}
	}

	/// Key at enumeration `index`, untyped.
	pub fn name_at(&self, index: usize) -> Result<KeyRef<'_>> {
		match self.name_kind_at(index)? {
			KeyKind::Number => Ok(KeyRef::Number(self.numbers.entries[index].key)),
			KeyKind::Str => Ok(KeyRef::Str(&self.strings.entries[index - self.numbers.len()].key)),
		}
	}

	/// Iterate entries in grouped enumeration order.
	pub fn iter(&self) -> impl Iterator<Item = (KeyRef<'_>, &Value)> {
		self.numbers
			.entries
			.iter()
			.map(|entry| (KeyRef::Number(entry.key), &entry.value))
			.chain(self.strings.entries.iter().map(|entry| (KeyRef::Str(&entry.key), &entry.value)))
	}

	/// Whether every entry of `self` is present in `other` with a matching
	/// value. Nested sets are matched by recursive subset; the empty set is
	/// a subset of every set.
	pub fn subset(&self, other: &NamedValueSet) -> bool {
		self.subset_inner(other, false)
	}

	fn subset_inner(&self, other: &NamedValueSet, require_eq: bool) -> bool {
		for (key, value) in self.iter() {
			let Ok(theirs) = other.get(key) else {
				return false;
			};
			if !value_matches(value, theirs, require_eq) {
				return false;
			}
		}
		true
	}

	/// Copy entries of `other` whose keys are absent here. Existing entries
	/// win; a key collision is not an error.
	pub fn merge(&mut self, other: &NamedValueSet) -> Result<()> {
		for (key, value) in other.iter() {
			if !self.has(key) {
				self.add(key.to_owned(), value.clone())?;
			}
		}
		Ok(())
	}
}

/// Same name, same tag, same payload. On the subset path nested sets match
/// by subset rather than equality.
fn value_matches(ours: &Value, theirs: &Value, require_eq: bool) -> bool {
	match (ours, theirs) {
		(Value::Set(inner), Value::Set(outer)) if !require_eq => inner.subset(outer),
		_ => ours == theirs,
	}
}

impl Default for NamedValueSet {
	fn default() -> Self {
		Self::new()
	}
}

impl Clone for NamedValueSet {
	fn clone(&self) -> Self {
		Self {
			numbers: self.numbers.clone(),
			strings: self.strings.clone(),
			id: fresh_id(),
		}
	}
}

impl PartialEq for NamedValueSet {
	/// Structural equality: same entry count, same keys, equal values,
	/// recursing into nested sets. Insertion order does not participate.
	fn eq(&self, other: &Self) -> bool {
		self.numbers.len() == other.numbers.len()
			&& self.strings.len() == other.strings.len()
			&& self.subset_inner(other, true)
	}
}

#[cfg(test)]
mod tests {
	use super::NamedValueSet;
	use crate::nvs::{Key, KeyKind, NvsError, ObjRef, Value, ValueKind};

	fn assert_bad_type(result: &NvsError) {
		assert!(matches!(result, NvsError::BadType { .. }), "expected BadType, got {result:?}");
	}

	#[test]
	fn add_then_get_round_trips_every_scalar() {
		let mut nvs = NamedValueSet::new();
		nvs.add("flag", true).unwrap();
		nvs.add("byte", 0xa5u8).unwrap();
		nvs.add("i32", -3i32).unwrap();
		nvs.add("u32", 3u32).unwrap();
		nvs.add("i64", -9_000_000_000i64).unwrap();
		nvs.add("u64", 9_000_000_000u64).unwrap();
		nvs.add("f64", 3.25f64).unwrap();
		nvs.add("text", "payload").unwrap();
		nvs.add("obj", ObjRef(0x1000)).unwrap();

		assert!(nvs.get("flag").unwrap().as_bool().unwrap());
		assert_eq!(nvs.get("byte").unwrap().as_byte().unwrap(), 0xa5);
		assert_eq!(nvs.get("i32").unwrap().as_i32().unwrap(), -3);
		assert_eq!(nvs.get("u32").unwrap().as_u32().unwrap(), 3);
		assert_eq!(nvs.get("i64").unwrap().as_i64().unwrap(), -9_000_000_000);
		assert_eq!(nvs.get("u64").unwrap().as_u64().unwrap(), 9_000_000_000);
		assert_eq!(nvs.get("f64").unwrap().as_f64().unwrap(), 3.25);
		assert_eq!(nvs.get("text").unwrap().as_str().unwrap(), "payload");
		assert_eq!(nvs.get("obj").unwrap().as_object().unwrap(), ObjRef(0x1000));
	}

	#[test]
	fn add_then_get_round_trips_every_array() {
		let mut nvs = NamedValueSet::new();
		nvs.add(1u64, vec![1u8, 2]).unwrap();
		nvs.add(2u64, vec![-1i32, 1]).unwrap();
		nvs.add(3u64, vec![1u32, 2]).unwrap();
		nvs.add(4u64, vec![-1i64, 1]).unwrap();
		nvs.add(5u64, vec![1u64, 2]).unwrap();
		nvs.add(6u64, vec![0.5f64, 1.5]).unwrap();
		nvs.add(7u64, ["a", "b"].as_slice()).unwrap();
		nvs.add(8u64, vec![ObjRef(1), ObjRef(2)]).unwrap();

		assert_eq!(nvs.get(1u64).unwrap().as_byte_array().unwrap(), &[1, 2]);
		assert_eq!(nvs.get(2u64).unwrap().as_i32_array().unwrap(), &[-1, 1]);
		assert_eq!(nvs.get(3u64).unwrap().as_u32_array().unwrap(), &[1, 2]);
		assert_eq!(nvs.get(4u64).unwrap().as_i64_array().unwrap(), &[-1, 1]);
		assert_eq!(nvs.get(5u64).unwrap().as_u64_array().unwrap(), &[1, 2]);
		assert_eq!(nvs.get(6u64).unwrap().as_f64_array().unwrap(), &[0.5, 1.5]);
		let strings = nvs.get(7u64).unwrap().as_str_array().unwrap();
		assert_eq!(strings.len(), 2);
		assert_eq!(&*strings[0], "a");
		assert_eq!(nvs.get(8u64).unwrap().as_object_array().unwrap(), &[ObjRef(1), ObjRef(2)]);
	}

	#[test]
	fn get_with_other_type_is_bad_type_and_missing_is_not_found() {
		let mut nvs = NamedValueSet::new();
		nvs.add("speed", 88u32).unwrap();

		assert_bad_type(&nvs.get("speed").unwrap().as_str().unwrap_err());
		assert!(matches!(
			nvs.get("missing").unwrap_err(),
			NvsError::NameNotFound { name: Key::Str(ref s) } if &**s == "missing"
		));
		assert!(matches!(nvs.get(4u64).unwrap_err(), NvsError::NameNotFound { .. }));
	}

	#[test]
	fn duplicate_add_fails_and_first_binding_survives() {
		let mut nvs = NamedValueSet::new();
		nvs.add("port", 1u32).unwrap();
		let err = nvs.add("port", 2u32).unwrap_err();
		assert!(matches!(err, NvsError::DuplicateName { name: Key::Str(ref s) } if &**s == "port"));
		assert_eq!(nvs.get("port").unwrap().as_u32().unwrap(), 1);
		assert_eq!(nvs.num_names(), 1);
	}

	#[test]
	fn duplicate_check_is_per_namespace() {
		let mut nvs = NamedValueSet::new();
		nvs.add("3", true).unwrap();
		nvs.add(3u64, true).unwrap();
		assert_eq!(nvs.num_names(), 2);

		nvs.delete("3").unwrap();
		nvs.delete(3u64).unwrap();
		assert_eq!(nvs.num_names(), 0);
	}

	#[test]
	fn zero_sized_arrays_are_rejected_for_every_array_type() {
		let mut nvs = NamedValueSet::new();
		let empties = [
			Value::ByteArray(Vec::new()),
			Value::Int32Array(Vec::new()),
			Value::UInt32Array(Vec::new()),
			Value::Int64Array(Vec::new()),
			Value::UInt64Array(Vec::new()),
			Value::FloatArray(Vec::new()),
			Value::StringArray(Vec::new()),
			Value::ObjectArray(Vec::new()),
		];
		for empty in empties {
			let err = nvs.add("arr", empty).unwrap_err();
			assert!(matches!(err, NvsError::ZeroSizedArray { .. }), "got {err:?}");
		}
		assert!(nvs.is_empty());
	}

	#[test]
	fn adding_a_set_to_itself_is_rejected_without_mutation() {
		let mut nvs = NamedValueSet::new();
		nvs.add("seed", 1i32).unwrap();

		let snapshot = Value::from(&nvs);
		let err = nvs.add("self", snapshot).unwrap_err();
		assert!(matches!(err, NvsError::RecursiveAdd));
		assert_eq!(nvs.num_names(), 1);
	}

	#[test]
	fn adding_a_clone_of_itself_is_allowed() {
		let mut nvs = NamedValueSet::new();
		nvs.add("seed", 1i32).unwrap();

		let copy = nvs.clone();
		nvs.add("inner", Value::from(&copy)).unwrap();
		assert_eq!(nvs.get("inner").unwrap().as_set().unwrap().num_names(), 1);
	}

	#[test]
	fn snapshot_of_a_different_set_is_accepted() {
		let mut inner = NamedValueSet::new();
		inner.add(7u64, "leaf").unwrap();

		let mut outer = NamedValueSet::new();
		outer.add("inner", Value::from(&inner)).unwrap();

		let stored = outer.get("inner").unwrap().as_set().unwrap();
		assert_eq!(stored, &inner);

		// A snapshot taken of the stored copy must not look like `inner`.
		let restamped = Value::from(stored);
		inner.add("more", 1i32).unwrap();
		assert!(inner.add("again", restamped).is_ok());
	}

	#[test]
	fn number_group_enumerates_before_string_group() {
		let mut nvs = NamedValueSet::new();
		nvs.add("first", 1i32).unwrap();
		nvs.add(10u64, 2i32).unwrap();
		nvs.add("second", 3i32).unwrap();
		nvs.add(20u64, 4i32).unwrap();

		assert_eq!(nvs.number_name_at(0).unwrap(), 10);
		assert_eq!(nvs.number_name_at(1).unwrap(), 20);
		assert_eq!(nvs.string_name_at(2).unwrap(), "first");
		assert_eq!(nvs.string_name_at(3).unwrap(), "second");

		assert_eq!(nvs.name_kind_at(0).unwrap(), KeyKind::Number);
		assert_eq!(nvs.name_kind_at(3).unwrap(), KeyKind::Str);
	}

	#[test]
	fn typed_name_lookup_in_the_wrong_group_is_bad_type() {
		let mut nvs = NamedValueSet::new();
		nvs.add(2u64, -3i32).unwrap();
		nvs.add("two", -3i32).unwrap();

		assert_bad_type(&nvs.number_name_at(1).unwrap_err());
		assert_bad_type(&nvs.string_name_at(0).unwrap_err());
		assert!(matches!(
			nvs.number_name_at(2).unwrap_err(),
			NvsError::IndexOutOfRange { index: 2, len: 2 }
		));
		assert!(matches!(nvs.string_name_at(2).unwrap_err(), NvsError::IndexOutOfRange { .. }));
	}

	#[test]
	fn every_index_of_an_empty_set_is_out_of_range() {
		let nvs = NamedValueSet::new();
		for index in [0usize, 1, 100] {
			assert!(matches!(nvs.number_name_at(index).unwrap_err(), NvsError::IndexOutOfRange { .. }));
			assert!(matches!(nvs.string_name_at(index).unwrap_err(), NvsError::IndexOutOfRange { .. }));
			assert!(matches!(nvs.name_kind_at(index).unwrap_err(), NvsError::IndexOutOfRange { .. }));
		}
	}

	#[test]
	fn delete_preserves_relative_order_of_survivors() {
		let mut nvs = NamedValueSet::new();
		nvs.add(1u64, 1i32).unwrap();
		nvs.add(2u64, 2i32).unwrap();
		nvs.add(3u64, 3i32).unwrap();
		nvs.delete(2u64).unwrap();

		assert_eq!(nvs.number_name_at(0).unwrap(), 1);
		assert_eq!(nvs.number_name_at(1).unwrap(), 3);
		assert!(matches!(nvs.delete(2u64).unwrap_err(), NvsError::NameNotFound { .. }));
	}

	#[test]
	fn copy_is_deep_and_independent() {
		let mut inner = NamedValueSet::new();
		inner.add("depth", 2i32).unwrap();

		let mut original = NamedValueSet::new();
		original.add("inner", Value::from(&inner)).unwrap();
		original.add("bytes", vec![1u8, 2, 3]).unwrap();

		let mut copy = original.clone();
		assert_eq!(copy, original);

		copy.delete("bytes").unwrap();
		copy.add("bytes", vec![9u8]).unwrap();
		assert_eq!(original.get("bytes").unwrap().as_byte_array().unwrap(), &[1, 2, 3]);
		assert_ne!(copy, original);
	}

	#[test]
	fn equality_ignores_insertion_order() {
		let mut left = NamedValueSet::new();
		left.add("a", 1i32).unwrap();
		left.add("b", 2i32).unwrap();
		left.add(5u64, 3i32).unwrap();

		let mut right = NamedValueSet::new();
		right.add(5u64, 3i32).unwrap();
		right.add("b", 2i32).unwrap();
		right.add("a", 1i32).unwrap();

		assert_eq!(left, right);

		right.delete("a").unwrap();
		right.add("a", 99i32).unwrap();
		assert_ne!(left, right);
	}

	#[test]
	fn subset_laws_hold() {
		let empty = NamedValueSet::new();
		let mut full = NamedValueSet::new();
		full.add("a", 1i32).unwrap();
		full.add(9u64, "nine").unwrap();

		assert!(empty.subset(&full));
		assert!(empty.subset(&empty));
		assert!(full.subset(&full));
		assert!(!full.subset(&empty));

		let mut pattern = NamedValueSet::new();
		pattern.add("a", 1i32).unwrap();
		assert!(pattern.subset(&full));

		pattern.delete("a").unwrap();
		pattern.add("a", 2i32).unwrap();
		assert!(!pattern.subset(&full));
	}

	#[test]
	fn nested_sets_match_by_subset_on_the_subset_path() {
		let mut inner_full = NamedValueSet::new();
		inner_full.add("x", 1i32).unwrap();
		inner_full.add("y", 2i32).unwrap();

		let mut inner_part = NamedValueSet::new();
		inner_part.add("x", 1i32).unwrap();

		let mut haystack = NamedValueSet::new();
		haystack.add("cfg", Value::from(&inner_full)).unwrap();

		let mut pattern = NamedValueSet::new();
		pattern.add("cfg", Value::from(&inner_part)).unwrap();

		assert!(pattern.subset(&haystack));
		// Equality demands the nested sets match exactly.
		assert_ne!(pattern, haystack);
	}

	#[test]
	fn kind_and_size_report_per_key() {
		let mut nvs = NamedValueSet::new();
		nvs.add("text", "abc").unwrap();
		nvs.add("vals", vec![1u32, 2, 3]).unwrap();

		assert_eq!(nvs.kind_of("text").unwrap(), ValueKind::String);
		assert_eq!(nvs.size_of("text").unwrap(), 1);
		assert_eq!(nvs.kind_of("vals").unwrap(), ValueKind::UInt32Array);
		assert_eq!(nvs.size_of("vals").unwrap(), 3);
		assert!(matches!(nvs.kind_of("gone").unwrap_err(), NvsError::NameNotFound { .. }));
	}

	#[test]
	fn clear_empties_both_namespaces() {
		let mut nvs = NamedValueSet::new();
		nvs.add(1u64, 1i32).unwrap();
		nvs.add("one", 1i32).unwrap();
		nvs.clear();
		assert!(nvs.is_empty());
		assert!(!nvs.has(1u64));
		assert!(!nvs.has("one"));
	}

	#[test]
	fn merge_keeps_existing_entries_and_fills_gaps() {
		let mut base = NamedValueSet::new();
		base.add("shared", 1i32).unwrap();
		base.add(1u64, "keep").unwrap();

		let mut extra = NamedValueSet::new();
		extra.add("shared", 2i32).unwrap();
		extra.add("new", 3i32).unwrap();
		extra.add(2u64, "add").unwrap();

		base.merge(&extra).unwrap();
		assert_eq!(base.num_names(), 4);
		assert_eq!(base.get("shared").unwrap().as_i32().unwrap(), 1);
		assert_eq!(base.get("new").unwrap().as_i32().unwrap(), 3);
		assert_eq!(base.get(2u64).unwrap().as_str().unwrap(), "add");
	}

	#[test]
	fn iter_walks_grouped_enumeration_order() {
		let mut nvs = NamedValueSet::new();
		nvs.add("s1", 1i32).unwrap();
		nvs.add(1u64, 2i32).unwrap();
		nvs.add("s2", 3i32).unwrap();

		let keys: Vec<_> = nvs.iter().map(|(key, _)| key.to_owned()).collect();
		assert_eq!(keys, vec![Key::Number(1), Key::from("s1"), Key::from("s2")]);
	}
}
