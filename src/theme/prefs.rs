//! Key/value preference persistence.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Why a preference could not be read or written.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StorageError {
	/// No persistent storage exists in this environment (or it is disabled).
	#[error("preference storage is unavailable")]
	Unavailable,
	/// The storage exists but rejected the operation (quota, privacy mode).
	#[error("preference storage access failed: {0}")]
	Access(String),
}

/// Client-local persistent string storage.
pub trait PreferenceStore {
	fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
	fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`.
pub struct LocalPreferences {
	storage: web_sys::Storage,
}

impl LocalPreferences {
	/// Open the window's local storage.
	pub fn open() -> Result<Self, StorageError> {
		let window = web_sys::window().ok_or(StorageError::Unavailable)?;
		let storage = window
			.local_storage()
			.map_err(|e| StorageError::Access(format!("{e:?}")))?
			.ok_or(StorageError::Unavailable)?;
		Ok(Self { storage })
	}
}

impl PreferenceStore for LocalPreferences {
	fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
		self.storage
			.get_item(key)
			.map_err(|e| StorageError::Access(format!("{e:?}")))
	}

	fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.storage
			.set_item(key, value)
			.map_err(|e| StorageError::Access(format!("{e:?}")))
	}
}

/// Session-only storage. Used when `localStorage` is unavailable, and in tests.
#[derive(Default)]
pub struct MemoryPreferences {
	values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferences {
	pub fn new() -> Self {
		Self::default()
	}

	/// Pre-populate a key.
	pub fn with(self, key: &str, value: &str) -> Self {
		self.values
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		self
	}
}

impl PreferenceStore for MemoryPreferences {
	fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.values.borrow().get(key).cloned())
	}

	fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.values
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<T> {
	fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
		(**self).read(key)
	}

	fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
		(**self).write(key, value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn memory_round_trip() {
		let prefs = MemoryPreferences::new();
		assert_eq!(prefs.read("theme"), Ok(None));
		prefs.write("theme", "light").unwrap();
		assert_eq!(prefs.read("theme"), Ok(Some("light".to_string())));
	}

	#[test]
	fn with_seeds_a_value() {
		let prefs = MemoryPreferences::new().with("theme", "dark");
		assert_eq!(prefs.read("theme"), Ok(Some("dark".to_string())));
		assert_eq!(prefs.read("other"), Ok(None));
	}
}
