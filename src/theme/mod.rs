//! Process-wide light/dark presentation mode.
//!
//! [`ThemeStore`] is the single source of truth. It resolves its initial value
//! from, in order: the persisted preference, the platform's ambient
//! color-scheme preference, and finally [`ThemeMode::Dark`]. Consumers either
//! subscribe for change callbacks or poll [`ThemeStore::revision`]; the
//! renderer polls once per frame and never writes.

pub mod dom;
mod prefs;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, warn};

pub use prefs::{LocalPreferences, MemoryPreferences, PreferenceStore, StorageError};

/// Storage key for the persisted preference.
pub const THEME_KEY: &str = "theme";

/// Presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
	Light,
	#[default]
	Dark,
}

impl ThemeMode {
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}

	pub fn is_dark(self) -> bool {
		self == ThemeMode::Dark
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A stored value that is neither `"light"` nor `"dark"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeMode {
	type Err = UnknownTheme;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"light" => Ok(ThemeMode::Light),
			"dark" => Ok(ThemeMode::Dark),
			other => Err(UnknownTheme(other.to_string())),
		}
	}
}

type Subscriber = Box<dyn FnMut(ThemeMode)>;

/// Shared handle used by UI components on the main thread.
pub type ThemeHandle = Rc<RefCell<ThemeStore>>;

/// Observable theme value backed by a [`PreferenceStore`].
pub struct ThemeStore {
	mode: ThemeMode,
	revision: u64,
	prefs: Box<dyn PreferenceStore>,
	subscribers: Vec<Subscriber>,
}

impl ThemeStore {
	/// Resolve the initial mode: stored preference, then `ambient`, then dark.
	///
	/// Read failures and unrecognized stored values count as "no preference".
	pub fn load(prefs: impl PreferenceStore + 'static, ambient: Option<ThemeMode>) -> Self {
		let stored = match prefs.read(THEME_KEY) {
			Ok(Some(raw)) => match raw.parse::<ThemeMode>() {
				Ok(mode) => Some(mode),
				Err(e) => {
					warn!("theme: ignoring stored preference: {}", e);
					None
				}
			},
			Ok(None) => None,
			Err(e) => {
				warn!("theme: {}", e);
				None
			}
		};
		let mode = stored.or(ambient).unwrap_or_default();
		debug!("theme: initial mode {} (stored: {:?}, ambient: {:?})", mode, stored, ambient);

		Self {
			mode,
			revision: 0,
			prefs: Box::new(prefs),
			subscribers: Vec::new(),
		}
	}

	/// Current mode.
	pub fn mode(&self) -> ThemeMode {
		self.mode
	}

	/// Incremented on every change. Pollers compare against the last value seen.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	/// Register a callback invoked after every change with the new mode.
	pub fn subscribe(&mut self, subscriber: impl FnMut(ThemeMode) + 'static) {
		self.subscribers.push(Box::new(subscriber));
	}

	/// Flip the mode, persist it and notify subscribers.
	pub fn toggle(&mut self) -> ThemeMode {
		self.set(self.mode.toggled());
		self.mode
	}

	/// Set an explicit mode. A no-op if it is already current.
	pub fn set(&mut self, mode: ThemeMode) {
		if mode == self.mode {
			return;
		}
		self.mode = mode;
		self.revision += 1;
		debug!("theme: switched to {}", mode);

		if let Err(e) = self.prefs.write(THEME_KEY, mode.as_str()) {
			warn!("theme: preference not persisted: {}", e);
		}
		for subscriber in &mut self.subscribers {
			subscriber(mode);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	/// Storage that refuses every operation.
	struct Broken;

	impl PreferenceStore for Broken {
		fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
			Err(StorageError::Unavailable)
		}

		fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
			Err(StorageError::Access("QuotaExceededError".into()))
		}
	}

	#[test]
	fn stored_preference_wins() {
		let prefs = MemoryPreferences::new().with(THEME_KEY, "light");
		let store = ThemeStore::load(prefs, Some(ThemeMode::Dark));
		assert_eq!(store.mode(), ThemeMode::Light);
	}

	#[test]
	fn ambient_used_without_stored_preference() {
		let store = ThemeStore::load(MemoryPreferences::new(), Some(ThemeMode::Light));
		assert_eq!(store.mode(), ThemeMode::Light);
	}

	#[test]
	fn defaults_to_dark() {
		let store = ThemeStore::load(MemoryPreferences::new(), None);
		assert_eq!(store.mode(), ThemeMode::Dark);
	}

	#[test]
	fn garbage_stored_value_falls_through() {
		let prefs = MemoryPreferences::new().with(THEME_KEY, "sepia");
		let store = ThemeStore::load(prefs, Some(ThemeMode::Light));
		assert_eq!(store.mode(), ThemeMode::Light);
	}

	#[test]
	fn toggle_persists_immediately() {
		let prefs = Rc::new(MemoryPreferences::new());
		let mut store = ThemeStore::load(prefs.clone(), None);
		assert_eq!(store.toggle(), ThemeMode::Light);
		assert_eq!(prefs.read(THEME_KEY), Ok(Some("light".to_string())));
		assert_eq!(store.toggle(), ThemeMode::Dark);
		assert_eq!(prefs.read(THEME_KEY), Ok(Some("dark".to_string())));
	}

	#[test]
	fn toggle_survives_broken_storage() {
		let mut store = ThemeStore::load(Broken, Some(ThemeMode::Light));
		assert_eq!(store.mode(), ThemeMode::Light);
		assert_eq!(store.toggle(), ThemeMode::Dark);
		assert_eq!(store.mode(), ThemeMode::Dark);
	}

	#[test]
	fn subscribers_see_every_change() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let mut store = ThemeStore::load(MemoryPreferences::new(), None);
		let sink = seen.clone();
		store.subscribe(move |mode| sink.borrow_mut().push(mode));

		store.toggle();
		store.set(ThemeMode::Light);
		store.toggle();

		assert_eq!(*seen.borrow(), vec![ThemeMode::Light, ThemeMode::Dark]);
	}

	#[test]
	fn revision_tracks_changes_only() {
		let mut store = ThemeStore::load(MemoryPreferences::new(), None);
		assert_eq!(store.revision(), 0);
		store.set(ThemeMode::Dark);
		assert_eq!(store.revision(), 0);
		store.toggle();
		assert_eq!(store.revision(), 1);
	}

	#[test]
	fn parse_round_trips_display() {
		for mode in [ThemeMode::Light, ThemeMode::Dark] {
			assert_eq!(mode.to_string().parse::<ThemeMode>(), Ok(mode));
		}
		assert!("Dark".parse::<ThemeMode>().is_err());
	}
}
