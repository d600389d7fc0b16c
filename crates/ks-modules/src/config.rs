//! In-memory configuration store with a flat `key=value` file format.
//!
//! # File Format
//!
//! ```text
//! # Comment lines start with '#'
//! app.name = keystone
//! processing.batch_size=25
//! ```
//!
//! - One entry per line, split at the first `=`
//! - Spaces and tabs around keys and values are trimmed
//! - Empty lines, comment lines, and lines without `=` are skipped
//! - No quoting, escaping, or multi-line values

use std::fmt::{Display, Write as _};
use std::str::FromStr;
use std::sync::Arc;

use camino::Utf8Path;
use ks_core::Version;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// A [`ConfigManager`] shared between several owners.
pub type SharedConfig = Arc<RwLock<ConfigManager>>;

/// Characters trimmed from keys and values.
const FIELD_WHITESPACE: [char; 2] = [' ', '\t'];

/// String-keyed application settings.
///
/// A fresh manager is seeded with the default entries:
///
/// | Key | Value |
/// |-----|-------|
/// | `app.name` | `keystone` |
/// | `app.version` | crate version |
/// | `processing.mode` | `simple` |
/// | `processing.batch_size` | `10` |
/// | `logging.level` | `info` |
///
/// # Examples
///
/// ```
/// use ks_modules::ConfigManager;
///
/// let mut config = ConfigManager::new();
/// assert_eq!(config.get_value("processing.batch_size", "0"), "10");
/// assert_eq!(config.get_value("missing", "d"), "d");
///
/// config.set_value("feature.enabled", "yes");
/// assert!(config.get_bool("feature.enabled", false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigManager {
    entries: FxHashMap<String, String>,
    loaded: bool,
}

impl ConfigManager {
    /// Creates a manager seeded with the default entries.
    #[must_use]
    pub fn new() -> Self {
        let mut entries = FxHashMap::default();
        entries.insert("app.name".to_owned(), ks_core::PROJECT_NAME.to_owned());
        entries.insert("app.version".to_owned(), Version::current().to_string());
        entries.insert("processing.mode".to_owned(), "simple".to_owned());
        entries.insert("processing.batch_size".to_owned(), "10".to_owned());
        entries.insert("logging.level".to_owned(), "info".to_owned());

        Self {
            entries,
            loaded: false,
        }
    }

    /// Creates a default manager wrapped in a [`SharedConfig`] handle.
    #[must_use]
    pub fn shared() -> SharedConfig {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Wraps this manager in a [`SharedConfig`] handle.
    #[must_use]
    pub fn into_shared(self) -> SharedConfig {
        Arc::new(RwLock::new(self))
    }

    /// Replaces all entries with the contents of the file at `path`.
    ///
    /// The file is read and parsed in full before anything is replaced, so a
    /// failure leaves the current entries untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read.
    pub fn load_from_file(&mut self, path: impl AsRef<Utf8Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            warn!(path = %path, error = %e, "Could not open config file");
            ConfigError::io(path, e)
        })?;

        self.entries = parse_entries(&contents);
        self.loaded = true;
        info!(path = %path, entries = self.entries.len(), "Loaded configuration");
        Ok(())
    }

    /// Writes all entries to `path`, sorted by key.
    ///
    /// The output can be read back with [`load_from_file`](Self::load_from_file).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Utf8Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let mut output = String::from("# keystone configuration\n");
        for (key, value) in self.sorted_entries() {
            let _ = writeln!(output, "{key} = {value}");
        }

        std::fs::write(path, output).map_err(|e| ConfigError::io(path, e))?;
        debug!(path = %path, entries = self.entries.len(), "Saved configuration");
        Ok(())
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value for `key`, or `default` if it is not set.
    #[must_use]
    pub fn get_value(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_owned()
    }

    /// Returns the value for `key` without copying it.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Parses the value for `key` (or `default` when unset) as `T`.
    ///
    /// Surrounding whitespace is ignored, so values stored through
    /// [`set_value`](Self::set_value) parse the same as values loaded from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the value does not parse.
    pub fn get_parsed<T>(&self, key: &str, default: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.get(key).unwrap_or(default);
        raw.trim()
            .parse::<T>()
            .map_err(|e: T::Err| ConfigError::invalid_value(key, raw, e.to_string()))
    }

    /// Returns the value for `key` as an integer, or `default` if it is
    /// unset or not a valid integer.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(default)
    }

    /// Returns the value for `key` as a boolean, or `default` if it is unset
    /// or unrecognized.
    ///
    /// Accepts `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`, ignoring case.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(parse_bool).unwrap_or(default)
    }

    /// Stores an integer value.
    pub fn set_int(&mut self, key: impl Into<String>, value: i64) {
        self.set_value(key, value.to_string());
    }

    /// Stores a boolean value as `true` or `false`.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set_value(key, value.to_string());
    }

    /// Returns `true` if `key` is set.
    #[inline]
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns all keys in no particular order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Returns all entries sorted by key.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }

    /// Removes every entry and clears the loaded flag.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.loaded = false;
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the entries came from a successful file load.
    #[inline]
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `key=value` text into a map.
///
/// # Examples
///
/// ```
/// use ks_modules::parse_entries;
///
/// let entries = parse_entries("# comment\n a = 1 \n\nb=x=y\nnot an entry\n");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries["a"], "1");
/// assert_eq!(entries["b"], "x=y");
/// ```
#[must_use]
pub fn parse_entries(text: &str) -> FxHashMap<String, String> {
    let mut entries = FxHashMap::default();

    for (index, line) in text.lines().enumerate() {
        if line.is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            debug!(line = index + 1, "Skipping config line without '='");
            continue;
        };

        let key = key.trim_matches(FIELD_WHITESPACE.as_slice());
        if key.is_empty() {
            debug!(line = index + 1, "Skipping config line with empty key");
            continue;
        }

        let value = value.trim_matches(FIELD_WHITESPACE.as_slice());
        entries.insert(key.to_owned(), value.to_owned());
    }

    entries
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
