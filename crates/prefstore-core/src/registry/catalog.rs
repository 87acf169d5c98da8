//! Preference declarations: names, descriptions, type tags, visibility.

use std::collections::HashMap;

use thiserror::Error;

/// The declared value type of a preference.
///
/// Six tags, four storage classes: `FilePath` and `FolderPath` store
/// as text and exist so an editor can render a file or folder picker
/// instead of a plain text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefType {
    /// Free-form UTF-8 text.
    Text,
    /// A true/false flag.
    Boolean,
    /// A 64-bit signed integer.
    Integer,
    /// A 64-bit float.
    Float,
    /// A file path, stored as text.
    FilePath,
    /// A folder path, stored as text.
    FolderPath,
}

impl PrefType {
    /// Returns `true` for the tags whose values store as text
    /// (`Text`, `FilePath`, `FolderPath`).
    pub fn is_textual(self) -> bool {
        matches!(
            self,
            PrefType::Text | PrefType::FilePath | PrefType::FolderPath
        )
    }
}

/// Errors raised by catalog registration and queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A preference was registered with an empty name.
    #[error("preference name cannot be empty")]
    EmptyName,

    /// A preference was registered with an empty description.
    #[error("empty description for preference: {0}")]
    EmptyDescription(String),

    /// A name was registered twice. Declarations are made once at
    /// startup; a second registration is a programming error, not an
    /// update.
    #[error("duplicate preference key: {0}")]
    DuplicateKey(String),

    /// A query named a preference that was never registered.
    #[error("unknown preference key: {0}")]
    UnknownKey(String),
}

/// Static metadata for one declared preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefDescriptor {
    /// Unique identifier; also the key the value persists under.
    pub name: String,
    /// Human-readable label an editor shows next to the control.
    pub description: String,
    /// Declared value type.
    pub pref_type: PrefType,
    /// Private preferences are skipped by end-user-facing editors but
    /// are stored and read like any other.
    pub private: bool,
}

/// The declared set of preferences for one application.
///
/// The catalog holds metadata only; actual values live in a
/// [`PreferenceStore`](crate::registry::store::PreferenceStore).
/// Declarations are made once, at startup, before the store is opened,
/// and are never removed or overwritten during a session: registering
/// the same name twice is rejected as [`CatalogError::DuplicateKey`].
///
/// Registration order is preserved so an editor lists preferences in
/// the order the application declared them, not in hash order.
#[derive(Debug, Default)]
pub struct PreferenceCatalog {
    entries: HashMap<String, PrefDescriptor>,
    /// Names in registration order, for stable listings.
    order: Vec<String>,
}

impl PreferenceCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user-visible preference.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyName`] or
    /// [`CatalogError::EmptyDescription`] when either string is blank,
    /// and [`CatalogError::DuplicateKey`] when `name` is already
    /// registered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prefstore_core::registry::{PrefType, PreferenceCatalog};
    ///
    /// let mut catalog = PreferenceCatalog::new();
    /// catalog.register("gridSize", "Grid spacing (px)", PrefType::Integer)?;
    ///
    /// assert_eq!(catalog.type_of("gridSize")?, PrefType::Integer);
    /// # Ok::<(), prefstore_core::registry::CatalogError>(())
    /// ```
    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        pref_type: PrefType,
    ) -> Result<(), CatalogError> {
        self.insert(name, description, pref_type, false)
    }

    /// Registers an application-private preference.
    ///
    /// Private preferences carry the same metadata and persist
    /// identically; the flag only tells end-user-facing editors to
    /// leave them out of their listings. Typical uses are window
    /// geometry and other state the application manages on its own.
    ///
    /// # Errors
    ///
    /// Same contract as [`register`](Self::register).
    pub fn register_private(
        &mut self,
        name: &str,
        description: &str,
        pref_type: PrefType,
    ) -> Result<(), CatalogError> {
        self.insert(name, description, pref_type, true)
    }

    fn insert(
        &mut self,
        name: &str,
        description: &str,
        pref_type: PrefType,
        private: bool,
    ) -> Result<(), CatalogError> {
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if description.is_empty() {
            return Err(CatalogError::EmptyDescription(name.to_string()));
        }
        if self.entries.contains_key(name) {
            return Err(CatalogError::DuplicateKey(name.to_string()));
        }

        self.order.push(name.to_string());
        self.entries.insert(
            name.to_string(),
            PrefDescriptor {
                name: name.to_string(),
                description: description.to_string(),
                pref_type,
                private,
            },
        );
        Ok(())
    }

    /// Returns the full descriptor for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownKey`] when `name` was never
    /// registered.
    pub fn descriptor(&self, name: &str) -> Result<&PrefDescriptor, CatalogError> {
        self.entries
            .get(name)
            .ok_or_else(|| CatalogError::UnknownKey(name.to_string()))
    }

    /// Returns the human-readable description of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownKey`] for an unregistered name.
    pub fn describe(&self, name: &str) -> Result<&str, CatalogError> {
        Ok(self.descriptor(name)?.description.as_str())
    }

    /// Returns the declared type of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownKey`] for an unregistered name.
    pub fn type_of(&self, name: &str) -> Result<PrefType, CatalogError> {
        Ok(self.descriptor(name)?.pref_type)
    }

    /// Returns whether `name` is application-private.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownKey`] for an unregistered name.
    pub fn is_private(&self, name: &str) -> Result<bool, CatalogError> {
        Ok(self.descriptor(name)?.private)
    }

    /// Returns `true` when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All registered names, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// All descriptors, in registration order.
    ///
    /// An end-user-facing editor filters this down with
    /// [`PrefDescriptor::private`]; the iterator itself hides nothing.
    pub fn descriptors(&self) -> impl Iterator<Item = &PrefDescriptor> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    /// Number of registered preferences.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
