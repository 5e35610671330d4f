//! The ordered property-to-identity map shared by the compiler and the
//! runtime merger.

/// The state of one property key in a [`PropertyMap`].
///
/// Absence from the map is the third state ("never set"); `Removed` records an
/// explicit clear, so a later fragment can distinguish "unset this" from
/// "nothing said about this".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropEntry {
    /// The key resolves to this atomic class identity.
    Present(String),
    /// The key was explicitly cleared (shorthand invalidated a longhand).
    Removed,
}

/// An ordered association from property key to [`PropEntry`].
///
/// Keys are the base property concatenated with the flat condition suffix:
/// `"color"` and `"color:hover"` are fully independent keys and never
/// interact. Insertion uses exact-key matching with a move-to-end overwrite
/// policy: setting an existing key removes it and appends the new entry at
/// the end. The policy is observable in rendered class-attribute order and is
/// pinned by tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyMap {
    entries: Vec<(String, PropEntry)>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `entry`, replacing any exactly-equal key. The updated
    /// key always moves to the end of the map.
    pub fn set(&mut self, key: impl Into<String>, entry: PropEntry) {
        let key = key.into();
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, entry));
    }

    /// Removes `key` outright, leaving it absent rather than `Removed`.
    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    pub fn get(&self, key: &str) -> Option<&PropEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, e)| e)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, PropEntry)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (K, PropEntry)>>(iter: T) -> Self {
        let mut map = PropertyMap::new();
        for (k, e) in iter {
            map.set(k, e);
        }
        map
    }
}
