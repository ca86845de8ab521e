//! Ordered key collections with copy-on-write updates.
//!
//! A [`KeyList`] holds at most one [`Key`] per keyformat, in insertion order.
//! Updates return a fresh list and leave the receiver untouched, so a list
//! can be shared between playlist snapshots without locking.
//!
//! Playlists that carry no key tags at all hold no list. The free functions in
//! this module take `Option<&KeyList>` and define each operation for that
//! absent case.

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::key::Key;

/// An ordered, keyformat-unique sequence of key declarations.
///
/// Uniqueness is maintained by [`KeyList::add_or_update`]; lists built with
/// `From`/`collect` are taken as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct KeyList {
    keys: Vec<Key>,
}

impl KeyList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the list holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate keys in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }

    /// Key at `index`.
    pub fn get(&self, index: usize) -> Option<&Key> {
        self.keys.get(index)
    }

    /// Keys as a slice.
    pub fn as_slice(&self) -> &[Key] {
        &self.keys
    }

    /// Position of the first key with the given keyformat.
    pub fn position_of(&self, keyformat: &str) -> Option<usize> {
        self.keys.iter().position(|key| key.keyformat == keyformat)
    }

    /// Return a copy of this list with `key` stored in its keyformat slot.
    ///
    /// The key replaces the entry with the same keyformat in place, or is
    /// appended when no entry matches. A `METHOD=NONE` key is never stored:
    /// the result is `None` and no existing entry is replaced, so clearing a
    /// key has to go through another path.
    pub fn add_or_update(&self, key: Key) -> Option<KeyList> {
        if key.is_none() {
            #[cfg(feature = "tracing")]
            tracing::debug!(keyformat = %key.keyformat, "ignoring METHOD=NONE key");
            return None;
        }

        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend_from_slice(&self.keys);

        match self.position_of(&key.keyformat) {
            Some(index) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(index, keyformat = %key.keyformat, "replacing key");
                keys[index] = key;
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(keyformat = %key.keyformat, "appending key");
                keys.push(key);
            }
        }

        Some(Self { keys })
    }

    /// Keys of this list that appear nowhere in `other`, in this list's order.
    ///
    /// Keys are compared on every attribute.
    pub fn diff(&self, other: &KeyList) -> KeyList {
        let changed: KeyList = self
            .keys
            .iter()
            .filter(|key| !other.keys.contains(key))
            .cloned()
            .collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            total = self.keys.len(),
            changed = changed.len(),
            "diffed key lists"
        );

        changed
    }

    /// Write every key's tag line to `w` in order.
    ///
    /// Stops at the first failing key; the error carries the bytes written by
    /// all earlier keys plus the partial output of the failing one.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<u64> {
        let mut total = 0;
        for key in &self.keys {
            match key.write_to(w) {
                Ok(n) => total += n,
                Err(e) => {
                    let e = e.after(total);
                    #[cfg(feature = "tracing")]
                    tracing::debug!(written = e.written(), error = %e, "key write failed");
                    return Err(e);
                }
            }
        }
        Ok(total)
    }

    /// Render all tag lines to a string.
    pub fn render(&self) -> String {
        self.keys.iter().flat_map(Key::fragments).collect()
    }
}

impl From<Vec<Key>> for KeyList {
    fn from(keys: Vec<Key>) -> Self {
        Self { keys }
    }
}

impl FromIterator<Key> for KeyList {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a KeyList {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl fmt::Display for KeyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.keys {
            fmt::Display::fmt(key, f)?;
        }
        Ok(())
    }
}

/// Number of keys; an absent list has none.
pub fn len(list: Option<&KeyList>) -> usize {
    list.map_or(0, KeyList::len)
}

/// [`KeyList::add_or_update`] where an absent list behaves like an empty one.
pub fn add_or_update(list: Option<&KeyList>, key: Key) -> Option<KeyList> {
    match list {
        Some(list) => list.add_or_update(key),
        None => KeyList::new().add_or_update(key),
    }
}

/// [`KeyList::diff`] for possibly absent lists.
///
/// When either side is absent nothing can be determined as changed and `list`
/// is returned as is. An absent `other` is not the same as an empty one.
pub fn diff(list: Option<&KeyList>, other: Option<&KeyList>) -> Option<KeyList> {
    match (list, other) {
        (Some(list), Some(other)) => Some(list.diff(other)),
        (list, _) => list.cloned(),
    }
}

/// [`KeyList::write_to`]; an absent list writes nothing.
pub fn write_all<W: Write + ?Sized>(list: Option<&KeyList>, w: &mut W) -> Result<u64> {
    match list {
        Some(list) => list.write_to(w),
        None => Ok(0),
    }
}
