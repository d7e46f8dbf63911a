use std::collections::{HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::decode::scanner::{DEFAULT_COMMENT_CHAR, DEFAULT_ESCAPE_CHAR};
use crate::portable::PORTABLE;
use crate::{DEFAULT_MB_CUR_MAX, DEFAULT_MB_CUR_MIN};

/// One character of the coded character set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CharEntry {
    pub name: String,
    pub bytes: Vec<u8>,
    /// Unicode scalar value, when the name is of the `<Uxxxx>` form
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub ucs: Option<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub comment: Option<String>,
    /// Column width from the WIDTH section
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub width: Option<u32>,
}

/// A parsed charmap: header values plus the CHARMAP entries in file order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Charmap {
    pub code_set_name: Option<String>,
    pub mb_cur_min: u8,
    pub mb_cur_max: u8,
    pub escape_char: char,
    pub comment_char: char,
    pub aliases: Vec<String>,
    pub width_default: u32,
    entries: Vec<CharEntry>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<String, usize>,
}

impl Default for Charmap {
    fn default() -> Self {
        Self {
            code_set_name: None,
            mb_cur_min: DEFAULT_MB_CUR_MIN,
            mb_cur_max: DEFAULT_MB_CUR_MAX,
            escape_char: DEFAULT_ESCAPE_CHAR,
            comment_char: DEFAULT_COMMENT_CHAR,
            aliases: Vec::new(),
            width_default: 1,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl Charmap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Returns `false`, leaving the charmap untouched,
    /// when the name is already defined.
    pub fn insert(&mut self, entry: CharEntry) -> bool {
        if self.index.contains_key(&entry.name) {
            return false;
        }
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn get(&self, name: &str) -> Option<&CharEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut CharEntry> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.entries[i]),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of `name` in file order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Entries from `first` to `last` inclusive, in file order. `None` when
    /// either name is undefined or `last` comes before `first`.
    pub fn between_mut(&mut self, first: &str, last: &str) -> Option<&mut [CharEntry]> {
        let start = self.position(first)?;
        let end = self.position(last)?;
        self.entries.get_mut(start..=end)
    }

    /// All entries encoded as exactly `bytes`, in file order.
    pub fn by_bytes<'a>(&'a self, bytes: &'a [u8]) -> impl Iterator<Item = &'a CharEntry> + 'a {
        self.entries.iter().filter(move |e| e.bytes == bytes)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column width of a defined character; `WIDTH_DEFAULT` when the WIDTH
    /// section does not list it.
    pub fn width_of(&self, name: &str) -> Option<u32> {
        self.get(name).map(|e| e.width.unwrap_or(self.width_default))
    }

    /// Portable characters defined neither under a POSIX name nor as a
    /// `<Uxxxx>` name. Reported by their first POSIX name.
    pub fn missing_portable(&self) -> Vec<&'static str> {
        let defined: HashSet<u32> = self.entries.iter().filter_map(|e| e.ucs).collect();
        PORTABLE
            .iter()
            .filter(|(ucs, names)| {
                !defined.contains(ucs) && !names.iter().any(|n| self.contains(n))
            })
            .map(|(_, names)| names[0])
            .collect()
    }
}

impl<'a> IntoIterator for &'a Charmap {
    type Item = &'a CharEntry;
    type IntoIter = std::slice::Iter<'a, CharEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
