//! The application resource table and theme dictionaries.
//!
//! The resource table is the host application's live key-value mapping of
//! theme-able values. The engine overlays a variant dictionary into it on
//! every theme transition using a minimal-diff merge: missing keys are
//! added, changed keys replaced, unchanged keys untouched. Externally
//! supplied dictionaries are tracked in an append-only merged list instead
//! and consulted as fallbacks during lookup.

use indexmap::IndexMap;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// A single theme-able resource value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResourceValue {
    /// A color value, serialized as a hex string.
    Color(#[serde(with = "crate::serde_color")] Color),
    /// A numeric value such as a corner radius or stroke width.
    Float(f64),
    /// A text value such as a font family name.
    Text(String),
    /// A boolean switch.
    Flag(bool),
}

// Colors compare at the 8-bit-per-channel precision the values are
// serialized with, so a round-tripped dictionary merges as unchanged.
impl PartialEq for ResourceValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ResourceValue::Color(a), ResourceValue::Color(b)) => a.to_rgba8() == b.to_rgba8(),
            (ResourceValue::Float(a), ResourceValue::Float(b)) => a == b,
            (ResourceValue::Text(a), ResourceValue::Text(b)) => a == b,
            (ResourceValue::Flag(a), ResourceValue::Flag(b)) => a == b,
            _ => false,
        }
    }
}

impl ResourceValue {
    /// The contained color, if this is a color value.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            ResourceValue::Color(color) => Some(*color),
            _ => None,
        }
    }
}

/// A named set of resource values with a source identity.
///
/// The source string identifies where the dictionary came from; built-in
/// variant dictionaries use `glaze:theme/...` URIs, externally supplied
/// dictionaries use whatever identity the host assigns. Registration
/// dedupes on this identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDictionary {
    source: String,
    values: IndexMap<String, ResourceValue>,
}

impl ThemeDictionary {
    /// Create an empty dictionary with the given source identity.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            values: IndexMap::new(),
        }
    }

    /// Builder-style insertion.
    pub fn with_value(mut self, key: impl Into<String>, value: ResourceValue) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: ResourceValue) {
        self.values.insert(key.into(), value);
    }

    /// The source identity of this dictionary.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The values in insertion order.
    pub fn values(&self) -> &IndexMap<String, ResourceValue> {
        &self.values
    }

    /// Look up a single value.
    pub fn get(&self, key: &str) -> Option<&ResourceValue> {
        self.values.get(key)
    }

    /// Number of values in the dictionary.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the dictionary holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Counters reported by a minimal-diff merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Keys that were absent and got added.
    pub added: usize,
    /// Keys whose value differed and got replaced.
    pub replaced: usize,
}

impl MergeStats {
    /// Whether the merge mutated the table at all.
    pub fn changed(&self) -> bool {
        self.added + self.replaced > 0
    }
}

/// The host application's live resource mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceTable {
    values: IndexMap<String, ResourceValue>,
    merged: Vec<ThemeDictionary>,
}

impl ResourceTable {
    /// Create an empty resource table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value: direct entries win, then merged dictionaries are
    /// consulted newest-first.
    pub fn get(&self, key: &str) -> Option<&ResourceValue> {
        self.values
            .get(key)
            .or_else(|| self.merged.iter().rev().find_map(|dict| dict.get(key)))
    }

    /// Convenience lookup of a color value.
    pub fn get_color(&self, key: &str) -> Option<Color> {
        self.get(key).and_then(ResourceValue::as_color)
    }

    /// Insert or replace a direct entry.
    pub fn insert(&mut self, key: impl Into<String>, value: ResourceValue) {
        self.values.insert(key.into(), value);
    }

    /// Number of direct entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no direct entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay a dictionary into the direct entries.
    ///
    /// Adds missing keys, replaces keys whose value differs, leaves equal
    /// keys untouched. Merging the same dictionary twice in a row reports
    /// zero changes.
    pub fn merge_values(&mut self, dictionary: &ThemeDictionary) -> MergeStats {
        let mut stats = MergeStats::default();
        for (key, value) in dictionary.values() {
            match self.values.get(key) {
                Some(existing) if existing == value => {}
                Some(_) => {
                    self.values.insert(key.clone(), value.clone());
                    stats.replaced += 1;
                }
                None => {
                    self.values.insert(key.clone(), value.clone());
                    stats.added += 1;
                }
            }
        }
        stats
    }

    /// Append a dictionary to the merged list.
    pub fn push_merged(&mut self, dictionary: ThemeDictionary) {
        self.merged.push(dictionary);
    }

    /// The merged dictionaries in registration order.
    pub fn merged_dictionaries(&self) -> &[ThemeDictionary] {
        &self.merged
    }
}
