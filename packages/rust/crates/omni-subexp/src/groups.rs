//! Captured sub-expressions of one successful match.
//!
//! Groups are addressable by position (0 is the whole match) and by name.
//! A name shared by several groups keeps every capture, in the left-to-right
//! order the groups appear in the pattern.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use crate::error::CaptureError;

/// Sub-expressions captured by a successful match.
///
/// Built by [`crate::capture()`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchCapture {
    positional: Vec<String>,
    by_name: HashMap<String, Vec<String>>,
    #[serde(skip)]
    names: Vec<String>,
}

impl MatchCapture {
    /// Build from matcher output: non-empty `positional` substrings and the
    /// group `names` aligned with them (`""` for unnamed groups).
    pub(crate) fn from_parts(positional: Vec<String>, names: &[String]) -> Self {
        let mut by_name: HashMap<String, Vec<String>> = HashMap::new();
        let mut order = Vec::new();

        for (name, text) in names.iter().zip(&positional) {
            if name.is_empty() {
                continue;
            }
            match by_name.entry(name.clone()) {
                Entry::Occupied(mut bucket) => bucket.get_mut().push(text.clone()),
                Entry::Vacant(slot) => {
                    order.push(name.clone());
                    slot.insert(vec![text.clone()]);
                }
            }
        }

        Self {
            positional,
            by_name,
            names: order,
        }
    }

    /// Captured text at `index`, counting groups from the left.
    ///
    /// Index 0 is the entire match; an optional group that did not take
    /// part in the match yields `""`.
    ///
    /// # Errors
    /// [`CaptureError::IndexOutOfBounds`] when `index` is negative or not
    /// below [`MatchCapture::len`].
    pub fn by_index(&self, index: isize) -> Result<&str, CaptureError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.positional.get(i))
            .map(String::as_str)
            .ok_or(CaptureError::IndexOutOfBounds {
                len: self.positional.len(),
                index,
            })
    }

    /// Every capture of the groups named `name`, empty strings included.
    ///
    /// # Errors
    /// [`CaptureError::NameNotFound`] when no group in the pattern has that
    /// name.
    pub fn all_by_name(&self, name: &str) -> Result<&[String], CaptureError> {
        self.by_name
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| CaptureError::NameNotFound {
                name: name.to_owned(),
            })
    }

    /// Capture of the leftmost group named `name`.
    ///
    /// # Errors
    /// [`CaptureError::NameNotFound`] as for [`MatchCapture::all_by_name`],
    /// and [`CaptureError::NoCapturedText`] when that group captured nothing.
    pub fn first_by_name(&self, name: &str) -> Result<&str, CaptureError> {
        match self.all_by_name(name)?.first() {
            Some(text) if !text.is_empty() => Ok(text.as_str()),
            _ => Err(CaptureError::NoCapturedText {
                name: name.to_owned(),
            }),
        }
    }

    /// The entire matched text.
    #[must_use]
    pub fn whole(&self) -> &str {
        self.positional.first().map_or("", String::as_str)
    }

    /// Number of positions, whole match included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    /// All captured text by position.
    #[must_use]
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Distinct group names in order of first appearance.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
