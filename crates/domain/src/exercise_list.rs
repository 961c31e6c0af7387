//! Exercise list
//!
//! The ordered sequence of entries that makes up a program. A list is an immutable snapshot:
//! every operation returns a new list and leaves the original untouched. Operations never fail.
//! Invalid indices are ignored and invalid values are rejected, in which case the returned list
//! shares its storage with the original (see [`ExerciseList::ptr_eq`]).

use std::{collections::HashSet, slice::Iter, sync::Arc};

use log::debug;

use crate::{EntryID, EntryUpdate, ExerciseEntry, QuantityField};

#[derive(Debug, Clone, Default)]
pub struct ExerciseList {
    entries: Arc<[ExerciseEntry]>,
}

impl ExerciseList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from entries in the given order.
    ///
    /// An entry whose id already occurs earlier in the sequence gets a derived id.
    #[must_use]
    pub fn from_entries(entries: Vec<ExerciseEntry>) -> Self {
        let mut result: Vec<ExerciseEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = unique(&result, entry);
            result.push(entry);
        }
        Self::from_vec(result)
    }

    fn from_vec(entries: Vec<ExerciseEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[ExerciseEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ExerciseEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> Iter<'_, ExerciseEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn position(&self, id: &EntryID) -> Option<usize> {
        self.entries.iter().position(|e| e.id == *id)
    }

    #[must_use]
    pub fn ids(&self) -> Vec<EntryID> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    /// Returns `true` if both lists share the same storage, i.e. one was derived from the other
    /// by an operation that had no effect.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    #[must_use]
    pub fn append(&self, entry: ExerciseEntry) -> Self {
        let mut entries = self.entries.to_vec();
        let entry = unique(&entries, entry);
        entries.push(entry);
        Self::from_vec(entries)
    }

    /// Appends an unnamed entry with default values.
    #[must_use]
    pub fn add_blank(&self) -> Self {
        self.append(ExerciseEntry::blank(EntryID::generate()))
    }

    /// Inserts `entry` directly after `index`.
    ///
    /// An index of `-1` or less inserts at the start, an index beyond the last entry inserts at
    /// the end.
    #[must_use]
    pub fn insert_after(&self, index: isize, entry: ExerciseEntry) -> Self {
        let position = match usize::try_from(index) {
            Ok(index) => (index + 1).min(self.len()),
            Err(_) => 0,
        };
        let mut entries = self.entries.to_vec();
        let entry = unique(&entries, entry);
        entries.insert(position, entry);
        Self::from_vec(entries)
    }

    #[must_use]
    pub fn update_field(&self, index: usize, update: EntryUpdate) -> Self {
        let Some(entry) = self.entries.get(index) else {
            debug!("ignored update of non-existing entry {index}");
            return self.clone();
        };
        let mut entry = entry.clone();
        if !entry.apply(update) {
            debug!("ignored invalid update of entry {index}");
            return self.clone();
        }
        self.replace(index, entry)
    }

    /// Increases a numeric field by one.
    #[must_use]
    pub fn increment(&self, index: usize, field: QuantityField) -> Self {
        self.modify(index, |entry| entry.increment(field))
    }

    /// Decreases a numeric field by one, stopping at zero.
    #[must_use]
    pub fn decrement(&self, index: usize, field: QuantityField) -> Self {
        self.modify(index, |entry| entry.decrement(field))
    }

    /// Inserts a copy of a unilateral entry for the other side directly after it.
    ///
    /// Entries performed on both sides have no opposite side and are left alone.
    #[must_use]
    pub fn duplicate_for_opposite_side(&self, index: usize) -> Self {
        let Some(entry) = self.entries.get(index) else {
            return self.clone();
        };
        let Some(side) = entry.side.opposite() else {
            return self.clone();
        };
        let copy = ExerciseEntry {
            id: derived_id(&self.entries, &entry.id),
            side,
            ..entry.clone()
        };
        let mut entries = self.entries.to_vec();
        entries.insert(index + 1, copy);
        Self::from_vec(entries)
    }

    #[must_use]
    pub fn remove(&self, index: usize) -> Self {
        if index >= self.len() {
            return self.clone();
        }
        let mut entries = self.entries.to_vec();
        entries.remove(index);
        Self::from_vec(entries)
    }

    /// Moves the entry at `from` to `to`, shifting the entries in between by one position.
    #[must_use]
    pub fn reorder(&self, from: usize, to: usize) -> Self {
        if from == to || from >= self.len() || to >= self.len() {
            return self.clone();
        }
        let mut entries = self.entries.to_vec();
        let entry = entries.remove(from);
        entries.insert(to, entry);
        Self::from_vec(entries)
    }

    #[must_use]
    pub fn clear(&self) -> Self {
        Self::new()
    }

    fn modify(&self, index: usize, f: impl FnOnce(&mut ExerciseEntry)) -> Self {
        let Some(entry) = self.entries.get(index) else {
            return self.clone();
        };
        let mut entry = entry.clone();
        f(&mut entry);
        if entry == self.entries[index] {
            return self.clone();
        }
        self.replace(index, entry)
    }

    fn replace(&self, index: usize, entry: ExerciseEntry) -> Self {
        let mut entries = self.entries.to_vec();
        entries[index] = entry;
        Self::from_vec(entries)
    }
}

impl PartialEq for ExerciseList {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ExerciseList {}

impl<'a> IntoIterator for &'a ExerciseList {
    type Item = &'a ExerciseEntry;
    type IntoIter = Iter<'a, ExerciseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn unique(entries: &[ExerciseEntry], mut entry: ExerciseEntry) -> ExerciseEntry {
    if entries.iter().any(|e| e.id == entry.id) {
        entry.id = derived_id(entries, &entry.id);
    }
    entry
}

/// Smallest `<id>-<n>` with `n >= 1` not yet used in `entries`.
fn derived_id(entries: &[ExerciseEntry], id: &EntryID) -> EntryID {
    let ids = entries.iter().map(|e| &e.id).collect::<HashSet<_>>();
    (1..)
        .map(|n| id.derive(n))
        .find(|derived| !ids.contains(derived))
        .unwrap_or_else(EntryID::generate)
}
