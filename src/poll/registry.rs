/*!
 * Interest Registry
 * Keyed table of per-handle interest masks
 */

use super::types::{EventSet, PollError, PollResult};
use crate::core::types::Handle;
use ahash::RandomState;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Registration table mapping each watched handle to its interest mask
///
/// The handle is the unique key: at most one entry per handle, replaced
/// in full on modify, removed in full on delete.
pub(super) struct InterestTable {
    entries: HashMap<Handle, EventSet, RandomState>,
}

impl InterestTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Insert a new interest entry
    pub fn insert(&mut self, handle: Handle, interest: EventSet) -> PollResult<()> {
        match self.entries.entry(handle) {
            Entry::Occupied(_) => Err(PollError::DuplicateHandle(handle)),
            Entry::Vacant(slot) => {
                slot.insert(interest);
                Ok(())
            }
        }
    }

    /// Replace the stored mask of a registered handle, discarding the old one
    pub fn update(&mut self, handle: Handle, interest: EventSet) -> PollResult<()> {
        match self.entries.get_mut(&handle) {
            Some(mask) => {
                *mask = interest;
                Ok(())
            }
            None => Err(PollError::UnknownHandle(handle)),
        }
    }

    /// Remove a registered handle
    pub fn remove(&mut self, handle: Handle) -> PollResult<()> {
        self.entries
            .remove(&handle)
            .map(|_| ())
            .ok_or(PollError::UnknownHandle(handle))
    }

    pub fn get(&self, handle: Handle) -> Option<EventSet> {
        self.entries.get(&handle).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_duplicate_fails() {
        let mut table = InterestTable::new();
        table.insert(1, EventSet::READABLE).unwrap();

        let err = table.insert(1, EventSet::WRITABLE).unwrap_err();
        assert_eq!(err, PollError::DuplicateHandle(1));
        // Stored mask untouched by the failed insert
        assert_eq!(table.get(1), Some(EventSet::READABLE));
    }

    #[test]
    fn test_update_replaces_mask_in_full() {
        let mut table = InterestTable::new();
        table
            .insert(2, EventSet::READABLE | EventSet::WRITABLE)
            .unwrap();

        table.update(2, EventSet::HANGUP).unwrap();
        assert_eq!(table.get(2), Some(EventSet::HANGUP));
    }

    #[test]
    fn test_update_unknown_fails() {
        let mut table = InterestTable::new();
        let err = table.update(9, EventSet::READABLE).unwrap_err();
        assert_eq!(err, PollError::UnknownHandle(9));
    }

    #[test]
    fn test_remove_unknown_fails() {
        let mut table = InterestTable::new();
        table.insert(3, EventSet::WRITABLE).unwrap();
        table.remove(3).unwrap();

        assert_eq!(table.remove(3).unwrap_err(), PollError::UnknownHandle(3));
        assert!(table.is_empty());
    }

    #[test]
    fn test_len_tracks_entries() {
        let mut table = InterestTable::new();
        for handle in 0..10 {
            table.insert(handle, EventSet::READABLE).unwrap();
        }
        assert_eq!(table.len(), 10);

        table.remove(4).unwrap();
        assert_eq!(table.len(), 9);
        assert_eq!(table.get(4), None);
    }
}
