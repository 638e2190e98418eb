//! The notebook: the in-memory note collection, the active-note
//! selection, and the operations that mirror every mutation to the
//! persistence collaborator.
//!
//! ## Persistence Contract
//!
//! The whole collection is serialized as one JSON array under
//! [`STORAGE_KEY`] and rewritten after every mutation. A note is never
//! partially written. On a failed write the stored value keeps its
//! previous contents and the in-memory state may be ahead of it.
//!
//! ## The Active Note
//!
//! `active_id` is a plain lookup key into the collection, never an
//! owning reference. Deleting the selected note clears it, so a
//! selection cannot dangle across a delete. A save with no usable
//! selection appends a new note instead of updating one.

use crate::clock::Clock;
use crate::error::{NotesError, Result};
use crate::model::Note;
use crate::store::KeyValueStore;
use uuid::Uuid;

/// Storage key for the serialized note collection.
pub const STORAGE_KEY: &str = "pixelnotes-v1";

#[derive(Debug)]
pub struct Notebook<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
    notes: Vec<Note>,
    active_id: Option<Uuid>,
}

impl<S: KeyValueStore, C: Clock> Notebook<S, C> {
    /// Opens the notebook, loading any previously persisted notes.
    ///
    /// An absent key yields an empty notebook. A present but malformed
    /// blob surfaces as [`NotesError::Corrupt`]; the stored value is
    /// left exactly as it was.
    pub fn open(store: S, clock: C) -> Result<Self> {
        let notes = match store.get(STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(NotesError::Corrupt)?,
            None => Vec::new(),
        };
        Ok(Self {
            store,
            clock,
            notes,
            active_id: None,
        })
    }

    /// All notes, in internal (insertion) order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn active_id(&self) -> Option<Uuid> {
        self.active_id
    }

    /// The note currently open for editing, if any.
    pub fn active(&self) -> Option<&Note> {
        self.active_id
            .and_then(|id| self.notes.iter().find(|n| n.id == id))
    }

    /// Switches to "new note" mode: no selection, blank editor.
    pub fn begin_new(&mut self) {
        self.active_id = None;
    }

    /// Selects the note with `id` for editing and returns it.
    ///
    /// A miss leaves the current selection untouched.
    pub fn select(&mut self, id: Uuid) -> Result<&Note> {
        let pos = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(NotesError::NoteNotFound(id))?;
        self.active_id = Some(id);
        Ok(&self.notes[pos])
    }

    /// Saves the editor contents: updates the selected note in place,
    /// or appends a new one when nothing is selected.
    ///
    /// Both inputs are trimmed first; a note blank on both sides is
    /// rejected before any state changes or writes happen.
    pub fn save_active(&mut self, title: &str, body: &str) -> Result<Note> {
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() && body.is_empty() {
            return Err(NotesError::EmptyNote);
        }

        let now = self.clock.now();
        let saved = match self.active_position() {
            Some(pos) => {
                let note = &mut self.notes[pos];
                note.title = title.to_string();
                note.body = body.to_string();
                note.updated = now;
                note.clone()
            }
            // No usable selection means we are composing a new note.
            // The fresh note is not auto-selected.
            None => {
                let note = Note::new(title.to_string(), body.to_string(), now);
                self.notes.push(note.clone());
                note
            }
        };
        self.persist()?;
        Ok(saved)
    }

    /// Deletes the selected note, clears the selection, and returns the
    /// removed id.
    pub fn delete_active(&mut self) -> Result<Uuid> {
        let id = self.active_id.ok_or(NotesError::NoSelection)?;
        self.notes.retain(|n| n.id != id);
        self.active_id = None;
        self.persist()?;
        Ok(id)
    }

    /// Notes whose title or body contains `query`, case-insensitively,
    /// most recently updated first. An empty query matches everything.
    ///
    /// Pure read: recomputed on every call, never cached.
    pub fn search(&self, query: &str) -> Vec<Note> {
        let query = query.to_lowercase();
        let mut matches: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| {
                format!("{} {}", n.title, n.body)
                    .to_lowercase()
                    .contains(&query)
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.updated.cmp(&a.updated));
        matches
    }

    fn active_position(&self) -> Option<usize> {
        self.active_id
            .and_then(|id| self.notes.iter().position(|n| n.id == id))
    }

    fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.notes)?;
        self.store.set(STORAGE_KEY, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::fixtures::ManualClock;
    use crate::store::memory::InMemoryStore;

    const T0: i64 = 1_700_000_000_000;

    fn notebook<'a>(
        store: &'a mut InMemoryStore,
        clock: &'a ManualClock,
    ) -> Notebook<&'a mut InMemoryStore, &'a ManualClock> {
        Notebook::open(store, clock).unwrap()
    }

    #[test]
    fn opens_empty_when_nothing_is_stored() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);
        let nb = notebook(&mut store, &clock);
        assert!(nb.notes().is_empty());
        assert!(nb.active_id().is_none());
    }

    #[test]
    fn corrupt_blob_is_reported_not_reset() {
        let mut store = InMemoryStore::new();
        store.set(STORAGE_KEY, "definitely not json").unwrap();
        let clock = ManualClock::starting_at(T0);

        let err = Notebook::open(&mut store, &clock).unwrap_err();
        assert!(matches!(err, NotesError::Corrupt(_)));
        // The stored value stays as it was.
        assert_eq!(
            store.get(STORAGE_KEY).unwrap().as_deref(),
            Some("definitely not json")
        );
    }

    #[test]
    fn round_trip_reproduces_the_collection() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);

        let mut before = {
            let mut nb = notebook(&mut store, &clock);
            nb.save_active("Shopping List", "milk").unwrap();
            clock.advance_millis(10);
            nb.save_active("Work", "deploy").unwrap();
            clock.advance_millis(10);
            let id = nb.notes()[0].id;
            nb.select(id).unwrap();
            nb.save_active("Shopping List", "milk and eggs").unwrap();
            nb.notes().to_vec()
        };

        let nb = notebook(&mut store, &clock);
        let mut after = nb.notes().to_vec();

        before.sort_by_key(|n| n.id);
        after.sort_by_key(|n| n.id);
        assert_eq!(before, after);
    }

    #[test]
    fn blank_saves_are_rejected_without_touching_anything() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);
        let mut nb = notebook(&mut store, &clock);

        for (title, body) in [("", ""), ("   ", "\t"), (" \n ", "")] {
            let err = nb.save_active(title, body).unwrap_err();
            assert!(matches!(err, NotesError::EmptyNote));
        }

        assert!(nb.notes().is_empty());
        drop(nb);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn inputs_are_trimmed_before_storage() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);
        let mut nb = notebook(&mut store, &clock);

        let note = nb.save_active("  Hello  ", "\tWorld\n").unwrap();
        assert_eq!(note.title, "Hello");
        assert_eq!(note.body, "World");
    }

    #[test]
    fn create_select_update_keeps_id_and_advances_timestamp() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);
        let mut nb = notebook(&mut store, &clock);

        let created = nb.save_active("Hello", "World").unwrap();
        assert_eq!(created.updated.timestamp_millis(), T0);

        clock.advance_millis(500);
        nb.select(created.id).unwrap();
        let updated = nb.save_active("Hello", "World2").unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.body, "World2");
        assert_eq!(updated.updated.timestamp_millis(), T0 + 500);
        assert_eq!(nb.notes().len(), 1);
    }

    #[test]
    fn a_fresh_note_is_not_auto_selected() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);
        let mut nb = notebook(&mut store, &clock);

        nb.save_active("First", "").unwrap();
        assert!(nb.active_id().is_none());

        // With no selection, a second save composes another note
        // instead of updating the first.
        nb.save_active("Second", "").unwrap();
        assert_eq!(nb.notes().len(), 2);
    }

    #[test]
    fn delete_clears_the_selection() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);
        let mut nb = notebook(&mut store, &clock);

        let a = nb.save_active("A", "body").unwrap();
        nb.select(a.id).unwrap();
        let removed = nb.delete_active().unwrap();

        assert_eq!(removed, a.id);
        assert!(nb.notes().is_empty());
        assert!(nb.active_id().is_none());

        // A save after the delete creates a new note, not an update of
        // the one that is gone.
        let replacement = nb.save_active("x", "y").unwrap();
        assert_ne!(replacement.id, a.id);
        assert_eq!(nb.notes().len(), 1);
    }

    #[test]
    fn delete_with_no_selection_is_rejected() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);
        let mut nb = notebook(&mut store, &clock);
        nb.save_active("Keep me", "").unwrap();
        nb.begin_new();

        let err = nb.delete_active().unwrap_err();
        assert!(matches!(err, NotesError::NoSelection));
        assert_eq!(nb.notes().len(), 1);
    }

    #[test]
    fn selecting_a_missing_id_reports_not_found() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);
        let mut nb = notebook(&mut store, &clock);
        let a = nb.save_active("A", "").unwrap();
        nb.select(a.id).unwrap();

        let ghost = Uuid::new_v4();
        let err = nb.select(ghost).unwrap_err();
        assert!(matches!(err, NotesError::NoteNotFound(id) if id == ghost));
        // The previous selection survives the miss.
        assert_eq!(nb.active_id(), Some(a.id));
    }

    #[test]
    fn search_is_case_insensitive_substring_over_title_and_body() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);
        let mut nb = notebook(&mut store, &clock);

        nb.save_active("Shopping List", "milk").unwrap();
        clock.advance_millis(10);
        nb.save_active("Work", "deploy").unwrap();

        let hits = nb.search("MILK");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Shopping List");

        let all = nb.search("");
        assert_eq!(all.len(), 2);
        // Most recently updated first.
        assert_eq!(all[0].title, "Work");
        assert_eq!(all[1].title, "Shopping List");
    }

    #[test]
    fn search_matches_across_the_title_body_join() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);
        let mut nb = notebook(&mut store, &clock);
        nb.save_active("Ends", "starts").unwrap();

        // "ends starts" contains the space-joined needle.
        assert_eq!(nb.search("ends starts").len(), 1);
        assert!(nb.search("endsstarts").is_empty());
    }

    #[test]
    fn search_does_not_mutate_or_write() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);
        {
            let mut nb = notebook(&mut store, &clock);
            nb.save_active("A", "").unwrap();
            nb.search("a");
            nb.search("");
            assert_eq!(nb.notes().len(), 1);
        }
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn failed_write_surfaces_as_an_error() {
        let mut store = InMemoryStore::new().failing_writes();
        let clock = ManualClock::starting_at(T0);
        let mut nb = notebook(&mut store, &clock);

        let err = nb.save_active("A", "body").unwrap_err();
        assert!(matches!(err, NotesError::Store(_)));
    }

    #[test]
    fn every_mutation_rewrites_the_full_blob() {
        let mut store = InMemoryStore::new();
        let clock = ManualClock::starting_at(T0);
        {
            let mut nb = notebook(&mut store, &clock);
            nb.save_active("A", "1").unwrap();
            clock.advance_millis(1);
            nb.save_active("B", "2").unwrap();
        }

        let blob = store.get(STORAGE_KEY).unwrap().unwrap();
        let parsed: Vec<Note> = serde_json::from_str(&blob).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(store.writes(), 2);
    }
}
