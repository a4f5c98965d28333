// common/src/models/note.rs
use serde::{Deserialize, Serialize};

use crate::error::NoteError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: u64,
    pub text: String,
}

/// Notes composed on one open wall page.
///
/// Nothing here outlives the page: there is no persistence and no sharing.
#[derive(Debug)]
pub struct NoteBoard {
    notes: Vec<Note>,
    next_id: u64,
}

impl Default for NoteBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteBoard {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a note. Empty text leaves the board untouched.
    pub fn compose(&mut self, text: impl Into<String>) -> Result<&Note, NoteError> {
        let text = text.into();
        if text.is_empty() {
            return Err(NoteError::EmptyText);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.notes.push(Note { id, text });

        Ok(&self.notes[self.notes.len() - 1])
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
