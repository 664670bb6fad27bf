//! Session State
//!
//! Per-session context for the search-select-edit-save workflow. A session
//! holds at most one selected chunk plus the draft text being edited for it.
//! Nothing here is shared between sessions or persisted.

use crate::error::ApiError;
use crate::search::SearchOutcome;
use crate::store::ChunkStore;
use crate::types::{Chunk, ChunkId};
use serde::Serialize;
use tracing::{info, warn};

/// The chunk currently open for editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub id: ChunkId,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkflowState {
    /// No query has run for the current keyword.
    Idle,
    /// Results are listed; nothing is selected.
    Searched,
    /// A chunk is selected and its draft may be edited.
    Selected,
    /// The draft of the selected chunk was written.
    Saved,
}

/// Confirmation of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReceipt {
    pub id: ChunkId,
}

#[derive(Debug, Clone)]
pub struct Session {
    keyword: String,
    results: Vec<Chunk>,
    selection: Option<Selection>,
    draft: Option<String>,
    state: WorkflowState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            keyword: String::new(),
            results: Vec::new(),
            selection: None,
            draft: None,
            state: WorkflowState::Idle,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn results(&self) -> &[Chunk] {
        &self.results
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Record a change of the keyword field.
    ///
    /// Always clears the selection and discards the draft, even when the new
    /// keyword is empty or equal to the previous one.
    pub fn on_keyword_change(&mut self, keyword: &str) {
        self.keyword = keyword.to_string();
        self.selection = None;
        self.draft = None;
        self.results.clear();
        self.state = WorkflowState::Idle;
    }

    /// Record the outcome of searching the current keyword.
    pub fn record_results(&mut self, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::NoQuery => {
                self.results.clear();
                self.state = WorkflowState::Idle;
            }
            SearchOutcome::Results(chunks) => {
                self.results = chunks;
                self.state = WorkflowState::Searched;
            }
        }
    }

    /// Select a result for editing, replacing any previous selection and
    /// seeding the draft with its text.
    pub fn on_result_activated(&mut self, id: ChunkId, text: String) {
        self.draft = Some(text.clone());
        self.selection = Some(Selection { id, text });
        self.state = WorkflowState::Selected;
    }

    /// Replace the draft text of the selected chunk.
    pub fn set_draft(&mut self, text: String) -> Result<(), ApiError> {
        if self.selection.is_none() {
            return Err(ApiError::ValidationError(
                "No chunk is selected".to_string(),
            ));
        }
        self.draft = Some(text);
        Ok(())
    }

    /// Write the draft to the selected chunk.
    ///
    /// On success the draft becomes the selection's text. On failure the
    /// selection and draft are left exactly as they were so the save can be
    /// retried.
    pub fn save(&mut self, store: &dyn ChunkStore) -> Result<SaveReceipt, ApiError> {
        let selection = self
            .selection
            .as_ref()
            .ok_or_else(|| ApiError::ValidationError("No chunk is selected".to_string()))?;
        let draft = self
            .draft
            .clone()
            .unwrap_or_else(|| selection.text.clone());
        let id = selection.id.clone();

        if let Err(e) = store.update_text(&id, &draft) {
            warn!(chunk_id = %id, error = %e, "Save failed");
            return Err(e);
        }

        for chunk in self.results.iter_mut().filter(|c| c.id == id) {
            chunk.text = draft.clone();
        }
        if let Some(selection) = self.selection.as_mut() {
            selection.text = draft;
        }
        self.state = WorkflowState::Saved;
        info!(chunk_id = %id, "Chunk saved");
        Ok(SaveReceipt { id })
    }
}
