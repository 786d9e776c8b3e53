//! Edit-dialog state for a single term mapping's review fields.
//!
//! DESIGN
//! ======
//! `closed -> open(draft) -> saving -> closed`. A failed save drops back to
//! `open` with `saving == false` so the reviewer can retry or cancel. Only one
//! update may be in flight: `begin_save` refuses while `saving` is set.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use records::{TermMapping, UpdateTermMapping};

/// Reviewer identity pre-filled when a row has none recorded.
pub const DEFAULT_REVIEWER: &str = "reviewer";

/// Editable copy of a row's review fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub status: String,
    pub comments: String,
    pub reviewer: String,
}

impl ReviewDraft {
    #[must_use]
    pub fn from_row(row: &TermMapping) -> Self {
        Self {
            status: row.current_status.clone().unwrap_or_default(),
            comments: row.reviewer_comments.clone().unwrap_or_default(),
            reviewer: row.reviewed_by.clone().unwrap_or_else(|| DEFAULT_REVIEWER.to_owned()),
        }
    }

    /// Update body: empty fields are left out so the upstream keeps its value.
    #[must_use]
    pub fn payload(&self) -> UpdateTermMapping {
        UpdateTermMapping {
            current_status: non_empty(&self.status),
            reviewer_comments: non_empty(&self.comments),
            reviewed_by: non_empty(&self.reviewer),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// An update ready to send, detached from the dialog so the response can be
/// applied even if the dialog state moves on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveRequest {
    pub id: i64,
    pub payload: UpdateTermMapping,
}

impl SaveRequest {
    /// Patch the matching row with every field that was sent.
    pub fn apply_to(&self, rows: &mut [TermMapping]) {
        let Some(row) = rows.iter_mut().find(|r| r.id == self.id) else {
            return;
        };
        if let Some(status) = &self.payload.current_status {
            row.current_status = Some(status.clone());
        }
        if let Some(comments) = &self.payload.reviewer_comments {
            row.reviewer_comments = Some(comments.clone());
        }
        if let Some(reviewer) = &self.payload.reviewed_by {
            row.reviewed_by = Some(reviewer.clone());
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditState {
    /// Row being edited; `None` while the dialog is closed.
    pub target: Option<TermMapping>,
    pub draft: ReviewDraft,
    pub saving: bool,
    /// Message from the last failed save attempt.
    pub error: Option<String>,
}

impl EditState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn open(&mut self, row: &TermMapping) {
        self.draft = ReviewDraft::from_row(row);
        self.target = Some(row.clone());
        self.saving = false;
        self.error = None;
    }

    /// Close and discard the draft.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Enter `saving` and hand back the request to send. Returns `None` when
    /// the dialog is closed or a save is already in flight.
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        if self.saving {
            return None;
        }
        let id = self.target.as_ref()?.id;
        self.saving = true;
        self.error = None;
        Some(SaveRequest { id, payload: self.draft.payload() })
    }

    /// Resolve a save. On success the row is patched in `rows` and the dialog
    /// closes; on failure `rows` is untouched, the dialog stays open, and the
    /// message is returned for the caller to alert.
    pub fn finish_save(
        &mut self,
        request: &SaveRequest,
        result: Result<(), String>,
        rows: &mut [TermMapping],
    ) -> Option<String> {
        let editing_same_row = self.target.as_ref().is_some_and(|t| t.id == request.id);
        match result {
            Ok(()) => {
                request.apply_to(rows);
                if editing_same_row {
                    self.cancel();
                }
                None
            }
            Err(message) => {
                if editing_same_row {
                    self.saving = false;
                    self.error = Some(message.clone());
                }
                Some(message)
            }
        }
    }
}
