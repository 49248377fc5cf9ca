//! Create/update/delete flows, independent of any UI.

use crate::api::NoteApi;
use crate::cache::NOTES_QUERY;
use crate::models::{Note, Severity};
use crate::mutation::{MutationLifecycle, MutationOptions};
use crate::services::{CacheInvalidator, Confirmer, Notifier, ProgressSignal};
use crate::validation::{FieldErrors, NoteForm};

pub(crate) const DELETE_PROMPT: &str = "Are you sure";

pub(crate) const CREATE_NOTE: MutationOptions = MutationOptions {
    name: "create_note",
    invalidates: &[NOTES_QUERY],
    success_message: "Note created successfully",
    success_severity: Severity::Success,
};

pub(crate) const UPDATE_NOTE: MutationOptions = MutationOptions {
    name: "update_note",
    invalidates: &[NOTES_QUERY],
    success_message: "Note updated successfully",
    success_severity: Severity::Success,
};

pub(crate) const DELETE_NOTE: MutationOptions = MutationOptions {
    name: "delete_note",
    invalidates: &[NOTES_QUERY],
    success_message: "Note deleted successfully",
    success_severity: Severity::Warning,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum EditorMode {
    Create,
    Update { id: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    /// Blocked before any request was issued.
    Invalid(FieldErrors),
    Saved(Note),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum DeleteOutcome {
    Declined,
    Deleted,
    Failed(String),
}

/// Validates `form` and, if it passes, creates or updates the note.
///
/// `close` runs once the request settles, success or failure. It does not run
/// when validation fails: the editor stays open with inline errors.
pub(crate) async fn submit_note<A, P, N, C>(
    api: &A,
    mutations: &MutationLifecycle<P, N, C>,
    mode: &EditorMode,
    form: &mut NoteForm,
    close: impl FnOnce(),
) -> SubmitOutcome
where
    A: NoteApi,
    P: ProgressSignal,
    N: Notifier,
    C: CacheInvalidator,
{
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };

    let result = match mode {
        EditorMode::Create => {
            mutations
                .run(&CREATE_NOTE, api.create_note(&input), close)
                .await
        }
        EditorMode::Update { id } => {
            mutations
                .run(&UPDATE_NOTE, api.update_note(id, &input), close)
                .await
        }
    };

    match result {
        Ok(note) => SubmitOutcome::Saved(note),
        Err(e) => SubmitOutcome::Failed(e.user_message()),
    }
}

/// Asks for confirmation, then deletes. Declining issues no request.
pub(crate) async fn delete_note<A, P, N, C>(
    api: &A,
    mutations: &MutationLifecycle<P, N, C>,
    confirmer: &impl Confirmer,
    id: &str,
) -> DeleteOutcome
where
    A: NoteApi,
    P: ProgressSignal,
    N: Notifier,
    C: CacheInvalidator,
{
    if !confirmer.confirm(DELETE_PROMPT) {
        log::debug!("delete_note: declined for {id}");
        return DeleteOutcome::Declined;
    }

    match mutations.run(&DELETE_NOTE, api.delete_note(id), || {}).await {
        Ok(()) => DeleteOutcome::Deleted,
        Err(e) => DeleteOutcome::Failed(e.user_message()),
    }
}
