use crate::components::ui::{Button, FieldError, Input, Label, Spinner, Textarea};
use crate::models::Note;
use crate::notes::{submit_note, EditorMode, SubmitOutcome};
use crate::state::AppContext;
use crate::validation::{Field, NoteForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Marks a submit as pending. Returns false while one is already in flight.
fn begin_submit(loading: RwSignal<bool>) -> bool {
    if loading.get_untracked() {
        return false;
    }
    loading.set(true);
    true
}

/// Create form when `note` is absent, update form otherwise.
#[component]
pub fn NoteEditor(
    #[prop(optional)] note: Option<Note>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let mode = match &note {
        Some(n) => EditorMode::Update { id: n.id.clone() },
        None => EditorMode::Create,
    };
    let (heading, submit_label) = match &mode {
        EditorMode::Create => ("Create Note", "Create Note"),
        EditorMode::Update { .. } => ("Update Note", "Update Note"),
    };

    let form: RwSignal<NoteForm> =
        RwSignal::new(note.as_ref().map(NoteForm::from_note).unwrap_or_else(NoteForm::new));
    let loading: RwSignal<bool> = RwSignal::new(false);

    let field_value =
        move |field: Field| Signal::derive(move || form.with(|f| f.value(field).to_string()));
    let field_error = move |field: Field| {
        Signal::derive(move || form.with(|f| f.errors.get(field).map(|e| e.to_string())))
    };
    let field_invalid =
        move |field: Field| Signal::derive(move || form.with(|f| f.errors.get(field).is_some()));
    let set_field =
        move |field: Field| Callback::new(move |v: String| form.update(|f| f.set(field, v)));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !begin_submit(loading) {
            return;
        }

        let mut draft = form.get_untracked();
        let api_client = app_state.0.api_client.clone();
        let mutations = app_state.0.mutations();
        let mode = mode.clone();

        spawn_local(async move {
            let outcome = submit_note(&api_client, &mutations, &mode, &mut draft, move || {
                on_close.run(())
            })
            .await;

            // On success/failure the editor has already been closed and its
            // signals disposed; only the invalid path writes back.
            if let SubmitOutcome::Invalid(_) = outcome {
                let _ = form.try_set(draft);
            }
            let _ = loading.try_set(false);
        });
    };

    view! {
        <section data-name="NoteEditor">
            <div class="mb-3 flex items-center border-b pb-3 pr-8">
                <h2 class="text-2xl font-semibold">{heading}</h2>
            </div>

            <form class="flex w-full flex-col gap-2" on:submit=on_submit>
                <div class="flex flex-col gap-2">
                    <Label html_for="note-title" class="text-base">"Title"</Label>
                    <Input
                        id="note-title"
                        value=field_value(Field::Title)
                        invalid=field_invalid(Field::Title)
                        on_change=set_field(Field::Title)
                    />
                    <FieldError message=field_error(Field::Title) />
                </div>

                <div class="flex flex-col gap-2">
                    <Label html_for="note-content" class="text-base">"Content"</Label>
                    <Textarea
                        id="note-content"
                        rows=6
                        value=field_value(Field::Content)
                        invalid=field_invalid(Field::Content)
                        on_change=set_field(Field::Content)
                    />
                    <FieldError message=field_error(Field::Content) />
                </div>

                <Button class="w-full" attr:disabled=move || loading.get()>
                    <span class="inline-flex items-center gap-2">
                        <Show when=move || loading.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {submit_label}
                    </span>
                </Button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_submit_is_ignored_while_pending() {
        let loading = RwSignal::new(false);

        assert!(begin_submit(loading));
        assert!(loading.get_untracked());
        assert!(!begin_submit(loading));

        loading.set(false);
        assert!(begin_submit(loading));
    }
}
