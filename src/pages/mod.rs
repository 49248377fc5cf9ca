use crate::api::NoteApi;
use crate::cache::NOTES_QUERY;
use crate::components::notes::{NoteEditor, NoteItem, NoteModal};
use crate::components::ui::{Alert, AlertDescription, Button, ButtonSize, CardGrid, Spinner};
use crate::state::AppContext;
use icons::Plus;
use leptos::prelude::*;

/// Note grid plus the "new note" entry point.
///
/// The list is a `"getNotes"` query: any mutation bumps its version and the
/// resource refetches.
#[component]
pub fn NotesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let queries = app_state.0.queries;
    let api_client = app_state.0.api_client.clone();

    let notes = LocalResource::new(move || {
        // Tracked so invalidation re-runs the fetch.
        let _version = queries.version(NOTES_QUERY);
        let api_client = api_client.clone();
        async move { api_client.list_notes().await }
    });

    let create_open: RwSignal<bool> = RwSignal::new(false);
    let close_create = Callback::new(move |_| create_open.set(false));

    view! {
        <main class="min-h-screen bg-background">
            <div class="mx-auto w-full max-w-6xl px-4 py-8">
                <header class="mb-6 flex items-center justify-between">
                    <h1 class="text-2xl font-semibold">"Notes"</h1>
                    <Button size=ButtonSize::Sm on:click=move |_| create_open.set(true)>
                        <Plus />
                        "New note"
                    </Button>
                </header>

                {move || match notes.get() {
                    None => view! {
                        <div class="flex justify-center py-16 text-muted-foreground">
                            <Spinner class="size-6" />
                        </div>
                    }
                    .into_any(),
                    Some(Err(e)) => view! {
                        <Alert class="border-destructive/30">
                            <AlertDescription class="text-destructive text-xs">
                                {e.user_message()}
                            </AlertDescription>
                        </Alert>
                    }
                    .into_any(),
                    Some(Ok(list)) if list.is_empty() => view! {
                        <div class="py-16 text-center text-sm text-muted-foreground">
                            "No notes yet. Create your first one."
                        </div>
                    }
                    .into_any(),
                    Some(Ok(list)) => view! {
                        <CardGrid>
                            {list
                                .into_iter()
                                .map(|note| view! { <NoteItem note=note /> })
                                .collect_view()}
                        </CardGrid>
                    }
                    .into_any(),
                }}
            </div>

            <NoteModal open=create_open on_close=close_create>
                <NoteEditor on_close=close_create />
            </NoteModal>
        </main>
    }
}
