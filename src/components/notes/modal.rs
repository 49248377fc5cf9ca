use icons::X;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// Overlay for the note editor.
///
/// Children only exist while `open` is true, so the editor's form state is
/// created on open and dropped on close. Backdrop click, the close button and
/// Escape all call `on_close`.
#[component]
pub fn NoteModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let esc_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || esc_handle.remove());

    view! {
        <Show when=move || open.get() fallback=|| ().into_view()>
            <div
                data-name="NoteModalBackdrop"
                class="fixed inset-0 z-60 bg-black/50"
                on:click=move |_| on_close.run(())
            />
            <div
                data-name="NoteModalContent"
                role="dialog"
                aria-modal="true"
                class="fixed top-[50%] left-[50%] z-100 w-full max-w-[calc(100%-2rem)] sm:max-w-lg max-h-[85vh] overflow-y-auto translate-x-[-50%] translate-y-[-50%] rounded-2xl border bg-background p-6 shadow-lg"
            >
                <button
                    type="button"
                    class="absolute top-4 right-4 rounded-sm p-1 text-muted-foreground hover:bg-accent hover:text-foreground"
                    aria-label="Close dialog"
                    on:click=move |_| on_close.run(())
                >
                    <X class="size-5" />
                </button>
                {children()}
            </div>
        </Show>
    }
}
