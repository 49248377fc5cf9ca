use crate::models::Severity;
use crate::services::Toast;
use crate::state::AppContext;
use icons::X;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Thin bar pinned to the top of the page while any mutation is in flight.
#[component]
pub fn ProgressBar() -> impl IntoView {
    let progress = expect_context::<AppContext>().0.progress;

    view! {
        <div
            data-name="ProgressBar"
            class="pointer-events-none fixed inset-x-0 top-0 z-[300] h-0.5"
            aria-hidden="true"
        >
            <div
                class="h-full bg-primary transition-all duration-500 ease-out"
                class:opacity-0=move || !progress.is_active()
                style:width=move || if progress.is_active() { "80%" } else { "0%" }
            />
        </div>
    }
}

fn toast_class(severity: Severity) -> String {
    let accent = match severity {
        Severity::Success => "border-l-emerald-500",
        Severity::Warning => "border-l-amber-500",
        Severity::Error => "border-l-red-500",
    };
    tw_merge!(
        "flex items-start gap-3 rounded-md border border-l-4 bg-background px-4 py-3 shadow-lg",
        accent
    )
}

/// Top-right toast stack.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<AppContext>().0.toasts;

    view! {
        <div
            data-name="Toaster"
            class="fixed top-4 right-4 z-[200] flex w-80 flex-col gap-2"
            aria-live="polite"
        >
            <For
                each=move || toasts.items()
                key=|t: &Toast| t.id
                children=move |t: Toast| {
                    let id = t.id;
                    view! {
                        <div
                            class=toast_class(t.severity)
                            data-type=t.severity.as_ref().to_string()
                            role="status"
                        >
                            <span class="flex-1 text-sm break-words">{t.message}</span>
                            <button
                                type="button"
                                class="text-muted-foreground hover:text-foreground"
                                aria-label="Dismiss notification"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                <X class="size-4" />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
