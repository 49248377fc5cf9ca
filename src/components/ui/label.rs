use leptos::prelude::*;
use tw_merge::*;

#[component]
pub fn Label(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] html_for: String,
    children: Children,
) -> impl IntoView {
    let class = tw_merge!("block text-sm leading-none font-medium select-none", class);

    view! {
        <label class=class r#for=html_for>
            {children()}
        </label>
    }
}

/// Inline validation message under a field. Keeps its height when empty so the
/// form does not jump.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <p
            class="min-h-4 text-xs italic text-destructive"
            class:invisible=move || message.get().is_none()
            role="alert"
        >
            {move || message.get().unwrap_or_default()}
        </p>
    }
}
