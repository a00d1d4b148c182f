use leptos::prelude::*;

/// Inline validation message rendered under a form field
#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <span class="form__error">{move || message.get().unwrap_or_default()}</span>
        </Show>
    }
}
