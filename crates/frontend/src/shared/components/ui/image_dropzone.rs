use leptos::ev;
use leptos::prelude::*;

/// Image drop area: accepts one image file via drag-and-drop or
/// click-to-browse. Non-image files are ignored.
#[component]
pub fn ImageDropzone(
    /// Called with the accepted file
    on_select: Callback<web_sys::File>,
) -> impl IntoView {
    let is_drag_active = RwSignal::new(false);

    let accept_file = move |file: Option<web_sys::File>| {
        if let Some(file) = file {
            if file.type_().starts_with("image/") {
                on_select.run(file);
            }
        }
    };

    view! {
        <label
            class="dropzone"
            class:dropzone--active=move || is_drag_active.get()
            on:dragover=move |ev: ev::DragEvent| {
                ev.prevent_default();
                is_drag_active.set(true);
            }
            on:dragleave=move |_| is_drag_active.set(false)
            on:drop=move |ev: ev::DragEvent| {
                ev.prevent_default();
                is_drag_active.set(false);
                let file = ev
                    .data_transfer()
                    .and_then(|dt| dt.files())
                    .and_then(|files| files.get(0));
                accept_file(file);
            }
        >
            <input
                type="file"
                accept="image/*"
                class="dropzone__input"
                on:change=move |ev| {
                    use wasm_bindgen::JsCast;
                    let input: web_sys::HtmlInputElement =
                        ev.target().unwrap().dyn_into().unwrap();
                    let file = input.files().and_then(|files| files.get(0));
                    accept_file(file);
                    // Allow re-selecting the same file
                    input.set_value("");
                }
            />
            <Show
                when=move || is_drag_active.get()
                fallback=|| view! {
                    <span class="dropzone__hint">"Drag and drop your image here"</span>
                }
            >
                <span class="dropzone__hint">"Drop the file here..."</span>
            </Show>
        </label>
    }
}
