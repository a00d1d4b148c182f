use crate::shared::api_utils::api_url;
use crate::shared::components::ui::{Button, ErrorMessage, Input};
use crate::shared::toast::ToastService;
use contracts::domain::collection::aggregate::CollectionDto;
use leptos::prelude::*;

/// Modal content for creating a collection.
///
/// `on_created` fires after a successful save so the listing can refetch
/// instead of waiting for a page reload.
#[component]
pub fn CreateCollectionDialog(
    on_created: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let name = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let submit = move || {
        if pending.get_untracked() {
            return;
        }
        let value = name.get_untracked().trim().to_string();
        if value.is_empty() {
            error.set(Some("Collection name is required".to_string()));
            return;
        }
        error.set(None);
        pending.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            match create_collection(&value).await {
                Ok(()) => {
                    toasts.success("The new collection has been created.", value);
                    on_created.run(());
                }
                Err(e) => error.set(Some(e)),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="dialog">
            <header class="dialog__header">
                <h3 class="dialog__title">"Create a new Collection"</h3>
                <p class="dialog__description">
                    "Name the collection; clothes variants are added from its detail page."
                </p>
            </header>

            <form
                id="create-collection"
                class="dialog__body"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <Input
                    label="Name"
                    id="collection-name"
                    placeholder="e.g. Summer Drop"
                    value=Signal::derive(move || name.get())
                    on_input=Callback::new(move |v| name.set(v))
                />
                <ErrorMessage message=Signal::derive(move || error.get()) />
            </form>

            <footer class="dialog__footer">
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
                <Button
                    button_type="submit"
                    form="create-collection"
                    disabled=Signal::derive(move || pending.get())
                >
                    {move || if pending.get() { "Creating..." } else { "Create Collection" }}
                </Button>
            </footer>
        </div>
    }
}

async fn create_collection(name: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let dto = CollectionDto {
        id: None,
        name: name.to_string(),
    };
    let json_data = serde_json::to_string(&dto).map_err(|e| format!("{e}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    let body = wasm_bindgen::JsValue::from_str(&json_data);
    opts.set_body(&body);

    let url = api_url("/api/collection");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
