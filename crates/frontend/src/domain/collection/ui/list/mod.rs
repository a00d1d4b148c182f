pub mod state;

use self::state::FetchState;
use crate::domain::collection::ui::create::CreateCollectionDialog;
use crate::shared::api_utils::api_url;
use crate::shared::components::ui::Button;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::collection::aggregate::CollectionSummary;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CollectionRow {
    pub id: String,
    pub name: String,
    pub clothes_count: usize,
}

impl From<CollectionSummary> for CollectionRow {
    fn from(summary: CollectionSummary) -> Self {
        Self {
            id: summary.id.as_string(),
            name: summary.name.clone(),
            clothes_count: summary.clothes_count(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn StocksPage() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let data = RwSignal::new(FetchState::<Vec<CollectionRow>>::Loading);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_collections().await {
                Ok(v) => {
                    let rows: Vec<CollectionRow> = v.into_iter().map(Into::into).collect();
                    data.set(FetchState::Loaded(rows));
                }
                Err(e) => data.set(FetchState::Failed(e)),
            }
        });
    };

    let handle_create_new = move || {
        modal_stack.push(move |handle| {
            view! {
                <CreateCollectionDialog
                    on_created=Callback::new({
                        let handle = handle.clone();
                        move |_| {
                            handle.close();
                            fetch();
                        }
                    })
                    on_cancel=Callback::new({
                        let handle = handle.clone();
                        move |_| handle.close()
                    })
                />
            }
            .into_any()
        });
    };

    fetch();

    view! {
        <section class="content">
            <div class="header">
                <h2>"Collections"</h2>
                <div class="header__actions">
                    <Button on_click=Callback::new(move |_| handle_create_new())>
                        "New Collection"
                    </Button>
                </div>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <caption class="table__caption">"A list of Rise's collections"</caption>
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Number of clothes"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match data.get() {
                            FetchState::Loading => view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--center" colspan="3">
                                        "Loading..."
                                    </td>
                                </tr>
                            }
                            .into_any(),
                            FetchState::Failed(e) => view! {
                                <tr class="table__row table__row--error">
                                    <td class="table__cell table__cell--center" colspan="3">
                                        {format!("Failed to load collections: {}", e)}
                                    </td>
                                </tr>
                            }
                            .into_any(),
                            FetchState::Loaded(rows) if rows.is_empty() => view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--center" colspan="3">
                                        "No collection available"
                                    </td>
                                </tr>
                            }
                            .into_any(),
                            FetchState::Loaded(rows) => rows
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--center">{row.name}</td>
                                            <td class="table__cell table__cell--center">{row.clothes_count}</td>
                                            <td class="table__cell table__cell--center">
                                                <a class="table__link" href=format!("/stocks/{}", row.id)>
                                                    "Go to the collection"
                                                </a>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any(),
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

async fn fetch_collections() -> Result<Vec<CollectionSummary>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = api_url("/api/collection");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
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
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Vec<CollectionSummary> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::collection::aggregate::CollectionId;

    #[test]
    fn row_carries_clothes_count() {
        let summary = CollectionSummary {
            id: CollectionId::new_v4(),
            name: "Summer".into(),
            clothes: Vec::new(),
        };
        let row: CollectionRow = summary.into();
        assert_eq!(row.name, "Summer");
        assert_eq!(row.clothes_count, 0);
    }
}
