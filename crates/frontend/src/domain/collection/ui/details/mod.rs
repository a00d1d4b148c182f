use crate::domain::clothes::ui::create::model::CollectionRef;
use crate::domain::clothes::ui::create::CreateClothesDialog;
use crate::domain::collection::ui::list::state::FetchState;
use crate::shared::api_utils::api_base;
use contracts::domain::collection::aggregate::CollectionSummary;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Detail page of one collection: its clothes variants plus the creation
/// dialog, reached from the listing's "Go to the collection" link.
#[component]
#[allow(non_snake_case)]
pub fn CollectionDetailPage() -> impl IntoView {
    let params = use_params_map();
    let data = RwSignal::new(FetchState::<CollectionSummary>::Loading);

    let fetch = move |id: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_collection(&id).await {
                Ok(summary) => data.set(FetchState::Loaded(summary)),
                Err(e) => data.set(FetchState::Failed(e)),
            }
        });
    };

    // Refetch when the route parameter changes.
    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        if !id.is_empty() {
            fetch(id);
        }
    });

    view! {
        <section class="content">
            <a class="back-link" href="/stocks">"Back to collections"</a>

            {move || match data.get() {
                FetchState::Loading => view! { <p class="empty-state">"Loading..."</p> }.into_any(),
                FetchState::Failed(e) => view! {
                    <p class="error">{format!("Failed to load collection: {}", e)}</p>
                }
                .into_any(),
                FetchState::Loaded(summary) => {
                    let collection_ref = CollectionRef {
                        id: summary.id.as_string(),
                        name: summary.name.clone(),
                    };
                    let refetch_id = summary.id.as_string();
                    view! {
                        <div class="header">
                            <h2>{summary.name.clone()}</h2>
                            <div class="header__actions">
                                <CreateClothesDialog
                                    collection=collection_ref
                                    on_created=Callback::new(move |_| fetch(refetch_id.clone()))
                                />
                            </div>
                        </div>

                        <div class="table-container">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Image"</th>
                                        <th class="table__header-cell">"Design"</th>
                                        <th class="table__header-cell">"Color"</th>
                                        <th class="table__header-cell">"Price"</th>
                                        <th class="table__header-cell">"Total stock"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if summary.clothes.is_empty() {
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell table__cell--center" colspan="5">
                                                    "No clothes in this collection yet"
                                                </td>
                                            </tr>
                                        }
                                        .into_any()
                                    } else {
                                        summary
                                            .clothes
                                            .iter()
                                            .map(|item| {
                                                let image = item.image_path.clone();
                                                view! {
                                                    <tr class="table__row">
                                                        <td class="table__cell">
                                                            {match image {
                                                                Some(path) => view! {
                                                                    <img
                                                                        class="table__thumbnail"
                                                                        src=format!("{}{}", api_base(), path)
                                                                        alt=item.design.clone()
                                                                    />
                                                                }
                                                                .into_any(),
                                                                None => view! { <span>"-"</span> }.into_any(),
                                                            }}
                                                        </td>
                                                        <td class="table__cell">{item.design.clone()}</td>
                                                        <td class="table__cell">{item.color.clone()}</td>
                                                        <td class="table__cell">{format!("{:.2}", item.price)}</td>
                                                        <td class="table__cell">{item.total_stock()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                            .into_any()
                                    }}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

async fn fetch_collection(id: &str) -> Result<CollectionSummary, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/collection/{}", api_base(), id);
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

    if resp.status() == 404 {
        return Err("Not found".to_string());
    }
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: CollectionSummary = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}
