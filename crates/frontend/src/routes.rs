use crate::domain::collection::ui::details::CollectionDetailPage;
use crate::domain::collection::ui::list::StocksPage;
use crate::layout::shell::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="empty-state">"Page not found"</p> }>
                    <Route path=path!("/") view=StocksPage />
                    <Route path=path!("/stocks") view=StocksPage />
                    <Route path=path!("/stocks/:id") view=CollectionDetailPage />
                </Routes>
            </Shell>
        </Router>
    }
}
