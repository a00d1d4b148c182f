use crate::shared::modal_stack::ModalHost;
use crate::shared::toast::ToastHost;
use leptos::prelude::*;

/// Application frame: header with navigation, routed content, and the
/// modal/toast hosts mounted exactly once.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <header class="app-header">
                <span class="app-header__brand">"Rise Admin"</span>
                <nav class="app-header__nav">
                    <a href="/stocks">"Stocks"</a>
                </nav>
            </header>
            <main class="app-main">{children()}</main>
            <ModalHost />
            <ToastHost />
        </div>
    }
}
