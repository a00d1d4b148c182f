use crate::routes::AppRoutes;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Centralized modal management for dialogs
    provide_context(ModalStackService::new());

    // Transient notification surface
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
