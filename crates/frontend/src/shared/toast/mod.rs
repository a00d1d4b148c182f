use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone)]
struct ToastEntry {
    id: u64,
    kind: ToastKind,
    title: String,
    description: String,
}

/// Transient notification surface, top-center.
///
/// Same shape as the modal stack: a context-provided service pushing
/// entries into a signal rendered by a single `ToastHost`. Entries
/// auto-dismiss after `TOAST_DURATION_MS`.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), description.into());
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), description.into());
    }

    fn push(&self, kind: ToastKind, title: String, description: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|list| {
            list.push(ToastEntry {
                id,
                kind,
                title,
                description,
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders active toasts top-center.
///
/// Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-host toast-host--top-center">
            <For
                each=move || svc.toasts.get()
                key=|entry| entry.id
                children=move |entry| {
                    let kind_class = match entry.kind {
                        ToastKind::Success => "toast--success",
                        ToastKind::Error => "toast--error",
                    };
                    view! {
                        <div class=format!("toast {kind_class}")>
                            <span class="toast__title">{entry.title.clone()}</span>
                            <span class="toast__description">{entry.description.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
