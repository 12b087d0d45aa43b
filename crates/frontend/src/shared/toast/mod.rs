use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen before dismissing itself.
const TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIntent {
    Success,
    Error,
}

#[derive(Clone)]
struct ToastEntry {
    id: u64,
    intent: ToastIntent,
    builder: Arc<dyn Fn() -> AnyView + Send + Sync>,
}

/// Centralized toast stack for transient notifications.
///
/// Copyable handle over reactive storage; push from any event handler or
/// async task. Entries carry a view builder instead of plain text so a
/// message can emphasize the affected record's name.
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

    pub fn success<F>(&self, builder: F)
    where
        F: Fn() -> AnyView + Send + Sync + 'static,
    {
        self.push(ToastIntent::Success, builder);
    }

    pub fn error<F>(&self, builder: F)
    where
        F: Fn() -> AnyView + Send + Sync + 'static,
    {
        self.push(ToastIntent::Error, builder);
    }

    fn push<F>(&self, intent: ToastIntent, builder: F)
    where
        F: Fn() -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|list| {
            list.push(ToastEntry {
                id,
                intent,
                builder: Arc::new(builder),
            });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        // try_update: the auto-dismiss task can outlive the reactive owner.
        let _ = self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the service provided in `App`.
pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

/// Renders the toast stack in a fixed corner; a click dismisses a toast
/// early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.intent {
                        ToastIntent::Success => "toast toast--success",
                        ToastIntent::Error => "toast toast--error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| svc.dismiss(id)>
                            <span class="toast__message">{(toast.builder)()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
