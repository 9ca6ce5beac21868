use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const TOAST_MS: u32 = 3_000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    fn classes(self) -> &'static str {
        match self {
            ToastLevel::Info => "bg-sky-600 text-white",
            ToastLevel::Warning => "bg-amber-400 text-black",
            ToastLevel::Error => "bg-red-600 text-white",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Copy, Clone)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|v| {
            v.push(Toast {
                id,
                level,
                message: message.into(),
            })
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|v| v.retain(|t| t.id != id));
    }

    pub fn items(&self) -> Vec<Toast> {
        self.items.get()
    }

    /// Shows a toast and removes it again after a few seconds.
    pub fn notify(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self.push(level, message);
        let this = *self;
        Timeout::new(TOAST_MS, move || this.dismiss(id)).forget();
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed top-20 inset-x-0 z-[60] flex flex-col items-center gap-2 pointer-events-none">
            <For
                each=move || toasts.items()
                key=|t: &Toast| t.id
                children=move |t: Toast| {
                    let id = t.id;
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "pointer-events-auto rounded-lg shadow-lg px-4 py-2 text-sm cursor-pointer {}",
                                t.level.classes()
                            )
                            on:click=move |_| toasts.dismiss(id)
                        >
                            { t.message }
                        </div>
                    }
                }
            />
        </div>
    }
}
