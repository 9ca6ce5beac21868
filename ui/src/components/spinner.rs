use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div
            role="status"
            aria-label="loading"
            class="w-8 h-8 border-4 border-zinc-300 border-t-sky-500 rounded-full animate-spin"
        ></div>
    }
}
