use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Dark mode offers the sun to switch back, light mode offers the moon.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

#[derive(Copy, Clone)]
pub struct ThemeHandle(RwSignal<Theme>);

impl ThemeHandle {
    pub fn new(initial: Theme) -> Self {
        Self(RwSignal::new(initial))
    }

    pub fn get(&self) -> Theme {
        self.0.get()
    }

    pub fn toggle(&self) {
        self.0.update(|t| *t = t.toggled());
    }
}

fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let res = match theme {
        Theme::Dark => classes.add_1("dark"),
        Theme::Light => classes.remove_1("dark"),
    };
    if res.is_err() {
        leptos::logging::warn!("could not switch theme class on <html>");
    }
}

pub fn provide_theme() -> ThemeHandle {
    let prefers_dark = use_preferred_dark();
    let handle = ThemeHandle::new(Theme::from_preference(prefers_dark.get_untracked()));

    Effect::new(move |_| apply_to_document(handle.get()));

    provide_context(handle);
    handle
}

pub fn use_theme() -> ThemeHandle {
    expect_context::<ThemeHandle>()
}

#[component]
pub fn ThemeToggle(#[prop(optional, into)] extra_class: String) -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class=format!(
                "text-2xl p-3 text-zinc-500 dark:text-zinc-400 hover:text-black dark:hover:text-white \
                 bg-zinc-100 hover:bg-zinc-200 dark:bg-zinc-900 dark:hover:bg-zinc-800 rounded-full {extra_class}"
            )
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            { move || theme.get().icon() }
        </button>
    }
}
