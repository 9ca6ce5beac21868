use leptos::prelude::*;

/// Where one menu item stands relative to the controller's active id.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ItemState {
    Inactive,
    Active,
}

impl ItemState {
    pub fn of(active: Option<&str>, item: &str) -> Self {
        if active == Some(item) {
            ItemState::Active
        } else {
            ItemState::Inactive
        }
    }
}

/// A flyout is shown only for the active item, and only if it has a panel.
pub fn flyout_visible(active: Option<&str>, item: &str, has_panel: bool) -> bool {
    has_panel && ItemState::of(active, item) == ItemState::Active
}

/// Owner of the hovered item id. Single writer, read by every `MenuItem`.
#[derive(Copy, Clone)]
pub struct MenuController {
    active: RwSignal<Option<String>>,
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuController {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
        }
    }

    /// Returns false when `item` was already active; readers are not notified then.
    pub fn set_active(&self, item: Option<&str>) -> bool {
        if self.active.with_untracked(|cur| cur.as_deref() == item) {
            return false;
        }
        self.active.set(item.map(str::to_owned));
        true
    }

    pub fn active(&self) -> Option<String> {
        self.active.get()
    }

    pub fn state_of(&self, item: &str) -> ItemState {
        self.active.with(|a| ItemState::of(a.as_deref(), item))
    }

    pub fn is_active(&self, item: &str) -> bool {
        self.state_of(item) == ItemState::Active
    }

    pub fn flyout_visible(&self, item: &str, has_panel: bool) -> bool {
        self.active.with(|a| flyout_visible(a.as_deref(), item, has_panel))
    }

    pub fn setter(&self) -> Callback<Option<String>> {
        let this = *self;
        Callback::new(move |item: Option<String>| {
            this.set_active(item.as_deref());
        })
    }

    pub fn signal(&self) -> Signal<Option<String>> {
        self.active.into()
    }
}

#[component]
pub fn Menu(
    #[prop(into)] set_active: Callback<Option<String>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <nav
            on:mouseleave=move |_| set_active.run(None)
            class="relative rounded-lg border border-zinc-400 dark:border-zinc-700 bg-white/70 \
                   backdrop-blur-[2px] dark:bg-black/85 shadow-lg flex items-center justify-center \
                   m-auto space-x-4 p-4 w-full"
        >
            { children.map(|c| c()) }
        </nav>
    }
}

#[component]
pub fn MenuItem(
    #[prop(into)] set_active: Callback<Option<String>>,
    #[prop(into)] active: Signal<Option<String>>,
    #[prop(into)] item: String,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let has_panel = children.is_some();
    let id = item.clone();
    let visible = move || active.with(|a| flyout_visible(a.as_deref(), &id, has_panel));

    let enter_id = item.clone();
    let flyout = move || {
        children.clone().filter(|_| visible()).map(|panel| {
            view! {
                <div class="absolute top-[calc(100%_+_1.2rem)] left-1/2 pt-4 -translate-x-1/2 animate-flyout">
                    <div class="bg-white dark:bg-black backdrop-blur-sm rounded-lg overflow-hidden \
                                border border-zinc-400 dark:border-zinc-700 shadow-xl">
                        <div class="p-4 w-max h-full">{ panel() }</div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="relative" on:mouseenter=move |_| set_active.run(Some(enter_id.clone()))>
            <p class="flex items-center cursor-pointer px-3 text-base font-normal hover:font-medium \
                      hover:text-sky-500 transition-all duration-200">
                { item }
            </p>
            { flyout }
        </div>
    }
}

#[component]
pub fn HoveredLink(
    #[prop(into)] href: String,
    #[prop(optional)] new_tab: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener")
            class="hover:text-sky-400 text-base font-normal w-full h-full"
        >
            { children() }
        </a>
    }
}

#[component]
pub fn ProductItem(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] href: String,
    #[prop(into)] src: String,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener"
            class="flex space-x-4 items-start justify-center m-auto group hover:bg-gradient-to-tl \
                   from-sky-400 to-cyan-400 hover:text-white text-black dark:text-white rounded-md p-2 \
                   overflow-auto w-full h-full"
        >
            <div class="relative w-44 h-full">
                <img
                    src=src
                    alt=title.clone()
                    width="500"
                    height="500"
                    class="rounded border border-zinc-200 w-full h-full"
                />
            </div>
            <div class="text-sm lg:text-base w-1/2">
                <h4 class="text-base font-bold mb-1 w-full">{ title }</h4>
                <p class="text-xs lg:text-sm">{ description }"..."</p>
            </div>
        </a>
    }
}
