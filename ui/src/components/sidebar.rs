use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::projects::ProjectsState;
use crate::theme::ThemeToggle;

/// Only a click that lands on the backdrop itself closes an open sidebar.
pub fn backdrop_click_closes(open: bool, on_backdrop: bool) -> bool {
    open && on_backdrop
}

/// True when the element that was clicked is the one the listener sits on.
pub fn clicked_backdrop<T: PartialEq>(target: Option<T>, current: Option<T>) -> bool {
    match (target, current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

#[component]
fn SideLink(#[prop(into)] href: String, #[prop(optional)] new_tab: bool, children: Children) -> impl IntoView {
    view! {
        <a
            href=href
            target=new_tab.then_some("_blank")
            rel=new_tab.then_some("noopener")
            class="block py-2 hover:text-sky-500"
        >
            { children() }
        </a>
    }
}

#[component]
pub fn SideBar(
    open: RwSignal<bool>,
    projects: ProjectsState,
    #[prop(into)] mailto: String,
    #[prop(into)] on_feedback: Callback<()>,
) -> impl IntoView {
    let on_backdrop = move |ev: MouseEvent| {
        if backdrop_click_closes(
            open.get_untracked(),
            clicked_backdrop(ev.target(), ev.current_target()),
        ) {
            open.set(false);
        }
    };

    let project_links = move || {
        projects
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
            .into_iter()
            .map(|p| {
                let href = p.project_url.unwrap_or_else(|| "/".to_string());
                view! { <SideLink href new_tab=true>{ p.title }</SideLink> }
            })
            .collect_view()
    };

    view! {
        <div
            class=move || format!(
                "fixed inset-0 z-[55] bg-black/40 transition-opacity duration-300 sm:hidden {}",
                if open.get() { "opacity-100" } else { "opacity-0 pointer-events-none" }
            )
            on:click=on_backdrop
        >
            <aside
                class=move || format!(
                    "absolute top-0 right-0 h-full w-72 overflow-y-auto bg-white dark:bg-black \
                     border-l border-zinc-400 dark:border-zinc-700 p-6 transition-transform duration-300 {}",
                    if open.get() { "translate-x-0" } else { "translate-x-full" }
                )
            >
                <div class="flex justify-between items-center mb-6">
                    <ThemeToggle/>
                    <button
                        aria-label="Close menu"
                        class="text-2xl p-3 rounded-full hover:text-sky-500"
                        on:click=move |_| open.set(false)
                    >
                        "×"
                    </button>
                </div>

                <h3 class="font-bold mt-2">"Author"</h3>
                <SideLink href="/#author">"Who am I ?"</SideLink>
                <SideLink href="/#techStacks">"Tech Stacks"</SideLink>
                <SideLink href="/#freelance">"Freelance"</SideLink>

                <h3 class="font-bold mt-4">"Projects"</h3>
                { project_links }

                <h3 class="font-bold mt-4">"Contact"</h3>
                <SideLink href=mailto>"Email"</SideLink>
                <SideLink href="/#socialMedia">"Social Media"</SideLink>
                <button class="block py-2 hover:text-sky-500" on:click=move |_| on_feedback.run(())>
                    "Give Feedback"
                </button>

                <h3 class="font-bold mt-4">"More"</h3>
                <SideLink href="/create" new_tab=true>"Create ↗"</SideLink>
                <SideLink href="/blogs" new_tab=true>"Blogs ↗"</SideLink>
            </aside>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Node {
        Backdrop,
        Panel,
        PanelLink,
    }

    fn closes(open: bool, target: Node) -> bool {
        backdrop_click_closes(open, clicked_backdrop(Some(target), Some(Node::Backdrop)))
    }

    #[test]
    fn clicking_the_backdrop_closes_the_sidebar() {
        assert!(closes(true, Node::Backdrop));
    }

    #[test]
    fn clicks_inside_the_panel_keep_it_open() {
        assert!(!closes(true, Node::Panel));
        assert!(!closes(true, Node::PanelLink));
    }

    #[test]
    fn closed_sidebar_ignores_clicks() {
        assert!(!closes(false, Node::Backdrop));
    }

    #[test]
    fn missing_targets_never_count_as_backdrop() {
        assert!(!clicked_backdrop(None, Some(Node::Backdrop)));
        assert!(!clicked_backdrop(Some(Node::Backdrop), None));
        assert!(!clicked_backdrop::<Node>(None, None));
    }
}
