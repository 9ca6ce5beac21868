use leptos::prelude::*;

use crate::api::fetch_projects;
use crate::auth::{AuthButton, use_auth};
use crate::components::feedback::Feedback;
use crate::components::navbar_menu::{HoveredLink, Menu, MenuController, MenuItem};
use crate::components::projects::{ProjectsPanel, ProjectsState};
use crate::components::sidebar::SideBar;
use crate::components::toast::{ToastLevel, use_toasts};
use crate::contact::owner_mailto;
use crate::profile::OWNER_NAME;
use crate::theme::ThemeToggle;

const NAV_LINK: &str = "flex items-start justify-center space-x-1 pl-3 pr-2 font-normal hover:font-medium \
                        hover:text-sky-500 transition-all duration-200";

#[component]
pub fn Navbar(#[prop(optional, into)] extra_class: String) -> impl IntoView {
    let menu = MenuController::new();
    let auth = use_auth();
    let toasts = use_toasts();

    let modal_open = RwSignal::new(false);
    let sidebar_open = RwSignal::new(false);

    let projects = LocalResource::new(fetch_projects);
    let projects: ProjectsState = Signal::derive(move || projects.get());

    let mailto = owner_mailto();
    let menu_mailto = mailto.clone();

    let on_feedback = Callback::new(move |_: ()| {
        if auth.is_signed_in() {
            modal_open.set(true);
        } else {
            toasts.notify(ToastLevel::Warning, "Please log in to give feedback");
        }
    });

    view! {
        <nav class=format!(
            "fixed top-5 inset-x-0 max-w-[15rem] sm:max-w-[38rem] lg:max-w-[50rem] text-sm sm:text-base mx-auto z-50 {extra_class}"
        )>
            <Menu set_active=menu.setter()>
                <div class="flex items-center justify-between z-50 w-full">
                    <a href="/" class="flex items-center space-x-3">
                        <img src="/assets/logo.svg" alt="logo" width="40" height="40" class="rounded-full"/>
                        <p class="text-base block sm:hidden">{ OWNER_NAME }</p>
                    </a>

                    <div class="hidden sm:flex items-center space-x-6 font-light">
                        <MenuItem set_active=menu.setter() active=menu.signal() item="Author">
                            <div class="flex flex-col space-y-4 text-base">
                                <HoveredLink href="/#author">"Who am I ?"</HoveredLink>
                                <HoveredLink href="/#techStacks">"Tech Stacks"</HoveredLink>
                                <HoveredLink href="/#freelance">"Freelance"</HoveredLink>
                            </div>
                        </MenuItem>

                        <MenuItem set_active=menu.setter() active=menu.signal() item="Projects">
                            <ProjectsPanel projects/>
                        </MenuItem>

                        <MenuItem set_active=menu.setter() active=menu.signal() item="Contact">
                            <div class="flex flex-col space-y-4 text-base">
                                <HoveredLink href=menu_mailto.clone()>"Email"</HoveredLink>
                                <HoveredLink href="/#socialMedia">"Social Media"</HoveredLink>
                                <button
                                    class="text-left hover:text-sky-400 text-base font-normal"
                                    on:click=move |_| on_feedback.run(())
                                >
                                    "Give Feedback"
                                </button>
                            </div>
                        </MenuItem>

                        <a href="/create" target="_blank" rel="noopener" class=NAV_LINK>
                            "Create" <span class="text-xs">"↗"</span>
                        </a>
                        <a href="/blogs" target="_blank" rel="noopener" class=NAV_LINK>
                            "Blogs" <span class="text-xs">"↗"</span>
                        </a>
                    </div>

                    <div class="flex items-center space-x-2 text-xs font-medium dark:text-zinc-100">
                        <AuthButton/>
                        <ThemeToggle extra_class="hidden sm:block"/>
                        <button
                            class="block sm:hidden text-2xl p-3 text-zinc-400 hover:text-black dark:hover:text-white \
                                   bg-zinc-100 hover:bg-zinc-200 dark:bg-zinc-900 dark:hover:bg-zinc-800 rounded-full"
                            aria-label="Open menu"
                            on:click=move |_| sidebar_open.set(true)
                        >
                            "☰"
                        </button>
                    </div>
                </div>
            </Menu>
            <Feedback open=modal_open/>
        </nav>

        <SideBar open=sidebar_open projects mailto on_feedback/>
    }
}
