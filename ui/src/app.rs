use leptos::*;
use leptos::prelude::ElementChild;
use leptos::prelude::ClassAttribute;
use crate::routes::RoutesMenu;
use leptos_router::components::Router;

use leptos_meta::provide_meta_context;
use leptos_meta::Title;

use crate::auth::provide_auth;
use crate::components::navbar::Navbar;
use crate::components::toast::{ToastHost, provide_toasts};
use crate::profile::OWNER_NAME;
use crate::theme::provide_theme;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme();
    provide_toasts();
    provide_auth();

    view! {
      <Title text=OWNER_NAME/>
      <Router>
        <Navbar/>
        <ToastHost/>

        <main class="min-h-screen bg-white text-black dark:bg-black dark:text-white">
          <RoutesMenu/>
        </main>

        <footer class="py-8 text-center text-sm text-zinc-500">
          <p>{ format!("© {OWNER_NAME}") }</p>
        </footer>
      </Router>
    }
}
