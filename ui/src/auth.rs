use leptos::prelude::*;

use crate::api::{Session, User, fetch_session};

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    Loading,
    SignedOut,
    SignedIn(User),
}

impl AuthState {
    /// `None` means the session request has not resolved yet.
    pub fn from_fetch(fetched: Option<Result<Session, String>>) -> Self {
        match fetched {
            None => AuthState::Loading,
            Some(Ok(session)) => session.into(),
            Some(Err(e)) => {
                leptos::logging::error!("session lookup failed: {e}");
                AuthState::SignedOut
            }
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthState::SignedIn(_))
    }
}

impl From<Session> for AuthState {
    fn from(session: Session) -> Self {
        match session.user {
            Some(user) if session.signed_in => AuthState::SignedIn(user),
            _ => AuthState::SignedOut,
        }
    }
}

#[derive(Copy, Clone)]
pub struct Auth(Signal<AuthState>);

impl Auth {
    pub fn state(&self) -> AuthState {
        self.0.get()
    }

    pub fn is_signed_in(&self) -> bool {
        self.0.with(AuthState::is_signed_in)
    }
}

pub fn provide_auth() -> Auth {
    let session = LocalResource::new(fetch_session);
    let auth = Auth(Signal::derive(move || AuthState::from_fetch(session.get())));
    provide_context(auth);
    auth
}

pub fn use_auth() -> Auth {
    expect_context::<Auth>()
}

fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Avatar with a sign-out link when signed in, the login pill otherwise.
#[component]
pub fn AuthButton() -> impl IntoView {
    let auth = use_auth();

    move || match auth.state() {
        AuthState::SignedIn(user) => {
            let avatar = match user.avatar_url.clone() {
                Some(src) => view! {
                    <img src=src alt=user.name.clone() class="w-10 h-10 rounded-full"/>
                }
                .into_any(),
                None => view! {
                    <span class="w-10 h-10 rounded-full flex items-center justify-center bg-sky-500 text-white">
                        { initial(&user.name) }
                    </span>
                }
                .into_any(),
            };

            view! {
                <div class="group relative flex items-center border-2 rounded-full">
                    { avatar }
                    <a
                        href="/sign-out"
                        class="absolute top-full right-0 mt-2 hidden group-hover:block whitespace-nowrap \
                               bg-white dark:bg-black border border-zinc-400 dark:border-zinc-700 rounded px-3 py-1"
                    >
                        "Sign out"
                    </a>
                </div>
            }
            .into_any()
        }
        AuthState::SignedOut | AuthState::Loading => view! {
            <a
                href="/sign-in"
                class="flex cursor-pointer hover:text-white border border-zinc-400 dark:border-zinc-700 \
                       hover:border-sky-500 hover:shadow-lg hover:bg-gradient-to-br from-sky-500 to-blue-700 rounded-full"
            >
                <span class="hidden sm:inline text-sm px-8 py-2">"Login"</span>
                <span class="block sm:hidden p-2">"↪"</span>
            </a>
        }
        .into_any(),
    }
}
