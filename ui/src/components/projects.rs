use leptos::prelude::*;

use crate::api::Project;
use crate::components::navbar_menu::ProductItem;
use crate::components::spinner::LoadingSpinner;

pub const PANEL_LIMIT: usize = 5;
pub const DESCRIPTION_CHARS: usize = 50;
pub const FALLBACK_DESCRIPTION: &str = "Project - short description";
pub const FALLBACK_THUMBNAIL: &str = "/card.png";

/// `None` while the request is in flight.
pub type ProjectsState = Signal<Option<Result<Vec<Project>, String>>>;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub key: String,
    pub title: String,
    pub description: String,
    pub href: String,
    pub src: String,
}

/// Cuts on a char boundary, never inside a multi-byte character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

impl From<&Project> for ProjectCard {
    fn from(p: &Project) -> Self {
        let short = truncate_chars(&p.description, DESCRIPTION_CHARS);
        Self {
            key: p.id.clone(),
            title: p.title.clone(),
            description: if short.is_empty() {
                FALLBACK_DESCRIPTION.to_string()
            } else {
                short.to_string()
            },
            href: p.project_url.clone().unwrap_or_else(|| "/".to_string()),
            src: p
                .image_url
                .clone()
                .unwrap_or_else(|| FALLBACK_THUMBNAIL.to_string()),
        }
    }
}

pub fn panel_cards(projects: &[Project]) -> Vec<ProjectCard> {
    projects.iter().take(PANEL_LIMIT).map(ProjectCard::from).collect()
}

#[component]
pub fn ProjectsPanel(projects: ProjectsState) -> impl IntoView {
    let body = move || match projects.get() {
        None => view! {
            <div class="flex justify-center items-center w-full h-full">
                <LoadingSpinner/>
            </div>
        }
        .into_any(),
        Some(Ok(list)) => panel_cards(&list)
            .into_iter()
            .map(|card| {
                view! {
                    <ProductItem
                        title=card.title
                        description=card.description
                        href=card.href
                        src=card.src
                    />
                }
            })
            .collect_view()
            .into_any(),
        // a failed fetch leaves the panel empty
        Some(Err(e)) => {
            leptos::logging::error!("error fetching projects: {e}");
            ().into_any()
        }
    };

    view! {
        <div class="text-sm grid grid-cols-1 lg:grid-cols-2 gap-2 w-[20rem] lg:w-[40rem] overflow-auto m-auto h-full">
            { body }
        </div>
    }
}
