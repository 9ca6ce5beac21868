use std::sync::Arc;

use actix_web::{get, web};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::SanityConfig;
use crate::error::ApiError;
use crate::state::AppState;

const PROJECTS_QUERY: &str =
    r#"*[_type == "mainprojects"]{_id, title, description, image, projectUrl}"#;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
}

/// Turns an asset reference like `image-<id>-<w>x<h>-<ext>` into a CDN url.
pub fn image_url(reference: &str, cdn_base: &str) -> Option<String> {
    let rest = reference.strip_prefix("image-")?;
    let (name, ext) = rest.rsplit_once('-')?;
    if name.is_empty() || ext.is_empty() {
        return None;
    }
    Some(format!("{cdn_base}/{name}.{ext}"))
}

pub fn parse_projects(
    data: &serde_json::Value,
    sanity: &SanityConfig,
) -> Result<Vec<ProjectDto>, ApiError> {
    let docs = data
        .pointer("/result")
        .and_then(|v| v.as_array())
        .ok_or(ApiError::UpstreamShape("result array missing"))?;

    let cdn_base = sanity.image_base();

    let out = docs
        .iter()
        .filter_map(|doc| {
            // _id is the only field we require
            let id = doc.get("_id")?.as_str()?.to_owned();

            let text = |key: &str| {
                doc.get(key)
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_owned()
            };

            let image_url = doc
                .pointer("/image/asset/_ref")
                .and_then(|v| v.as_str())
                .and_then(|r| {
                    let url = image_url(r, &cdn_base);
                    if url.is_none() {
                        warn!("project {id}: unrecognised image reference {r:?}");
                    }
                    url
                });

            let project_url = doc
                .get("projectUrl")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(String::from);

            Some(ProjectDto {
                title: text("title"),
                description: text("description"),
                image_url,
                project_url,
                id,
            })
        })
        .collect();

    Ok(out)
}

async fn fetch_projects(state: &AppState) -> Result<Vec<ProjectDto>, ApiError> {
    let sanity = &state.config.sanity;

    let mut req = state
        .http
        .get(sanity.query_url())
        .query(&[("query", PROJECTS_QUERY)]);
    if let Some(token) = &sanity.token {
        req = req.bearer_auth(token);
    }

    let data: serde_json::Value = req.send().await?.error_for_status()?.json().await?;
    parse_projects(&data, sanity)
}

#[get("/api/projects")]
pub async fn projects(state: web::Data<AppState>) -> Result<web::Json<Vec<ProjectDto>>, ApiError> {
    let key = state.config.sanity.dataset.clone();

    // concurrent misses share one upstream request
    let list = state
        .projects
        .try_get_with(key.clone(), async {
            let out = fetch_projects(&state).await?;
            debug!("fetched {} projects from dataset {key}", out.len());
            Ok::<_, ApiError>(Arc::new(out))
        })
        .await
        .map_err(ApiError::Shared)?;

    Ok(web::Json((*list).clone()))
}
