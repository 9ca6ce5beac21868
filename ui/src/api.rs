use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::components::feedback::FeedbackForm;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub signed_in: bool,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FeedbackReceipt {
    pub id: String,
    pub received_at: String,
}

/// Error text for a non-2xx answer, keeping the status visible in logs.
pub fn http_error(status: u16, detail: &str) -> String {
    let detail = detail.trim();
    if detail.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {detail}")
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    if !resp.ok() {
        let detail = resp.text().await.unwrap_or_default();
        return Err(http_error(resp.status(), &detail));
    }

    resp.json::<T>().await.map_err(|e| e.to_string())
}

pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    let resp = Request::get("/api/projects")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

pub async fn fetch_session() -> Result<Session, String> {
    let resp = Request::get("/api/session")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

pub async fn submit_feedback(form: &FeedbackForm) -> Result<FeedbackReceipt, String> {
    let resp = Request::post("/api/feedback")
        .json(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}
