use std::{sync::Arc, time::Duration};

use moka::future::Cache;

use crate::api::projects::ProjectDto;
use crate::config::Config;

pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
    /// project list keyed by dataset, expires after `config.projects_ttl`
    pub projects: Cache<String, Arc<Vec<ProjectDto>>>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("folio-site/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;

        let projects = Cache::builder()
            .time_to_live(config.projects_ttl)
            .max_capacity(8) // one entry per dataset in practice
            .build();

        Ok(Self {
            config,
            http,
            projects,
        })
    }
}
