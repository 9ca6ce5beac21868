use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use reqwest::Url;

pub struct Config {
    pub host: String,
    pub port: u16,
    /// Origin visitors reach the site on, used for sign-in return links.
    pub public_url: Url,
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub projects_ttl: Duration,
    pub sanity: SanityConfig,
    pub identity: IdentityConfig,
}

/// Hosted content store holding the `mainprojects` documents.
pub struct SanityConfig {
    pub api_host: String,
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: Option<String>,
}

impl SanityConfig {
    pub fn query_url(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.api_host.trim_end_matches('/'),
            self.api_version,
            self.dataset
        )
    }

    pub fn image_base(&self) -> String {
        format!("https://cdn.sanity.io/images/{}/{}", self.project_id, self.dataset)
    }
}

pub struct IdentityConfig {
    pub userinfo_url: Url,
    pub sign_in_url: Url,
}

impl Config {
    pub fn load() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            info!(".env not loaded ({e}), reading process environment only");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let ttl_secs: u64 = try_load(&lookup, "PROJECTS_CACHE_TTL_SECS", "300")?;
        let host: String = try_load(&lookup, "SITE_HOST", "127.0.0.1")?;
        let port: u16 = try_load(&lookup, "SITE_PORT", "3000")?;
        let public_url = try_load(&lookup, "SITE_PUBLIC_URL", &format!("http://{host}:{port}/"))?;
        let project_id = required(&lookup, "SANITY_PROJECT_ID")?;
        let api_host = try_load(
            &lookup,
            "SANITY_API_HOST",
            &format!("https://{project_id}.api.sanity.io"),
        )?;

        Ok(Self {
            host,
            port,
            public_url,
            dist_dir: try_load(&lookup, "SITE_DIST_DIR", "../dist")?,
            assets_dir: try_load(&lookup, "SITE_ASSETS_DIR", "../assets")?,
            projects_ttl: Duration::from_secs(ttl_secs),
            sanity: SanityConfig {
                api_host,
                project_id,
                dataset: try_load(&lookup, "SANITY_DATASET", "production")?,
                api_version: try_load(&lookup, "SANITY_API_VERSION", "2024-01-01")?,
                token: lookup("SANITY_TOKEN").filter(|t| !t.is_empty()),
            },
            identity: IdentityConfig {
                userinfo_url: required_url(&lookup, "IDENTITY_USERINFO_URL")?,
                sign_in_url: required_url(&lookup, "IDENTITY_SIGN_IN_URL")?,
            },
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("invalid {key} value {raw:?}: {e}")
    })
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow!("environment variable {key} is required"))
}

fn required_url(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Url> {
    let raw = required(lookup, key)?;
    Url::parse(&raw).with_context(|| format!("{key} is not a valid URL"))
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Self::for_tests_with(&[])
    }

    /// Test config where `overrides` win over the fixed defaults.
    pub fn for_tests_with(overrides: &[(&str, &str)]) -> Self {
        let overrides: Vec<(String, String)> = overrides
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self::from_lookup(move |key| {
            if let Some((_, v)) = overrides.iter().find(|(k, _)| k == key) {
                return Some(v.clone());
            }
            match key {
                "SANITY_PROJECT_ID" => Some("abc123"),
                "IDENTITY_USERINFO_URL" => Some("https://id.example.test/userinfo"),
                "IDENTITY_SIGN_IN_URL" => Some("https://id.example.test/sign-in"),
                _ => None,
            }
            .map(String::from)
        })
        .expect("test config")
    }
}
