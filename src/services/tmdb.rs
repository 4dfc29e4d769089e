//! TMDB API client (catalog collaborator).
//!
//! Supplies the authoritative season/episode structure consumed by the
//! reconciler. Lookups take the first search result only; callers treat
//! any error or empty result as "catalog unavailable" and fall back to a
//! local-only report.

use crate::models::config::TmdbSettings;
use crate::models::media::{CatalogSeason, ShowCatalog};
use crate::Result;
use serde::Deserialize;
use std::time::Duration;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB client configuration.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API key or Bearer token (JWT)
    pub api_key: String,
    pub language: String,
    /// Whether to use Bearer token authentication (API v4 style)
    pub use_bearer: bool,
    /// Delay inserted between API calls.
    pub rate_limit_delay: Duration,
}

impl TmdbConfig {
    /// Build config from settings, falling back to the TMDB_API_KEY
    /// environment variable. Supports both API key (v3) and Bearer token
    /// (v4) formats.
    pub fn from_settings(settings: &TmdbSettings) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .or_else(|| std::env::var("TMDB_API_KEY").ok())
            .ok_or(crate::Error::TmdbApiKeyMissing)?;

        // Bearer tokens start with "eyJ" (base64 encoded JWT header)
        let use_bearer = api_key.starts_with("eyJ");

        Ok(Self {
            api_key,
            language: settings.language.clone(),
            use_bearer,
            rate_limit_delay: Duration::from_millis(settings.rate_limit_delay_ms),
        })
    }
}

/// TMDB API client.
pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

/// TV show search result.
#[derive(Debug, Deserialize)]
pub struct TvSearchResult {
    pub results: Vec<TvSearchItem>,
}

/// TV show search item.
#[derive(Debug, Deserialize)]
pub struct TvSearchItem {
    pub id: u64,
    pub name: String,
    pub first_air_date: Option<String>,
    pub overview: Option<String>,
}

/// TV show details.
#[derive(Debug, Deserialize)]
pub struct TvDetails {
    pub id: u64,
    pub name: String,
    pub number_of_seasons: u16,
    pub number_of_episodes: u16,
    pub status: Option<String>,
    pub seasons: Vec<TvSeason>,
}

/// Season summary within TV show details.
#[derive(Debug, Deserialize)]
pub struct TvSeason {
    pub season_number: u16,
    pub episode_count: u16,
    pub air_date: Option<String>,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Create a client from app settings.
    pub fn from_settings(settings: &TmdbSettings) -> Result<Self> {
        Ok(Self::new(TmdbConfig::from_settings(settings)?))
    }

    /// Build a request with proper authentication.
    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        if self.config.use_bearer {
            request.header("Authorization", format!("Bearer {}", self.config.api_key))
        } else {
            request
        }
    }

    /// Build URL with optional api_key parameter (only for v3 style).
    fn build_url(&self, path: &str, extra_params: &str) -> String {
        if self.config.use_bearer {
            format!(
                "{}/{}?language={}{}",
                TMDB_BASE_URL, path, self.config.language, extra_params
            )
        } else {
            format!(
                "{}/{}?api_key={}&language={}{}",
                TMDB_BASE_URL, path, self.config.api_key, self.config.language, extra_params
            )
        }
    }

    /// Fixed delay between calls to respect API quotas.
    async fn rate_limit(&self) {
        tokio::time::sleep(self.config.rate_limit_delay).await;
    }

    /// Search for TV shows.
    pub async fn search_tv(&self, query: &str) -> Result<Vec<TvSearchItem>> {
        let url = self.build_url(
            "search/tv",
            &format!("&query={}", urlencoding::encode(query)),
        );

        let resp: TvSearchResult = self.build_request(&url).send().await?.json().await?;
        Ok(resp.results)
    }

    /// Get TV show details, including the season list.
    pub async fn get_tv_details(&self, tv_id: u64) -> Result<TvDetails> {
        let url = self.build_url(&format!("tv/{}", tv_id), "");
        let resp = self.build_request(&url).send().await?.json().await?;
        Ok(resp)
    }

    /// Look up the season/episode catalog for a show title.
    ///
    /// Takes the first search result; returns `Ok(None)` when the provider
    /// knows nothing about the title. Specials (season 0) are dropped.
    pub async fn lookup_show(&self, title: &str) -> Result<Option<ShowCatalog>> {
        let results = self.search_tv(title).await?;

        let Some(first) = results.first() else {
            tracing::warn!("No TMDB results for '{}'", title);
            return Ok(None);
        };

        self.rate_limit().await;
        let details = self.get_tv_details(first.id).await?;

        Ok(Some(catalog_from_details(details)))
    }
}

/// Convert raw TV details into the catalog shape the reconciler consumes,
/// excluding specials.
fn catalog_from_details(details: TvDetails) -> ShowCatalog {
    ShowCatalog {
        tmdb_id: details.id,
        title: details.name,
        seasons: details
            .seasons
            .into_iter()
            .filter(|s| s.season_number != 0)
            .map(|s| CatalogSeason {
                season_number: s.season_number,
                episode_count: s.episode_count,
            })
            .collect(),
    }
}
