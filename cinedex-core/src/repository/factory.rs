//! Wiring from [`Config`] to ready-to-use repositories.

use std::sync::Arc;

use anyhow::Context;
use url::Url;

use crate::adapter::HttpAdapter;
use crate::config::Config;
use crate::repository::{
    GuideboxRepository, NetflixRepository, OmdbRepository, TmdbRepository,
};

const GUIDEBOX_BASE: &str = "https://api-public.guidebox.com/v1.43/";
const NETFLIX_BASE: &str = "https://netflixroulette.net/api/api.php";
const OMDB_BASE: &str = "https://www.omdbapi.com/";
const TMDB_BASE: &str = "https://api.themoviedb.org/3/";

pub fn guidebox(config: &Config) -> anyhow::Result<GuideboxRepository> {
    let api_key = config
        .guidebox_api_key
        .as_deref()
        .context("GUIDEBOX_API_KEY is not set")?;
    // region and api key are path segments on this API
    let base_url = Url::parse(&format!(
        "{GUIDEBOX_BASE}{}/{api_key}/",
        config.guidebox_region
    ))?;

    Ok(GuideboxRepository::new(Arc::new(HttpAdapter::new(base_url))))
}

pub fn netflix(config: &Config) -> anyhow::Result<NetflixRepository> {
    let base_url = Url::parse(config.netflix_base_url.as_deref().unwrap_or(NETFLIX_BASE))?;
    Ok(NetflixRepository::new(Arc::new(HttpAdapter::new(base_url))))
}

pub fn omdb(config: &Config) -> anyhow::Result<OmdbRepository> {
    let base_url = Url::parse(config.omdb_base_url.as_deref().unwrap_or(OMDB_BASE))?;
    Ok(OmdbRepository::new(Arc::new(HttpAdapter::new(base_url))))
}

pub fn tmdb(config: &Config) -> anyhow::Result<TmdbRepository> {
    let api_key = config
        .tmdb_api_key
        .as_deref()
        .context("TMDB_API_KEY is not set")?;
    let base_url = Url::parse(TMDB_BASE)?;

    Ok(TmdbRepository::new(
        Arc::new(HttpAdapter::new(base_url)),
        api_key,
        config.tmdb_language.clone(),
    ))
}
