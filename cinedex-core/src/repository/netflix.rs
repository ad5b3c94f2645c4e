use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use cinedex_model::Movie;

use crate::adapter::Adapter;
use crate::builder::netflix;
use crate::error::{Error, Result};
use crate::repository::{EpisodeQuery, MovieRepository};

/// Repository over the minimal streaming-search provider.
///
/// The catalog is a single title-lookup endpoint for streaming films:
/// no id lookup, no listings, no episodes, no fuzzy search — which is why
/// this type carries no resolution configuration at all. Title resolution
/// is exact-phase only, with the year constraint pushed down to the
/// provider.
#[derive(Debug)]
pub struct NetflixRepository {
    adapter: Arc<dyn Adapter>,
}

impl NetflixRepository {
    pub fn new(adapter: Arc<dyn Adapter>) -> Self {
        Self { adapter }
    }
}

#[async_trait]
impl MovieRepository for NetflixRepository {
    async fn one_of_id(&self, _id: &str) -> Result<Movie> {
        Err(Error::Unsupported("id lookups"))
    }

    async fn one_of_title(&self, title: &str, year: Option<u16>) -> Result<Movie> {
        let mut params = vec![("title", title.to_string())];
        if let Some(year) = year {
            params.push(("year", year.to_string()));
        }

        let result = self.adapter.get("", &params).await?;

        let missing = result.is_null()
            || result.get("errorcode").and_then(Value::as_i64) == Some(404);
        if missing {
            return Err(Error::NotFound);
        }

        netflix::build_movie(&result)
    }

    async fn many_with_title(&self, _title: &str) -> Result<Vec<Movie>> {
        Err(Error::Unsupported("title listings"))
    }

    async fn many_with_title_like(&self, _title: &str) -> Result<Vec<Movie>> {
        Err(Error::Unsupported("fuzzy title search"))
    }

    async fn many(&self, _start_at: u32, _num_records: u32) -> Result<Vec<Movie>> {
        Err(Error::Unsupported("bulk listings"))
    }

    async fn many_episodes_of_show(
        &self,
        _movie: Movie,
        _id: &str,
        _query: &EpisodeQuery,
    ) -> Result<Movie> {
        Err(Error::Unsupported("episode listings"))
    }

    async fn many_with_changes(&self, _since: i64) -> Result<Vec<Value>> {
        Err(Error::Unsupported("change feeds"))
    }
}
