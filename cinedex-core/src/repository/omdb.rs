use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use cinedex_model::Movie;

use crate::adapter::Adapter;
use crate::builder::omdb;
use crate::error::{Error, Result};
use crate::matching::resolution::{self, ResolveOptions};
use crate::repository::{EpisodeQuery, MovieRepository};

/// Repository over the general film-database provider.
///
/// The whole API hangs off one endpoint driven by query parameters, and
/// search responses signal "nothing" with `Response: "False"` rather than an
/// empty list. The catalog has listing search (`Search[]`) but no bulk
/// enumeration, episodes, or change feed.
#[derive(Debug)]
pub struct OmdbRepository {
    adapter: Arc<dyn Adapter>,
    options: ResolveOptions,
}

impl OmdbRepository {
    pub fn new(adapter: Arc<dyn Adapter>) -> Self {
        Self {
            adapter,
            options: ResolveOptions::default(),
        }
    }

    pub fn try_fuzzy_on_fail(&mut self) -> &mut Self {
        self.options.try_fuzzy_on_fail = true;
        self
    }

    pub fn do_not_try_fuzzy_on_fail(&mut self) -> &mut Self {
        self.options.try_fuzzy_on_fail = false;
        self
    }

    pub fn set_threshold(&mut self, threshold: usize) -> &mut Self {
        self.options.threshold = threshold;
        self
    }

    fn response_is_false(result: &Value) -> bool {
        result.get("Response").and_then(Value::as_str) == Some("False")
    }

    async fn search(&self, title: &str) -> Result<Vec<Value>> {
        let params = [("s", title.to_string()), ("r", "json".to_string())];
        let result = self.adapter.get("", &params).await?;

        if Self::response_is_false(&result) {
            return Ok(Vec::new());
        }

        Ok(result
            .get("Search")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl MovieRepository for OmdbRepository {
    async fn one_of_id(&self, id: &str) -> Result<Movie> {
        let params = [("i", id.to_string()), ("r", "json".to_string())];
        let result = self.adapter.get("", &params).await?;

        if Self::response_is_false(&result) {
            return Err(Error::NotFound);
        }

        omdb::build_movie(&result)
    }

    async fn one_of_title(&self, title: &str, year: Option<u16>) -> Result<Movie> {
        let candidates = self.many_with_title(title).await?;
        if let Some(winner) = resolution::select_exact(candidates, year) {
            return Ok(winner);
        }

        if self.options.try_fuzzy_on_fail {
            let candidates = self.many_with_title_like(title).await?;
            if !candidates.is_empty() {
                return resolution::select_fuzzy(title, candidates, year, self.options.threshold);
            }
        }

        Err(Error::NotFound)
    }

    /// The catalog only has substring search, so the exact listing filters
    /// results down to case-insensitive title equality.
    async fn many_with_title(&self, title: &str) -> Result<Vec<Movie>> {
        self.search(title)
            .await?
            .iter()
            .filter(|item| {
                item.get("Title")
                    .and_then(Value::as_str)
                    .is_some_and(|candidate| candidate.eq_ignore_ascii_case(title))
            })
            .map(omdb::build_movie)
            .collect()
    }

    async fn many_with_title_like(&self, title: &str) -> Result<Vec<Movie>> {
        self.search(title)
            .await?
            .iter()
            .map(omdb::build_movie)
            .collect()
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
