use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use cinedex_model::{MediaType, Movie};

use crate::adapter::Adapter;
use crate::builder::{guidebox, value_year, year_of_date};
use crate::error::{Error, Result};
use crate::matching::resolution::{self, ResolveOptions};
use crate::repository::{EpisodeQuery, MovieRepository};

const UPDATE_MAX: u32 = 1000;

/// Which change feed `many_with_changes` reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateChannel {
    NewMovies,
    ChangedMovies,
    NewEpisodes,
    ChangedEpisodes,
}

impl UpdateChannel {
    fn as_str(self) -> &'static str {
        match self {
            UpdateChannel::NewMovies => "new",
            UpdateChannel::ChangedMovies => "changes",
            UpdateChannel::NewEpisodes => "new_episodes",
            UpdateChannel::ChangedEpisodes => "changed_episodes",
        }
    }
}

/// Repository over the catalog/streaming-availability provider.
///
/// The API is path-addressed (`search/movie/title/{title}/exact`), with the
/// api key baked into the adapter's base URL.
#[derive(Debug)]
pub struct GuideboxRepository {
    adapter: Arc<dyn Adapter>,
    kind: MediaType,
    options: ResolveOptions,
    update: UpdateChannel,
}

impl GuideboxRepository {
    pub fn new(adapter: Arc<dyn Adapter>) -> Self {
        Self {
            adapter,
            kind: MediaType::Movie,
            options: ResolveOptions::default(),
            update: UpdateChannel::NewMovies,
        }
    }

    pub fn search_for_movies(&mut self) -> &mut Self {
        self.kind = MediaType::Movie;
        self
    }

    pub fn search_for_shows(&mut self) -> &mut Self {
        self.kind = MediaType::TvShow;
        self
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

    pub fn with_new_movies(&mut self) -> &mut Self {
        self.update = UpdateChannel::NewMovies;
        self
    }

    pub fn with_updated_movies(&mut self) -> &mut Self {
        self.update = UpdateChannel::ChangedMovies;
        self
    }

    pub fn with_new_episodes(&mut self) -> &mut Self {
        self.update = UpdateChannel::NewEpisodes;
        self
    }

    pub fn with_updated_episodes(&mut self) -> &mut Self {
        self.update = UpdateChannel::ChangedEpisodes;
        self
    }

    /// The provider's clock, used as the cursor for change feeds.
    pub async fn current_time(&self) -> Result<i64> {
        let result = self.adapter.get("updates/get_current_time", &[]).await?;
        result
            .get("results")
            .and_then(Value::as_i64)
            .ok_or_else(|| Error::Api("current time missing from response".to_string()))
    }

    /// The catalog expects its title and id path segments encoded three
    /// times over.
    fn encode(segment: &str) -> String {
        let mut encoded = segment.to_string();
        for _ in 0..3 {
            encoded = urlencoding::encode(&encoded).into_owned();
        }
        encoded
    }

    fn kind_segment(&self) -> &'static str {
        match self.kind {
            MediaType::Movie => "movie",
            MediaType::TvShow => "show",
        }
    }

    async fn search(&self, title: &str, mode: &str) -> Result<Vec<Value>> {
        let encoded = Self::encode(title);
        // only the movie search nests the kind segment
        let path = match self.kind {
            MediaType::Movie => format!("search/movie/title/{encoded}/{mode}"),
            MediaType::TvShow => format!("search/title/{encoded}/{mode}"),
        };

        tracing::debug!(title, mode, "guidebox title search");
        let result = self.adapter.get(&path, &[]).await?;
        Ok(result
            .get("results")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    /// Exact-phase year check against the raw payload: a `release_year`
    /// match wins, with the `first_aired` year as the fallback.
    fn payload_year_matches(item: &Value, year: u16) -> bool {
        if item.get("release_year").and_then(value_year) == Some(year) {
            return true;
        }
        item.get("first_aired")
            .and_then(Value::as_str)
            .and_then(year_of_date)
            == Some(year)
    }
}

#[async_trait]
impl MovieRepository for GuideboxRepository {
    async fn one_of_id(&self, id: &str) -> Result<Movie> {
        let path = format!("{}/{}", self.kind_segment(), Self::encode(id));
        let result = self.adapter.get(&path, &[]).await?;

        let empty = result.is_null()
            || result.as_object().is_some_and(|object| object.is_empty());
        if empty {
            return Err(Error::NotFound);
        }

        guidebox::build_movie(&result, self.kind)
    }

    async fn one_of_title(&self, title: &str, year: Option<u16>) -> Result<Movie> {
        let results = self.search(title, "exact").await?;

        match year {
            None => {
                if let Some(item) = results.first() {
                    return guidebox::build_movie(item, self.kind);
                }
            }
            Some(year) => {
                for item in &results {
                    if Self::payload_year_matches(item, year) {
                        return guidebox::build_movie(item, self.kind);
                    }
                }
            }
        }

        if self.options.try_fuzzy_on_fail {
            let candidates = self.many_with_title_like(title).await?;
            if !candidates.is_empty() {
                return resolution::select_fuzzy(title, candidates, year, self.options.threshold);
            }
        }

        Err(Error::NotFound)
    }

    async fn many_with_title(&self, title: &str) -> Result<Vec<Movie>> {
        self.search(title, "exact")
            .await?
            .iter()
            .map(|item| guidebox::build_movie(item, self.kind))
            .collect()
    }

    async fn many_with_title_like(&self, title: &str) -> Result<Vec<Movie>> {
        self.search(title, "fuzzy")
            .await?
            .iter()
            .map(|item| guidebox::build_movie(item, self.kind))
            .collect()
    }

    async fn many(&self, start_at: u32, num_records: u32) -> Result<Vec<Movie>> {
        let path = format!(
            "{}/all/{start_at}/{num_records}/all/all",
            self.kind_segment()
        );
        let result = self.adapter.get(&path, &[]).await?;

        result
            .get("results")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|item| guidebox::build_movie(item, self.kind))
            .collect()
    }

    async fn many_episodes_of_show(
        &self,
        mut movie: Movie,
        id: &str,
        query: &EpisodeQuery,
    ) -> Result<Movie> {
        let season = query
            .season
            .map_or_else(|| "all".to_string(), |season| season.to_string());
        let path = format!(
            "show/{}/episodes/{season}/{}/{}/{}/{}/{}",
            Self::encode(id),
            query.start_at,
            query.limit,
            query.sources,
            query.platform,
            query.include_links,
        );
        let params = [("reverse_ordering", query.reverse_order.to_string())];

        let result = self.adapter.get(&path, &params).await?;
        if let Some(results) = result.get("results").and_then(Value::as_array) {
            for item in results {
                movie.add_episode(guidebox::build_episode(item)?);
            }
        }

        Ok(movie)
    }

    async fn many_with_changes(&self, since: i64) -> Result<Vec<Value>> {
        let mut entries = Vec::new();
        let mut page = 1u64;
        let mut total_pages = 1u64;

        // the plural kind segment is what the feed expects
        let path = format!(
            "updates/{}s/{}/{since}",
            self.kind_segment(),
            self.update.as_str()
        );

        while page <= total_pages {
            let params = [
                ("limit", UPDATE_MAX.to_string()),
                ("page", page.to_string()),
            ];
            let result = self.adapter.get(&path, &params).await?;

            if let Some(pages) = result.get("total_pages").and_then(Value::as_u64) {
                total_pages = pages;
            }
            // entries are bare ids and timestamps, so they stay raw
            if let Some(results) = result.get("results").and_then(Value::as_array) {
                entries.extend(results.iter().cloned());
            }

            page += 1;
        }

        Ok(entries)
    }
}
