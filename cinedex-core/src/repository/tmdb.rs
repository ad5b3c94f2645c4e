use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use cinedex_model::{MediaType, Movie};

use crate::adapter::Adapter;
use crate::builder::tmdb;
use crate::error::{Error, Result};
use crate::matching::resolution::{self, ResolveOptions};
use crate::matching::slug;
use crate::repository::{EpisodeQuery, MovieRepository};

/// Payload status code the provider uses for "no such resource".
const STATUS_NOT_FOUND: i64 = 34;

/// Repository over the rich metadata provider.
///
/// Search results carry only the shallow fields; the deeper metadata
/// (alternate titles, credits, keywords, recommendations, reviews, similar
/// titles) hides behind per-id sub-resource endpoints and is only fetched
/// for entities the caller actually keeps, controlled by the `with_*`
/// toggles.
#[derive(Debug)]
pub struct TmdbRepository {
    adapter: Arc<dyn Adapter>,
    default_params: Vec<(&'static str, String)>,
    kind: MediaType,
    options: ResolveOptions,
    with_alternate_titles: bool,
    with_cast: bool,
    with_keywords: bool,
    with_recommendations: bool,
    with_reviews: bool,
    with_similar_movies: bool,
}

impl TmdbRepository {
    pub fn new(
        adapter: Arc<dyn Adapter>,
        api_key: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            adapter,
            default_params: vec![("api_key", api_key.into()), ("language", language.into())],
            kind: MediaType::Movie,
            options: ResolveOptions::default(),
            with_alternate_titles: false,
            with_cast: false,
            with_keywords: false,
            with_recommendations: false,
            with_reviews: false,
            with_similar_movies: false,
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

    pub fn with_alternate_titles(&mut self) -> &mut Self {
        self.with_alternate_titles = true;
        self
    }

    pub fn with_cast(&mut self) -> &mut Self {
        self.with_cast = true;
        self
    }

    pub fn with_keywords(&mut self) -> &mut Self {
        self.with_keywords = true;
        self
    }

    pub fn with_recommendations(&mut self) -> &mut Self {
        self.with_recommendations = true;
        self
    }

    pub fn with_reviews(&mut self) -> &mut Self {
        self.with_reviews = true;
        self
    }

    pub fn with_similar_movies(&mut self) -> &mut Self {
        self.with_similar_movies = true;
        self
    }

    pub fn with_all_data(&mut self) -> &mut Self {
        self.with_alternate_titles = true;
        self.with_cast = true;
        self.with_keywords = true;
        self.with_recommendations = true;
        self.with_reviews = true;
        self.with_similar_movies = true;
        self
    }

    fn kind_segment(&self) -> &'static str {
        match self.kind {
            MediaType::Movie => "movie",
            MediaType::TvShow => "tv",
        }
    }

    async fn get(&self, path: &str, extra: &[(&'static str, String)]) -> Result<Value> {
        let mut params = self.default_params.clone();
        params.extend(extra.iter().cloned());
        self.adapter.get(path, &params).await
    }

    async fn search(&self, title: &str) -> Result<Vec<Value>> {
        tracing::debug!(title, kind = %self.kind, "tmdb title search");
        let result = self
            .get(
                &format!("search/{}", self.kind_segment()),
                &[("query", title.to_string())],
            )
            .await?;

        Ok(result
            .get("results")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    /// Exact-title listing: keep only results whose original title collapses
    /// to the same slug as the query.
    async fn search_exact(&self, title: &str, enrich: bool) -> Result<Vec<Movie>> {
        let wanted = slug::title_slug(title);
        let mut movies = Vec::new();

        for item in self.search(title).await? {
            let original = item
                .get("original_title")
                .or_else(|| item.get("original_name"))
                .and_then(Value::as_str)
                .unwrap_or_default();

            if slug::title_slug(original) == wanted {
                let movie = tmdb::build_movie(&item, self.kind)?;
                movies.push(if enrich { self.enrich(movie).await? } else { movie });
            }
        }

        Ok(movies)
    }

    async fn search_like(&self, title: &str, enrich: bool) -> Result<Vec<Movie>> {
        let mut movies = Vec::new();
        for item in self.search(title).await? {
            let movie = tmdb::build_movie(&item, self.kind)?;
            movies.push(if enrich { self.enrich(movie).await? } else { movie });
        }
        Ok(movies)
    }

    /// Fetch every enabled sub-resource and fold it into the movie.
    async fn enrich(&self, mut movie: Movie) -> Result<Movie> {
        let segment = self.kind_segment();
        let id = movie.identity().to_string();

        if self.with_alternate_titles {
            let result = self
                .get(&format!("{segment}/{id}/alternative_titles"), &[])
                .await?;
            if let Some(titles) = result.get("titles").cloned() {
                let titles = serde_json::from_value(titles)
                    .map_err(|_| Error::malformed(tmdb::PROVIDER, "titles"))?;
                tmdb::add_alternate_titles(&mut movie, titles);
            }
        }

        if self.with_cast {
            let result = self.get(&format!("{segment}/{id}/credits"), &[]).await?;
            let credits = serde_json::from_value(result)
                .map_err(|_| Error::malformed(tmdb::PROVIDER, "credits"))?;
            tmdb::add_credits(&mut movie, credits);
        }

        if self.with_keywords {
            let result = self.get(&format!("{segment}/{id}/keywords"), &[]).await?;
            if let Some(keywords) = result.get("keywords").cloned() {
                let keywords = serde_json::from_value(keywords)
                    .map_err(|_| Error::malformed(tmdb::PROVIDER, "keywords"))?;
                tmdb::add_keywords(&mut movie, keywords);
            }
        }

        if self.with_recommendations {
            let result = self
                .get(&format!("{segment}/{id}/recommendations"), &[])
                .await?;
            if let Some(results) = result.get("results").and_then(Value::as_array) {
                tmdb::add_recommendations(&mut movie, results, self.kind);
            }
        }

        if self.with_reviews {
            let result = self.get(&format!("{segment}/{id}/reviews"), &[]).await?;
            if let Some(reviews) = result.get("results").cloned() {
                let reviews = serde_json::from_value(reviews)
                    .map_err(|_| Error::malformed(tmdb::PROVIDER, "reviews"))?;
                tmdb::add_reviews(&mut movie, reviews);
            }
        }

        if self.with_similar_movies {
            let result = self.get(&format!("{segment}/{id}/similar"), &[]).await?;
            if let Some(results) = result.get("results").and_then(Value::as_array) {
                tmdb::add_similar_movies(&mut movie, results, self.kind);
            }
        }

        Ok(movie)
    }
}

#[async_trait]
impl MovieRepository for TmdbRepository {
    async fn one_of_id(&self, id: &str) -> Result<Movie> {
        let result = self.get(&format!("{}/{id}", self.kind_segment()), &[]).await?;

        if result.get("status_code").and_then(Value::as_i64) == Some(STATUS_NOT_FOUND) {
            return Err(Error::NotFound);
        }

        let movie = tmdb::build_movie(&result, self.kind)?;
        self.enrich(movie).await
    }

    async fn one_of_title(&self, title: &str, year: Option<u16>) -> Result<Movie> {
        // resolve over bare listings, enrich only the winner
        let candidates = self.search_exact(title, false).await?;
        if let Some(winner) = resolution::select_exact(candidates, year) {
            return self.enrich(winner).await;
        }

        if self.options.try_fuzzy_on_fail {
            let candidates = self.search_like(title, false).await?;
            if !candidates.is_empty() {
                let winner =
                    resolution::select_fuzzy(title, candidates, year, self.options.threshold)?;
                return self.enrich(winner).await;
            }
        }

        Err(Error::NotFound)
    }

    async fn many_with_title(&self, title: &str) -> Result<Vec<Movie>> {
        self.search_exact(title, true).await
    }

    async fn many_with_title_like(&self, title: &str) -> Result<Vec<Movie>> {
        self.search_like(title, true).await
    }

    async fn many(&self, start_at: u32, num_records: u32) -> Result<Vec<Movie>> {
        let mut movies = Vec::new();

        for id in start_at..start_at.saturating_add(num_records) {
            match self.one_of_id(&id.to_string()).await {
                Ok(movie) => movies.push(movie),
                // ids are sparse, gaps are expected
                Err(Error::NotFound) | Err(Error::Api(_)) => continue,
                Err(err) => return Err(err),
            }
        }

        Ok(movies)
    }

    async fn many_episodes_of_show(
        &self,
        mut movie: Movie,
        id: &str,
        query: &EpisodeQuery,
    ) -> Result<Movie> {
        let season = query.season.ok_or_else(|| {
            Error::InvalidInput("a season number is required for episode listings".to_string())
        })?;

        for episode_number in query.start_at..=query.limit {
            let path = format!("tv/{id}/season/{season}/episode/{episode_number}");
            match self.get(&path, &[]).await {
                Ok(result) => {
                    if result.get("status_code").and_then(Value::as_i64) == Some(STATUS_NOT_FOUND) {
                        continue;
                    }
                    movie.add_episode(tmdb::build_episode(&result)?);
                }
                // specials and gaps surface as plain missing resources
                Err(Error::Api(_)) => continue,
                Err(err) => return Err(err),
            }
        }

        Ok(movie)
    }

    async fn many_with_changes(&self, _since: i64) -> Result<Vec<Value>> {
        Err(Error::Unsupported("change feeds"))
    }
}
