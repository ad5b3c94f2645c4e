//! Builders for the rich metadata provider.
//!
//! The base payload carries the deep film metadata (collection, budget,
//! production details); alternate titles, credits, keywords,
//! recommendations, reviews and similar titles live behind sub-resource
//! endpoints and arrive through the `add_*` enrichment functions below.

use serde::Deserialize;
use serde_json::Value;

use cinedex_model::{Episode, MediaType, Movie};

use crate::builder::{parse_date, scalar_string, year_of_date};
use crate::error::{Error, Result};

pub(crate) const PROVIDER: &str = "The Movie DB";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub belongs_to_collection: Option<TmdbCollection>,
    #[serde(default)]
    pub budget: Option<u64>,
    #[serde(default)]
    pub revenue: Option<u64>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub genres: Vec<TmdbNamed>,
    #[serde(default)]
    pub production_companies: Vec<TmdbNamed>,
    #[serde(default)]
    pub production_countries: Vec<TmdbNamed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbNamed {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCollection {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbEpisode {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub season_number: Option<u32>,
    #[serde(default)]
    pub episode_number: Option<u32>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
    #[serde(default)]
    pub guest_stars: Vec<TmdbCastMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCastMember {
    pub name: String,
    #[serde(default)]
    pub character: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCrewMember {
    pub name: String,
    pub job: String,
    pub department: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbCredits {
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbAlternateTitle {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbReview {
    pub content: String,
    pub author: String,
    pub url: String,
}

pub fn build_movie(payload: &Value, kind: MediaType) -> Result<Movie> {
    let data: TmdbMovie = serde_json::from_value(payload.clone())
        .map_err(|_| Error::malformed(PROVIDER, "movie payload"))?;

    let id = data
        .id
        .as_ref()
        .and_then(scalar_string)
        .ok_or_else(|| Error::malformed(PROVIDER, "id"))?;
    // movies title under `title`, shows under `original_name`
    let title = data
        .title
        .clone()
        .filter(|title| !title.is_empty())
        .or_else(|| data.original_name.clone().filter(|name| !name.is_empty()))
        .ok_or_else(|| Error::malformed(PROVIDER, "title"))?;
    let year = data
        .release_date
        .as_deref()
        .and_then(year_of_date)
        .or_else(|| data.first_air_date.as_deref().and_then(year_of_date))
        .ok_or_else(|| Error::malformed(PROVIDER, "release date"))?;

    let mut movie = Movie::new(id.clone(), title.clone(), kind, year);
    movie.add_external_id(id, PROVIDER);

    if let Some(original_title) = data
        .original_title
        .filter(|original| !original.is_empty() && *original != title)
    {
        movie.add_alternate_title(original_title);
    }
    if let (Some(name), Some(original_name)) = (data.name.as_ref(), data.original_name.as_ref()) {
        if !name.is_empty() && name != original_name {
            movie.add_alternate_title(name.clone());
        }
    }

    if let Some(plot) = data.overview.filter(|plot| !plot.is_empty()) {
        movie.set_plot(plot);
    }
    if let Some(collection) = data
        .belongs_to_collection
        .and_then(|collection| collection.name)
        .filter(|name| !name.is_empty())
    {
        movie.set_collection(collection);
    }
    if let Some(budget) = data.budget.filter(|budget| *budget > 0) {
        movie.set_budget(budget);
    }
    for genre in data.genres {
        movie.add_genre(genre.name);
    }
    if let Some(homepage) = data.homepage.filter(|homepage| !homepage.is_empty()) {
        movie.set_homepage(homepage);
    }
    if let Some(imdb_id) = data.imdb_id.filter(|imdb_id| !imdb_id.is_empty()) {
        movie.add_external_id(imdb_id, "IMDB");
    }
    if let Some(language) = data.original_language.filter(|language| !language.is_empty()) {
        movie.add_language(language);
    }
    for company in data.production_companies {
        movie.add_production_company(company.name);
    }
    for country in data.production_countries {
        movie.add_production_country(country.name);
    }
    if let Some(revenue) = data.revenue.filter(|revenue| *revenue > 0) {
        movie.set_revenue(revenue);
    }
    if let Some(runtime) = data.runtime.filter(|runtime| *runtime > 0) {
        movie.set_runtime(runtime);
    }
    if let Some(status) = data.status.filter(|status| !status.is_empty()) {
        movie.set_status(status);
    }
    if let Some(tagline) = data.tagline.filter(|tagline| !tagline.is_empty()) {
        movie.set_tagline(tagline);
    }

    Ok(movie)
}

pub fn build_episode(payload: &Value) -> Result<Episode> {
    let data: TmdbEpisode = serde_json::from_value(payload.clone())
        .map_err(|_| Error::malformed(PROVIDER, "episode payload"))?;

    let id = data
        .id
        .as_ref()
        .and_then(scalar_string)
        .ok_or_else(|| Error::malformed(PROVIDER, "id"))?;
    let title = data
        .name
        .clone()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::malformed(PROVIDER, "name"))?;
    let season = data
        .season_number
        .ok_or_else(|| Error::malformed(PROVIDER, "season_number"))?;
    let episode_number = data
        .episode_number
        .ok_or_else(|| Error::malformed(PROVIDER, "episode_number"))?;
    let first_aired = data.air_date.as_deref().and_then(parse_date);

    let mut episode = Episode::new(id, title, first_aired, season, episode_number);

    for crew in data.crew {
        episode.add_crew(crew.name, crew.job, crew.department);
    }
    for guest_star in data.guest_stars {
        episode.add_cast(guest_star.name, guest_star.character);
    }
    if let Some(plot) = data.overview.filter(|plot| !plot.is_empty()) {
        episode.set_plot(plot);
    }

    Ok(episode)
}

pub fn add_alternate_titles(movie: &mut Movie, titles: Vec<TmdbAlternateTitle>) {
    for title in titles {
        movie.add_alternate_title(title.title);
    }
}

pub fn add_credits(movie: &mut Movie, credits: TmdbCredits) {
    for cast in credits.cast {
        movie.add_cast(cast.name, cast.character);
    }
    for crew in credits.crew {
        movie.add_crew(crew.name, crew.job, crew.department);
    }
}

pub fn add_keywords(movie: &mut Movie, keywords: Vec<TmdbNamed>) {
    for keyword in keywords {
        movie.add_keyword(keyword.name);
    }
}

/// Recommendation entries are search-shaped payloads; each becomes a fully
/// built nested movie. Entries the builder rejects are logged and skipped so
/// one broken listing cannot poison the parent.
pub fn add_recommendations(movie: &mut Movie, results: &[Value], kind: MediaType) {
    for item in results {
        match build_movie(item, kind) {
            Ok(related) => {
                movie.add_recommendation(related);
            }
            Err(err) => tracing::warn!(%err, "skipping unusable recommendation entry"),
        }
    }
}

pub fn add_similar_movies(movie: &mut Movie, results: &[Value], kind: MediaType) {
    for item in results {
        match build_movie(item, kind) {
            Ok(related) => {
                movie.add_similar_movie(related);
            }
            Err(err) => tracing::warn!(%err, "skipping unusable similar-title entry"),
        }
    }
}

pub fn add_reviews(movie: &mut Movie, reviews: Vec<TmdbReview>) {
    for review in reviews {
        movie.add_review(review.content, review.author, review.url);
    }
}
