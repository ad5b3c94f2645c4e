//! Provider-backed lookup repositories.
//!
//! Each repository owns an [`Adapter`](crate::adapter::Adapter) into one
//! catalog plus its own resolution configuration, and normalizes everything
//! it returns through that catalog's builder module. Operations a catalog
//! cannot express fail with [`Error::Unsupported`](crate::Error::Unsupported).

pub mod factory;
pub mod guidebox;
pub mod netflix;
pub mod omdb;
pub mod tmdb;

use async_trait::async_trait;
use serde_json::Value;

use cinedex_model::Movie;

use crate::error::Result;

pub use guidebox::GuideboxRepository;
pub use netflix::NetflixRepository;
pub use omdb::OmdbRepository;
pub use tmdb::TmdbRepository;

/// Window into a show's episode listing.
#[derive(Debug, Clone)]
pub struct EpisodeQuery {
    /// Season to read; `None` reads across all seasons where the catalog
    /// allows it.
    pub season: Option<u32>,
    pub start_at: u32,
    pub limit: u32,
    pub sources: String,
    pub platform: String,
    pub include_links: bool,
    pub reverse_order: bool,
}

impl Default for EpisodeQuery {
    fn default() -> Self {
        Self {
            season: None,
            start_at: 0,
            limit: 25,
            sources: "all".to_string(),
            platform: "all".to_string(),
            include_links: false,
            reverse_order: false,
        }
    }
}

/// Lookup surface shared by every catalog-backed repository.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Fetch one entity by its provider-assigned id.
    async fn one_of_id(&self, id: &str) -> Result<Movie>;

    /// Resolve a possibly ambiguous title to a single entity: exact-title
    /// phase first, then the optional fuzzy phase (see
    /// [`ResolveOptions`](crate::ResolveOptions)).
    async fn one_of_title(&self, title: &str, year: Option<u16>) -> Result<Movie>;

    /// All entities the catalog's exact-title search returns.
    async fn many_with_title(&self, title: &str) -> Result<Vec<Movie>>;

    /// All entities the catalog's broader title-like search returns.
    async fn many_with_title_like(&self, title: &str) -> Result<Vec<Movie>>;

    /// Bulk listing window.
    async fn many(&self, start_at: u32, num_records: u32) -> Result<Vec<Movie>>;

    /// Attach a show's episodes to an already resolved entity.
    async fn many_episodes_of_show(
        &self,
        movie: Movie,
        id: &str,
        query: &EpisodeQuery,
    ) -> Result<Movie>;

    /// Raw change-feed entries (provider ids and timestamps, not entities)
    /// since the given provider timestamp.
    async fn many_with_changes(&self, since: i64) -> Result<Vec<Value>>;
}
