use std::env;

/// Provider credentials and endpoint overrides, loaded from the environment.
///
/// A missing key only fails the factory that actually needs it, so a
/// deployment can wire up the subset of catalogs it has credentials for.
#[derive(Debug, Clone)]
pub struct Config {
    pub guidebox_api_key: Option<String>,
    pub guidebox_region: String,
    pub tmdb_api_key: Option<String>,
    pub tmdb_language: String,
    pub omdb_base_url: Option<String>,
    pub netflix_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Self {
            guidebox_api_key: env::var("GUIDEBOX_API_KEY").ok(),
            guidebox_region: env::var("GUIDEBOX_REGION").unwrap_or_else(|_| "US".to_string()),
            tmdb_api_key: env::var("TMDB_API_KEY").ok(),
            tmdb_language: env::var("TMDB_LANGUAGE").unwrap_or_else(|_| "en-US".to_string()),
            omdb_base_url: env::var("OMDB_BASE_URL").ok(),
            netflix_base_url: env::var("NETFLIX_BASE_URL").ok(),
        })
    }
}
