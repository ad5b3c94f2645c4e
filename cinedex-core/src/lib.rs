//! Cross-catalog movie/TV metadata aggregation.
//!
//! Four incompatible provider catalogs are normalized into the canonical
//! model from `cinedex-model`: each [`repository`] fetches raw payloads
//! through its [`adapter`], normalizes them with the matching [`builder`]
//! module, and resolves ambiguous title queries with the shared
//! exact-then-fuzzy protocol in [`matching`]. [`dedup`] collapses listings
//! that repeat the same film under different provider ids.
//!
//! Everything in this crate is synchronous logic around async I/O seams:
//! repositories await their adapter but hold no runtime, no locks and no
//! shared mutable state.

pub mod adapter;
pub mod builder;
pub mod config;
pub mod dedup;
pub mod error;
pub mod matching;
pub mod repository;

pub use adapter::{Adapter, HttpAdapter};
pub use config::Config;
pub use dedup::remove_duplicates;
pub use error::{Error, Result};
pub use matching::resolution::ResolveOptions;
pub use matching::similarity::{find_closest_match, ClosestMatch};
pub use repository::{
    EpisodeQuery, GuideboxRepository, MovieRepository, NetflixRepository, OmdbRepository,
    TmdbRepository,
};
