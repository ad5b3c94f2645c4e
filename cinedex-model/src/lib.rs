//! Canonical entity model shared across cinedex crates.
//!
//! Every provider payload is normalized into the [`Movie`] aggregate (with
//! [`Episode`] children and structural value objects), and every aggregate can
//! project itself into an order-stable [`MovieSnapshot`] used for comparison,
//! serialization and round-trip reconstruction.

pub mod credits;
pub mod episode;
pub mod external_id;
pub mod media_type;
pub mod movie;
pub mod poster;
pub mod review;
pub mod snapshot;
pub mod source;
pub mod source_type;

// Intentionally curated re-exports for downstream consumers.
pub use credits::{Cast, Crew};
pub use episode::Episode;
pub use external_id::ExternalId;
pub use media_type::{MediaType, ParseMediaTypeError};
pub use movie::Movie;
pub use poster::Poster;
pub use review::Review;
pub use snapshot::{ConsolidatedMovieSnapshot, EpisodeSnapshot, MovieSnapshot};
pub use source::Source;
pub use source_type::SourceType;
