pub mod cache;
pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use cache::ResponseCache;
pub use client::{PlacesClient, PlacesConfig};
pub use error::{PlacesError, TransportError};
pub use normalize::normalize_results;
pub use types::{NearbySearchResponse, PlaceItem};
