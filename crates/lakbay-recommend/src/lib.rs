pub mod fare;
pub mod pipeline;

pub use fare::{transport_estimate, TransportFare};
pub use pipeline::{recommend, Recommendation, DEFAULT_MIN_RATING, DEFAULT_TOP_N};
