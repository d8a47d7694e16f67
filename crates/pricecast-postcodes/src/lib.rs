//! Postcode lookup and best-effort place-name resolution for event summaries.

pub mod candidates;
pub mod client;
pub mod error;
pub mod resolver;

pub use candidates::{candidate_places, is_title_case};
pub use client::{PostcodeAreas, PostcodesClient};
pub use error::LookupError;
pub use resolver::{fallback_location, LocationResolver};
