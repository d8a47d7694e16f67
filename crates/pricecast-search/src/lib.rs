//! Web-search client used to gather raw material for each price factor.

pub mod client;
pub mod error;

pub use client::{build_query, SearchClient, NORMAL_RESULT_COUNT, TEST_MODE_RESULT_COUNT};
pub use error::SearchError;
