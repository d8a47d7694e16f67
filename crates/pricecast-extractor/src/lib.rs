//! Turns raw search results into dated future events via a generative model.
//!
//! The model call lives in [`client`]; the prompt in [`prompt`]; and the
//! line-oriented reply grammar in [`parse`], which has no I/O and is tested on
//! its own.

pub mod client;
pub mod error;
pub mod extractor;
pub mod parse;
pub mod prompt;

pub use client::GeminiClient;
pub use error::ExtractError;
pub use extractor::EventExtractor;
pub use parse::{parse_line, parse_response, Extraction, EXTRACTION_CONFIDENCE};
pub use prompt::build_prompt;
