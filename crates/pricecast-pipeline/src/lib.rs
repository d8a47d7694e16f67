//! Price-factor pipeline for one postcode.
//!
//! For every factor in the taxonomy: search, extract dated events, resolve and
//! filter them, score the survivors, then persist the aggregate to a JSON file
//! and the document store.

pub mod artifact;
pub mod error;
pub mod persist;
pub mod pipeline;
pub mod scorer;
pub mod validate;

pub use artifact::{artifact_file_name, render_artifact, write_artifact};
pub use error::PipelineError;
pub use persist::{log_working_directory, persist, run_postcode, PersistOutcome};
pub use pipeline::{CallCounter, Pipeline, PipelineOptions};
pub use scorer::impact_score;
pub use validate::{is_valid_location, is_valid_timeline};
