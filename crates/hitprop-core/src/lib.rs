// Library root: the hit-prop recommendation pipeline and its configuration.
//
// Stages run strictly in order: `table` (load) → `normalize` → `join` (which
// scores via `scoring`) → `present`. `pipeline::run` wires them together.

pub mod config;
pub mod error;
pub mod export;
pub mod join;
pub mod normalize;
pub mod pipeline;
pub mod present;
pub mod scoring;
pub mod table;

pub use error::PipelineError;
pub use pipeline::{run, run_files, Report};
