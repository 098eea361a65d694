//! Analysis orchestration and result aggregation
//!
//! Ties the pipeline stages together and defines the report types:
//! - Pipeline sequencing with busy-state notifications
//! - Report and run metadata

pub mod pipeline;
pub mod result;
