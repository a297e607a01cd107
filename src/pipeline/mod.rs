//! Summarization pipeline
//!
//! [`runner::Summarizer`] runs segmentation, vectorization, graph
//! construction, ranking and selection for one document;
//! [`batch`] extends it to many documents and dataset rows.

pub mod batch;
pub mod observer;
pub mod runner;
