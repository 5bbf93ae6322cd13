//! Two-stage document ingestion, stage one: format-aware text extraction.
//!
//! An upload is materialized into a per-request workspace, dispatched on
//! its declared extension, and run through the strategy (or strategy
//! chain) for that format. The workspace is removed on every exit path.

pub mod dispatch;
pub mod handlers;
pub mod orchestrator;
pub mod strategies;
pub mod workspace;
