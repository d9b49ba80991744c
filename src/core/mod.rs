//! Core modules for the AGET convention linter.

pub mod concepts;
pub mod document;
pub mod error;
pub mod graph;
pub mod output;
pub mod report;
pub mod resolve;
pub mod validate;
pub mod workspace;
