//! Markdown to social post generation, plus small file helpers.
pub mod batch;
pub mod cli;
pub mod config;
pub mod documents;
pub mod file_ops;
pub mod generate;
pub mod logging;
pub mod openai;
