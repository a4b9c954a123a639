pub mod check;
pub mod common;
pub mod completions;
pub mod config;
pub mod export;
pub mod list;
pub mod sample;
pub mod summary;
pub mod today;
