pub mod archive;
pub mod config;
pub mod error;
pub mod padding;
pub mod partition;
pub mod pipeline;
pub mod render;
pub mod sanitize;
