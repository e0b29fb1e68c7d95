//! Client for clearfile note servers: search with `@location`/`+notebook`
//! filters, upload scans, and organize notes, tags and notebooks.

pub mod api;
pub mod clap;
pub mod commands;
pub mod prelude;
pub mod render;
