// Resource curation: static catalog, keyword selection, and the
// select → verify → annotate pipeline used by learning-path generation.

pub mod catalog;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod selector;
