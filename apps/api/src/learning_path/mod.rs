// Learning-path persistence: stores curated resources per user and tracks completion.

pub mod handlers;
pub mod models;
pub mod store;
