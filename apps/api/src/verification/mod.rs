// Link verification: platform registry, bounded probing, TTL cache and fallback links.
// The probe is the only network I/O in the curation path.

pub mod batch;
pub mod cache;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod platforms;
pub mod probe;
pub mod verifier;
