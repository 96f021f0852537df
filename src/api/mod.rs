// file: src/api/mod.rs
// description: API client module exports
// reference: internal module structure

pub mod client;
pub mod fallback;

pub use client::ApiClient;
pub use fallback::or_placeholder;
