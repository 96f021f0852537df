// file: src/poller/mod.rs
// description: processing status poller module exports
// reference: internal module structure

pub mod progress;
pub mod status_poller;

pub use progress::ProgressRenderer;
pub use status_poller::{JobProgress, PollerHandle, StatusPoller, StatusSource};
