// file: src/exporter/mod.rs
// description: export module exports
// reference: internal module structure

pub mod json;

pub use json::JsonExporter;
