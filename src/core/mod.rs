// src/core/mod.rs
//! Shared infrastructure for the exporter

pub mod fs_ops;

pub use fs_ops::FsOps;
