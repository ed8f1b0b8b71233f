//! mediascope - media file metadata browser
//!
//! This library crate exposes the application layer for integration testing.

pub mod app;
pub mod browse;
pub mod config;
pub mod display;
pub mod loader;
