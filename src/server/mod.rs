//! HTTP server module

pub mod app;

pub use app::*;
