//! Core library for the `wunder` CLI.
//!
//! This crate defines:
//! - Configuration loading and the generic structure transform behind it
//! - The Wunderground API client and its bounded-timeout fetcher
//! - The file-backed, TTL-invalidated report cache
//! - The run orchestration that ties them together
//!
//! It is used by `wunder-cli`, but can also be reused by other binaries.

pub mod app;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod structure;

pub use app::obtain_report;
pub use cache::{Cache, DEFAULT_TTL};
pub use client::{WeatherSource, WunderClient};
pub use config::Config;
pub use error::WeatherError;
pub use fetch::Fetcher;
pub use model::Report;
pub use structure::{Node, Scalar};
