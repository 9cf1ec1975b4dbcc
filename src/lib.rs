//! Website Dashboard - terminal front-end for WebSite Operator
//!
//! This library provides:
//! - A client for the website API (`/websites` list and per-site build logs)
//! - An observable store holding the website list and the log modal state
//! - Text rendering of that state for the terminal
//! - TOML configuration with a deploy-time endpoint override

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod render;
pub mod store;
pub mod website;
