//! Bookmarker - time-range bookmarks for audio and video
//!
//! This library provides the core functionality for the Bookmarker service:
//! a per-session bookmark list edited through a small web page, and a PDF
//! report of that list.
//!
//! # Architecture
//! - `store`: Ordered bookmark list with stable ids and edit state
//! - `export`: PDF report layout and rendering
//! - `session`: Per-browser sessions and their registry
//! - `services`: Business operations returning fresh views
//! - `api`: HTTP services and middleware
//! - `interfaces`: Command-line interface
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod session;
pub mod store;
pub mod system;
pub mod utils;
