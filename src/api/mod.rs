//! HTTP layer
//!
//! Middleware, handlers and route tables for the bookmark page and its
//! JSON API.

pub mod constants;
pub mod middleware;
pub mod services;
