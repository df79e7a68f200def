//! Service layer for business logic
//!
//! Shared by the HTTP handlers; handlers stay thin and only translate
//! between HTTP and service calls.

mod bookmark_service;

pub use bookmark_service::*;
