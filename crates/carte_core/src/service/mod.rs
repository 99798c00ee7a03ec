//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into screen-level entry points.
//! - Keep UI/FFI layers decoupled from collection details.

pub mod menu_service;
