//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep the CLI shell decoupled from persistence details.

pub mod journal_service;
