//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate generator and store calls into use-case level APIs.
//! - Keep UI hosts decoupled from generation and collection details.

pub mod party_service;
