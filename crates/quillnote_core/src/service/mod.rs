//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository, view and query calls into the operation
//!   contract consumed by UI layers.
//! - Keep consumers decoupled from storage details.

pub mod session;
