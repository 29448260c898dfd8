//! Query layer over the resolved-note projection.
//!
//! # Responsibility
//! - Provide multi-criteria filtering for list surfaces.
//!
//! # Invariants
//! - Queries are pure and never touch the persisted collections.

pub mod filter;
