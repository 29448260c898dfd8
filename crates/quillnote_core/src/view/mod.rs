//! Derived read models over the persisted collections.
//!
//! # Responsibility
//! - Project raw notes and tags into the resolved read shape consumed by
//!   list/detail surfaces.
//!
//! # Invariants
//! - Projections are pure; all mutation targets the source collections and
//!   flows back through re-derivation.

pub mod materializer;
