//! Stitch Result Registry
//!
//! The execution-scoped store behind mutation chaining: an ordered
//! alias → captured-result mapping created fresh for every execution.
//!
//! Responsibilities:
//! - Record node mutation results under their response alias
//! - Serve lookups from edge mutations later in the same root selection set
//! - Stay strictly execution-local (one registry per execution, never shared)

mod registry;

pub use registry::ResultRegistry;
