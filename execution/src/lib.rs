//! Stitch Execution
//!
//! Per-execution state and the host-engine integration point.
//!
//! Responsibilities:
//! - Construct fresh per-execution state (one registry per execution)
//! - Hand each root-level field resolver a scope carrying its response
//!   alias and the execution's registry
//! - Keep state strictly execution-local under concurrent request handling
//!
//! # Ordering contract
//!
//! This crate relies on, but does not implement, the host engine's
//! guarantee that the root selection set of a mutation resolves its fields
//! strictly in source order. References are therefore only safe from a
//! root-level edge field to a root-level node field earlier in source
//! order. Nested/child fields resolve in an engine-defined, unspecified
//! order; resolving references from or into nested fields is the caller
//! accepting that lack of ordering.

mod context;
mod hook;

pub use context::{ExecutionContext, ExecutionId};
pub use hook::{ExecutionHook, FieldScope};
