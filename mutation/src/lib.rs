//! Stitch Mutation
//!
//! Chain root-level graph mutations: capture node results, resolve alias
//! references, link validated operands.
//!
//! Responsibilities:
//! - Record a node mutation's result under its response alias (capture)
//! - Resolve alias arguments against the execution's registry with type
//!   validation (unresolved references and tag mismatches fail fast)
//! - Provide reusable edge mutation shapes that hand validated, typed
//!   operands to caller-supplied linking logic
//!
//! # Module Structure
//!
//! - `capture` - Result-capturing combinator for node mutations
//! - `resolver` - Alias reference resolution and type validation
//! - `edge` - Edge mutation shapes (parent/child, sibling, N-ary)
//! - `error` - Error types for chaining failures
//! - `result` - Result types for edge outcomes

mod capture;
mod edge;
mod error;
mod resolver;
mod result;

pub use capture::capture_shared;
pub use edge::{EdgeDefinition, ParentChildEdge, Role, SiblingEdge};
pub use error::{LinkError, MutationError, MutationResult};
pub use resolver::{resolve_ref, resolve_typed};
pub use result::EdgeOutcome;
