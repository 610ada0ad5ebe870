//! Stitch Tests
//!
//! Integration harness for mutation chaining:
//! - `store` - an in-memory parent/child domain store with FK and m2m links
//! - `document` - a serial root-field runner honoring the engine's
//!   source-order contract for root selection sets

pub mod document;

pub mod prelude {
    pub use crate::document::{Document, FieldOutcome, RunReport, StepError};
    pub use crate::store::{Child, FakeStore, LinkCall, Parent};

    pub use stitch_core::{CapturedResult, SharedResult, TypeTag};
    pub use stitch_execution::{ExecutionContext, ExecutionHook, FieldScope};
    pub use stitch_mutation::{
        capture_shared, resolve_ref, resolve_typed, EdgeDefinition, EdgeOutcome, MutationError,
        ParentChildEdge, Role, SiblingEdge,
    };
}
