//! Serial root-field document runner.
//!
//! Simulates the host engine's contract for the root selection set of a
//! mutation document: fields execute strictly in source order, each one
//! resolved through the execution hook with its response alias. Nothing
//! else of an engine is simulated.

use std::cell::RefCell;

use stitch_execution::{ExecutionContext, ExecutionHook, FieldScope};
use stitch_mutation::{capture_shared, EdgeOutcome, MutationError, ParentChildEdge, SiblingEdge};
use thiserror::Error;

use crate::store::{Child, FakeStore, Parent};

/// Errors a root field can fail with.
#[derive(Debug, Error)]
pub enum StepError {
    /// Chaining failure from an edge mutation.
    #[error(transparent)]
    Mutation(#[from] MutationError),

    /// Domain failure inside a node mutation.
    #[error("node mutation failed: {message}")]
    Node { message: String },
}

/// What a successfully resolved root field produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    /// A node mutation stored a record with this pk.
    Node { pk: u64 },
    /// An edge mutation established its link.
    Edge(EdgeOutcome),
}

type StepFn = Box<dyn FnOnce(&mut FakeStore, &mut FieldScope<'_>) -> Result<FieldOutcome, StepError>>;

/// An ordered root selection set of mutation fields.
#[derive(Default)]
pub struct Document {
    fields: Vec<(String, StepFn)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root-level field with a custom resolver.
    pub fn field<F>(mut self, alias: &str, step: F) -> Self
    where
        F: FnOnce(&mut FakeStore, &mut FieldScope<'_>) -> Result<FieldOutcome, StepError> + 'static,
    {
        self.fields.push((alias.to_string(), Box::new(step)));
        self
    }

    /// Node field: upsert a parent and capture it under the alias.
    pub fn upsert_parent(self, alias: &str, name: &str) -> Self {
        let name = name.to_string();
        self.field(alias, move |store, scope| {
            let parent = capture_shared(scope, || {
                Ok::<_, StepError>(store.upsert_parent(None, &name))
            })?;
            Ok(FieldOutcome::Node { pk: parent.pk })
        })
    }

    /// Node field: upsert a child and capture it under the alias.
    pub fn upsert_child(self, alias: &str, name: &str) -> Self {
        let name = name.to_string();
        self.field(alias, move |store, scope| {
            let child = capture_shared(scope, || {
                Ok::<_, StepError>(store.upsert_child(None, &name))
            })?;
            Ok(FieldOutcome::Node { pk: child.pk })
        })
    }

    /// Node field that fails; nothing gets captured under the alias.
    pub fn failing_node(self, alias: &str, message: &str) -> Self {
        let message = message.to_string();
        self.field(alias, move |_store, scope| {
            capture_shared::<Parent, _, _>(scope, || Err(StepError::Node { message }))
                .map(|parent| FieldOutcome::Node { pk: parent.pk })
        })
    }

    /// Edge field: FK-style link referencing a parent and a child alias.
    pub fn set_parent(self, alias: &str, parent_ref: &str, child_ref: &str) -> Self {
        let parent_ref = parent_ref.to_string();
        let child_ref = child_ref.to_string();
        self.field(alias, move |store, scope| {
            let store = RefCell::new(store);
            let edge = ParentChildEdge::new("ParentType", "ChildType", |p: &Parent, c: &Child| {
                store.borrow_mut().set_parent(p.pk, c.pk)
            });
            let outcome = edge.resolve(scope, &parent_ref, &child_ref)?;
            Ok(FieldOutcome::Edge(outcome))
        })
    }

    /// Edge field: m2m-style link referencing two child aliases.
    pub fn add_sibling(self, alias: &str, node1_ref: &str, node2_ref: &str) -> Self {
        let node1_ref = node1_ref.to_string();
        let node2_ref = node2_ref.to_string();
        self.field(alias, move |store, scope| {
            let store = RefCell::new(store);
            let edge = SiblingEdge::new("ChildType", |a: &Child, b: &Child| {
                store.borrow_mut().add_sibling(a.pk, b.pk)
            });
            let outcome = edge.resolve(scope, &node1_ref, &node2_ref)?;
            Ok(FieldOutcome::Edge(outcome))
        })
    }

    /// Execute the root fields strictly in source order with a one-off
    /// hook.
    pub fn run(self) -> RunReport {
        self.run_with(&ExecutionHook::new())
    }

    /// Execute through an existing hook (one fresh execution either way).
    ///
    /// A field failure is recorded and does not abort later siblings,
    /// matching per-field error semantics of graph query responses.
    pub fn run_with(self, hook: &ExecutionHook) -> RunReport {
        let mut ctx = hook.begin_execution();
        let mut store = FakeStore::new();
        let mut outcomes = Vec::with_capacity(self.fields.len());

        for (alias, step) in self.fields {
            let result = hook.resolve_root_field(&mut ctx, &alias, |scope| {
                step(&mut store, scope)
            });
            outcomes.push((alias, result));
        }

        RunReport {
            outcomes,
            store,
            context: ctx,
        }
    }
}

/// Per-field results of one document execution, in source order.
#[derive(Debug)]
pub struct RunReport {
    /// (alias, result) per root field, in source order.
    pub outcomes: Vec<(String, Result<FieldOutcome, StepError>)>,
    /// The store after all fields resolved.
    pub store: FakeStore,
    /// The execution's context, kept for registry inspection.
    pub context: ExecutionContext,
}

impl RunReport {
    /// The result recorded for `alias`.
    ///
    /// Panics when the document had no such field; tests address fields
    /// they declared.
    pub fn outcome(&self, alias: &str) -> &Result<FieldOutcome, StepError> {
        self.outcomes
            .iter()
            .find(|(a, _)| a == alias)
            .map(|(_, result)| result)
            .unwrap_or_else(|| panic!("no root field aliased {alias:?}"))
    }

    /// Whether every root field resolved successfully.
    pub fn all_ok(&self) -> bool {
        self.outcomes.iter().all(|(_, result)| result.is_ok())
    }
}
