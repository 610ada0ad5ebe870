//! Engine integration hook.

use std::sync::atomic::{AtomicU64, Ordering};

use stitch_registry::ResultRegistry;

use crate::context::{ExecutionContext, ExecutionId};

/// The scope a root-level field resolver runs in: the field's response
/// alias plus the execution's context.
///
/// Scopes are minted by [`ExecutionHook::resolve_root_field`] only, so a
/// capture can only happen for a root-level field whose alias the engine
/// supplied. The alias is the explicit alias from the query document, or
/// the field name when none was given.
#[derive(Debug)]
pub struct FieldScope<'a> {
    alias: &'a str,
    ctx: &'a mut ExecutionContext,
}

impl<'a> FieldScope<'a> {
    /// The response alias of the field being resolved.
    pub fn alias(&self) -> &str {
        self.alias
    }

    /// The ID of the execution this field belongs to.
    pub fn execution_id(&self) -> ExecutionId {
        self.ctx.id()
    }

    /// Get a reference to the execution's registry.
    pub fn registry(&self) -> &ResultRegistry {
        self.ctx.registry()
    }

    /// Get a mutable reference to the execution's registry.
    pub fn registry_mut(&mut self) -> &mut ResultRegistry {
        self.ctx.registry_mut()
    }
}

/// Long-lived adapter between a host engine and per-execution state.
///
/// One hook instance serves the whole process; it carries no mutable
/// per-request state beyond an ID counter. Every execution gets its own
/// [`ExecutionContext`] with a fresh registry from [`begin_execution`],
/// so concurrent executions can never observe each other's results.
///
/// [`begin_execution`]: ExecutionHook::begin_execution
#[derive(Debug, Default)]
pub struct ExecutionHook {
    next_execution_id: AtomicU64,
}

impl ExecutionHook {
    /// Create a hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an execution: returns a context with a fresh, empty registry.
    ///
    /// Called once per execution of one root operation, before its first
    /// root-level field resolves. The context is owned by the caller and
    /// must be dropped when the execution completes.
    pub fn begin_execution(&self) -> ExecutionContext {
        let id = self.next_execution_id.fetch_add(1, Ordering::Relaxed);
        ExecutionContext::new(id)
    }

    /// Resolve one root-level field through the hook.
    ///
    /// Builds the [`FieldScope`] for the field and invokes `resolver` with
    /// it, returning the resolver's output untouched. Scheduling is the
    /// engine's: this method must be called for root fields in source
    /// order for references between them to be meaningful.
    pub fn resolve_root_field<T>(
        &self,
        ctx: &mut ExecutionContext,
        alias: &str,
        resolver: impl FnOnce(&mut FieldScope<'_>) -> T,
    ) -> T {
        let mut scope = FieldScope { alias, ctx };
        resolver(&mut scope)
    }
}
