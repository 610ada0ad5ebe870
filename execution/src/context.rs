//! Per-execution context.

use stitch_registry::ResultRegistry;

/// Execution ID type.
pub type ExecutionId = u64;

/// State scoped to one execution of one root operation.
///
/// Constructed at the start of the execution, threaded by reference
/// through every resolver invoked for it, and dropped when the execution
/// completes. Never stored on long-lived middleware and never shared
/// between concurrent executions.
#[derive(Debug)]
pub struct ExecutionContext {
    /// Unique execution ID.
    id: ExecutionId,
    /// Execution-scoped shared-result registry.
    registry: ResultRegistry,
}

impl ExecutionContext {
    /// Create a context with a fresh, empty registry.
    pub fn new(id: ExecutionId) -> Self {
        Self {
            id,
            registry: ResultRegistry::new(),
        }
    }

    /// Get the execution ID.
    pub fn id(&self) -> ExecutionId {
        self.id
    }

    /// Get a reference to the registry.
    pub fn registry(&self) -> &ResultRegistry {
        &self.registry
    }

    /// Get a mutable reference to the registry.
    pub fn registry_mut(&mut self) -> &mut ResultRegistry {
        &mut self.registry
    }
}
