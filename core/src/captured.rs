//! Captured mutation results.
//!
//! A node mutation that wants to be referenceable by later root-level
//! siblings implements [`SharedResult`]. The capture step erases the
//! concrete type into a [`CapturedResult`], keeping the declared tag
//! alongside for validation when the value is consumed.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::TypeTag;

/// Implemented by node mutation results that can be shared with later
/// root-level siblings in the same execution.
///
/// `Send + Sync + 'static` is required because captured values are held
/// for the remainder of the execution and executions may run on worker
/// threads.
pub trait SharedResult: Send + Sync + 'static {
    /// The declared graph result type of this value.
    fn type_tag(&self) -> TypeTag;
}

/// A type-tagged, opaque captured value.
///
/// Read-only after construction: consumers may inspect the tag and
/// narrow to the concrete type, never mutate. Cloning shares the
/// underlying value.
#[derive(Clone)]
pub struct CapturedResult {
    tag: TypeTag,
    value: Arc<dyn Any + Send + Sync>,
}

impl CapturedResult {
    /// Capture a shared result, recording its declared tag.
    pub fn capture<T: SharedResult>(value: T) -> Self {
        Self {
            tag: value.type_tag(),
            value: Arc::new(value),
        }
    }

    /// The declared tag recorded at capture time.
    pub fn tag(&self) -> &TypeTag {
        &self.tag
    }

    /// Narrow the captured value to its concrete type.
    pub fn downcast_ref<T: SharedResult>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for CapturedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedResult")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}
