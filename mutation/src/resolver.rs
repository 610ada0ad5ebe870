//! Alias reference resolution and type validation.
//!
//! This is the one place the design adds safety beyond a map lookup:
//! without tag validation, a mismatched alias would silently hand the
//! wrong result to caller linking logic.

use stitch_core::{CapturedResult, SharedResult, TypeTag};
use stitch_registry::ResultRegistry;

use crate::error::{MutationError, MutationResult};

/// Resolve an alias reference against the execution's registry.
///
/// Fails with `UnresolvedReference` when no result was captured under
/// `alias` (not yet produced in source order, misspelled, or produced in
/// a different execution), and with `TypeMismatch` when the captured
/// result's declared tag is not `expected`.
pub fn resolve_ref<'r>(
    registry: &'r ResultRegistry,
    alias: &str,
    expected: &TypeTag,
) -> MutationResult<&'r CapturedResult> {
    let entry = registry
        .get(alias)
        .ok_or_else(|| MutationError::unresolved_reference(alias))?;

    if entry.tag() != expected {
        return Err(MutationError::type_mismatch(
            alias,
            expected.name(),
            entry.tag().name(),
        ));
    }

    Ok(entry)
}

/// Resolve an alias reference and narrow it to its concrete type.
///
/// A failed downcast after a matching tag is still a `TypeMismatch`:
/// either way the alias did not hold what the role declared.
pub fn resolve_typed<'r, T: SharedResult>(
    registry: &'r ResultRegistry,
    alias: &str,
    expected: &TypeTag,
) -> MutationResult<&'r T> {
    let entry = resolve_ref(registry, alias, expected)?;

    entry.downcast_ref::<T>().ok_or_else(|| {
        MutationError::type_mismatch(alias, std::any::type_name::<T>(), entry.tag().name())
    })
}
