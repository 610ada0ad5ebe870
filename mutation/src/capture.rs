//! Result capture - makes a node mutation's result referenceable.

use stitch_core::{CapturedResult, SharedResult};
use stitch_execution::FieldScope;

/// Run a node mutation and capture its result under the field's alias.
///
/// The combinator is purely additive: `op`'s result is returned to the
/// engine untouched, with a clone recorded in the execution's registry
/// after `op` succeeds and before control returns, so any root-level
/// sibling resolved afterwards can already reference it. If `op` fails,
/// nothing is recorded under the alias.
///
/// The alias comes from the scope (the engine's response key for this
/// field), never from the mutation author. Any `FnOnce` producing a
/// `SharedResult` can be captured; no base type or trait inheritance is
/// involved.
pub fn capture_shared<T, E, F>(scope: &mut FieldScope<'_>, op: F) -> Result<T, E>
where
    T: SharedResult + Clone,
    F: FnOnce() -> Result<T, E>,
{
    let result = op()?;
    let alias = scope.alias().to_string();
    scope
        .registry_mut()
        .put(alias, CapturedResult::capture(result.clone()));
    Ok(result)
}
