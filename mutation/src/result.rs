//! Edge mutation result types.

/// Outcome of an edge mutation.
///
/// Edge mutations expose a uniform response shape: a boolean success
/// field. Failures never reach this type; they surface as
/// [`MutationError`](crate::MutationError) at the resolution boundary,
/// so `ok` is `true` whenever an outcome exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeOutcome {
    /// Whether the link was established.
    pub ok: bool,
}

impl EdgeOutcome {
    /// Outcome of a successfully established link.
    pub fn success() -> Self {
        Self { ok: true }
    }
}
