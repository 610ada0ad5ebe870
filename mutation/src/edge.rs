//! Edge mutation shapes - link previously captured results.
//!
//! An edge mutation takes alias arguments naming node mutations resolved
//! earlier in the same root selection set, resolves them against the
//! execution's registry, and hands the validated, typed operands to a
//! caller-supplied linking function. The side effect is entirely the
//! caller's; these shapes guarantee only that linking is never invoked
//! with unresolved or mistyped operands.

use std::marker::PhantomData;

use stitch_core::{CapturedResult, SharedResult, TypeTag};
use stitch_execution::FieldScope;
use stitch_registry::ResultRegistry;

use crate::error::{LinkError, MutationError, MutationResult};
use crate::resolver::{resolve_ref, resolve_typed};
use crate::result::EdgeOutcome;

/// One operand role of an edge mutation: the argument name and the tag
/// the referenced result must carry.
#[derive(Debug, Clone)]
pub struct Role {
    name: &'static str,
    expected: TypeTag,
}

impl Role {
    /// Declare a role.
    pub fn new(name: &'static str, expected: impl Into<TypeTag>) -> Self {
        Self {
            name,
            expected: expected.into(),
        }
    }

    /// The argument name of this role.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The tag a referenced result must carry for this role.
    pub fn expected(&self) -> &TypeTag {
        &self.expected
    }
}

/// Asymmetric two-role edge mutation (FK-style links).
///
/// Declares a `parent` role and a `child` role with distinct expected
/// tags. The linking function receives the resolved operands in role
/// order and performs the relationship-establishing side effect.
pub struct ParentChildEdge<P, C, F> {
    parent_role: Role,
    child_role: Role,
    link: F,
    _marker: PhantomData<fn(&P, &C)>,
}

impl<P, C, F> ParentChildEdge<P, C, F>
where
    P: SharedResult,
    C: SharedResult,
    F: Fn(&P, &C) -> Result<(), LinkError>,
{
    /// Declare the edge with its expected tags and linking function.
    pub fn new(
        parent_tag: impl Into<TypeTag>,
        child_tag: impl Into<TypeTag>,
        link: F,
    ) -> Self {
        Self {
            parent_role: Role::new("parent", parent_tag),
            child_role: Role::new("child", child_tag),
            link,
            _marker: PhantomData,
        }
    }

    /// The `parent` and `child` roles.
    pub fn roles(&self) -> (&Role, &Role) {
        (&self.parent_role, &self.child_role)
    }

    /// Resolve the edge: look up both aliases, validate, and link.
    ///
    /// Fails fast on the first unresolved reference or type mismatch,
    /// in role order; a failed link propagates without touching the
    /// registry.
    pub fn resolve(
        &self,
        scope: &FieldScope<'_>,
        parent_alias: &str,
        child_alias: &str,
    ) -> MutationResult<EdgeOutcome> {
        let registry = scope.registry();
        let parent = resolve_typed::<P>(registry, parent_alias, self.parent_role.expected())?;
        let child = resolve_typed::<C>(registry, child_alias, self.child_role.expected())?;

        (self.link)(parent, child).map_err(MutationError::link_failure)?;

        Ok(EdgeOutcome::success())
    }
}

/// Symmetric two-role edge mutation (m2m-style links).
///
/// Both roles are interchangeable and share one expected tag; argument
/// names reflect the symmetry.
pub struct SiblingEdge<N, F> {
    node1_role: Role,
    node2_role: Role,
    link: F,
    _marker: PhantomData<fn(&N, &N)>,
}

impl<N, F> SiblingEdge<N, F>
where
    N: SharedResult,
    F: Fn(&N, &N) -> Result<(), LinkError>,
{
    /// Declare the edge with the shared expected tag and linking function.
    pub fn new(node_tag: impl Into<TypeTag>, link: F) -> Self {
        let tag = node_tag.into();
        Self {
            node1_role: Role::new("node1", tag.clone()),
            node2_role: Role::new("node2", tag),
            link,
            _marker: PhantomData,
        }
    }

    /// The `node1` and `node2` roles.
    pub fn roles(&self) -> (&Role, &Role) {
        (&self.node1_role, &self.node2_role)
    }

    /// Resolve the edge: look up both aliases, validate, and link.
    pub fn resolve(
        &self,
        scope: &FieldScope<'_>,
        node1_alias: &str,
        node2_alias: &str,
    ) -> MutationResult<EdgeOutcome> {
        let registry = scope.registry();
        let node1 = resolve_typed::<N>(registry, node1_alias, self.node1_role.expected())?;
        let node2 = resolve_typed::<N>(registry, node2_alias, self.node2_role.expected())?;

        (self.link)(node1, node2).map_err(MutationError::link_failure)?;

        Ok(EdgeOutcome::success())
    }
}

/// N-ary edge declaration for dynamic arities and argument names.
///
/// Where the typed shapes fix two roles at compile time, a definition
/// carries any number of roles and resolves operands as captured results
/// for a dynamic linking function to consume.
#[derive(Debug, Clone)]
pub struct EdgeDefinition {
    name: String,
    roles: Vec<Role>,
}

impl EdgeDefinition {
    /// Declare an edge with no roles yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: Vec::new(),
        }
    }

    /// Add a role (builder style, in role order).
    pub fn role(mut self, name: &'static str, expected: impl Into<TypeTag>) -> Self {
        self.roles.push(Role::new(name, expected));
        self
    }

    /// The edge name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared roles in order.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Number of alias arguments this edge expects.
    pub fn arity(&self) -> usize {
        self.roles.len()
    }

    /// Resolve one alias per role, in role order, failing fast.
    ///
    /// Fails with `InvalidArity` when the alias count does not match the
    /// declared role count, before any lookup happens.
    pub fn resolve_operands<'r>(
        &self,
        registry: &'r ResultRegistry,
        aliases: &[&str],
    ) -> MutationResult<Vec<&'r CapturedResult>> {
        if aliases.len() != self.roles.len() {
            return Err(MutationError::invalid_arity(
                &self.name,
                self.roles.len(),
                aliases.len(),
            ));
        }

        self.roles
            .iter()
            .zip(aliases)
            .map(|(role, alias)| resolve_ref(registry, alias, role.expected()))
            .collect()
    }
}
