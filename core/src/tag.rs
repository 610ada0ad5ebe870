//! Type tags for captured mutation results.
//!
//! A tag names the declared graph result type of a node mutation (e.g.
//! `"ParentType"`). Edge mutations declare the tag they expect for each
//! role, and resolution compares tags before any value is handed to
//! caller logic.

use std::borrow::Cow;
use std::fmt;

/// The declared graph result type of a captured value.
///
/// Tags compare by exact name. Most tags are known at compile time, so
/// construction from a `&'static str` is allocation-free.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    /// Create a tag from a static type name.
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a tag from a runtime type name.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The type name this tag carries.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TypeTag {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}
