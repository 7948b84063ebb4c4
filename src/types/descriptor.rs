//! Structural views of host types and source locations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural view of a host-language type: a head name plus ordered
/// generic arguments.
///
/// Obtained from the host type system by the caller and treated as
/// read-only here. Rendering via [`fmt::Display`] produces the
/// `Name<A, B>` form used as the adapter registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Head type name, e.g. `Live` or `User`.
    name: String,
    /// Generic arguments in declaration order.
    args: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    /// Creates a non-generic type descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        TypeDescriptor {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Creates a generic type descriptor with the given arguments.
    #[must_use]
    pub fn generic(name: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor {
            name: name.into(),
            args,
        }
    }

    /// Returns the head type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the generic arguments in declaration order.
    #[must_use]
    pub fn type_args(&self) -> &[TypeDescriptor] {
        &self.args
    }

    /// Returns true if the type carries generic arguments.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some((first, rest)) = self.args.split_first() {
            write!(f, "<{first}")?;
            for arg in rest {
                write!(f, ", {arg}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

/// Names the declaring type and method a diagnostic attaches to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRef {
    /// Name of the declaring data-access type.
    pub owner: String,
    /// Method name within the owner.
    pub method: String,
}

impl SourceRef {
    /// Creates a source reference for `owner::method`.
    #[must_use]
    pub fn new(owner: impl Into<String>, method: impl Into<String>) -> Self {
        SourceRef {
            owner: owner.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.owner, self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain_type() {
        assert_eq!(TypeDescriptor::new("User").to_string(), "User");
    }

    #[test]
    fn test_display_generic_type() {
        let ty = TypeDescriptor::generic(
            "PageSource",
            vec![
                TypeDescriptor::new("i64"),
                TypeDescriptor::generic("Vec", vec![TypeDescriptor::new("User")]),
            ],
        );
        assert_eq!(ty.to_string(), "PageSource<i64, Vec<User>>");
    }

    #[test]
    fn test_type_args_order_preserved() {
        let ty = TypeDescriptor::generic(
            "Pair",
            vec![TypeDescriptor::new("A"), TypeDescriptor::new("B")],
        );
        assert_eq!(ty.type_args()[0].name(), "A");
        assert_eq!(ty.type_args()[1].name(), "B");
        assert!(ty.is_generic());
        assert!(!TypeDescriptor::new("A").is_generic());
    }

    #[test]
    fn test_source_ref_display() {
        let source = SourceRef::new("UserStore", "observe_all");
        assert_eq!(source.to_string(), "UserStore::observe_all");
    }
}
