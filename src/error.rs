//! Error types for schema generation.

use thiserror::Error;

/// Error type for every construction and emission operation.
#[derive(Debug, Error)]
pub enum Error {
    /// A kind-specific constructor was handed a spec with a missing payload.
    #[error("{kind} spec for '{name}' is nil")]
    NilSpec {
        /// Spec payload that was expected.
        kind: &'static str,
        /// Name of the member being constructed.
        name: String,
    },

    /// No kind field was populated on an attribute or block spec.
    #[error("{member} type not defined: {spec}")]
    UnknownKind {
        /// `attribute` or `block`.
        member: &'static str,
        /// Debug rendering of the offending spec.
        spec: String,
    },

    /// An element type has no native Go storage type.
    #[error("no matching go type for {element} element type")]
    UnconvertibleType {
        /// Element kind that failed.
        element: &'static str,
    },

    /// An element type cannot be mapped to a single attr type / value pair.
    #[error("unsupported conversion for {element} element type")]
    UnsupportedConversion {
        /// Element kind that failed.
        element: &'static str,
    },

    /// Two members of one level share a name.
    #[error("duplicate member '{name}'")]
    DuplicateMember {
        /// Name used more than once.
        name: String,
    },

    /// Conversion that is known to be unsupported.
    #[error("{0} is not yet implemented")]
    UnimplementedFeature(String),

    /// Template rendering error.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// Spec decoding error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a nil spec error for the given payload kind and member name.
    pub fn nil_spec(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NilSpec {
            kind,
            name: name.into(),
        }
    }

    /// Creates an unknown kind error carrying the debug text of `spec`.
    pub fn unknown_kind(member: &'static str, spec: &impl std::fmt::Debug) -> Self {
        Self::UnknownKind {
            member,
            spec: format!("{:?}", spec),
        }
    }

    pub fn duplicate_member(name: impl Into<String>) -> Self {
        Self::DuplicateMember { name: name.into() }
    }

    /// Creates an unimplemented feature error.
    pub fn unimplemented(feature: impl Into<String>) -> Self {
        Self::UnimplementedFeature(feature.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unknown_kind_carries_spec() {
        let err = Error::unknown_kind("attribute", &"thing");
        assert_eq!(err.to_string(), "attribute type not defined: \"thing\"");
    }

    #[test]
    fn test_nil_spec_message() {
        let err = Error::nil_spec("list_nested.nested_object", "rules");
        assert_eq!(
            err.to_string(),
            "list_nested.nested_object spec for 'rules' is nil"
        );
    }
}
