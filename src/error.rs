use miette::{LabeledSpan, NamedSource, SourceSpan};

use crate::model::ScalarType;

/// Result alias for rendering and model lookups.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can stop a render.
///
/// Rendering stops at the first problem it finds, so a single `Error` is the
/// whole story; no partial output accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The root spec was absent.
    #[error("invalid input: spec cannot be absent")]
    InvalidInput,

    /// A node in the tree breaks a structural rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A scalar type code or keyword outside the fixed set of fifteen.
    #[error("unrecognized protobuf field type: {found}")]
    UnrecognizedType {
        found: String,
        suggestion: Option<&'static str>,
    },
}

/// A structural rule violated at a specific node of the schema tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("message name cannot be empty{}", nested_in(.parent.as_deref()))]
    EmptyMessageName { parent: Option<String> },

    #[error("field with tag {tag} in message {message} must have a non-empty name")]
    EmptyFieldName { message: String, tag: u32 },

    #[error(
        "map field {field} must use a scalar integral or string type for the map key, found {key}"
    )]
    InvalidMapKey { field: String, key: ScalarType },

    #[error("map field {field} must have a type specified for the map value")]
    MissingMapValue { field: String },
}

fn nested_in(parent: Option<&str>) -> String {
    parent.map_or_else(String::new, |p| format!(" (nested in {p})"))
}

impl miette::Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            Error::InvalidInput => "protogen::invalid_input",
            Error::Validation(_) => "protogen::validation",
            Error::UnrecognizedType { .. } => "protogen::unrecognized_type",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let help: Box<dyn std::fmt::Display + 'a> = match self {
            Error::UnrecognizedType {
                suggestion: Some(s),
                ..
            } => Box::new(format!("did you mean `{s}`?")),
            Error::Validation(ValidationError::InvalidMapKey { .. }) => {
                Box::new("map keys may be any integral type, bool or string")
            }
            _ => return None,
        };
        Some(help)
    }
}

/// A JSON load error with source location information for rich diagnostics.
#[derive(Debug)]
pub struct LoadDiagnostic {
    pub src: NamedSource<String>,
    pub span: SourceSpan,
    pub message: String,
}

impl std::fmt::Display for LoadDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LoadDiagnostic {}

impl miette::Diagnostic for LoadDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new("protogen::load"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.message.clone()),
            self.span,
        ))))
    }
}
