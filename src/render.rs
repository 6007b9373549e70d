// ==============================================================================
// proto3 Text Rendering
// ==============================================================================
//
// Walks a `Spec` depth-first and writes `.proto` source. Validation happens on
// the way down: the first node that breaks a rule aborts the whole render and
// the partially built text is dropped, so callers only ever see complete output
// or a single error.
//
// Layout rules:
//
// - Header: `syntax`, then `package` (only if non-empty), then one `import`
//   line per entry in input order.
// - Each top-level message block is preceded by a blank line.
// - Inside a message, nested messages come first, directly under the opening
//   line, each followed by a blank line. Then enums, reserved entries and
//   fields; each non-empty group starts with a blank line unless one is
//   already there.
// - Two spaces per nesting level. Blank lines are never indented.

use std::fmt::{self, Write as _};

use tracing::{debug, trace};

use crate::error::{Error, Result, ValidationError};
use crate::model::{Enum, Field, Message, Reserved, ScalarType, Spec};

const INDENT: &str = "  ";

/// Render a schema tree to proto3 source text.
///
/// `None` is rejected with [`Error::InvalidInput`]. A spec without messages is
/// valid and renders as just the header lines.
pub fn render(spec: Option<&Spec>) -> Result<String> {
    let Some(spec) = spec else {
        debug!("render called without a spec");
        return Err(Error::InvalidInput);
    };

    debug!(
        package = %spec.package,
        imports = spec.imports.len(),
        messages = spec.messages.len(),
        "rendering proto3 spec"
    );

    let mut renderer = Renderer::default();
    if let Err(e) = renderer.spec(spec) {
        debug!(error = %e, "render aborted");
        return Err(e);
    }

    debug!(bytes = renderer.out.len(), "rendered proto3 spec");
    Ok(renderer.out)
}

impl Spec {
    /// Render this spec to proto3 source text. See [`render`].
    pub fn render(&self) -> Result<String> {
        render(Some(self))
    }

    /// Check the whole tree without keeping the output.
    ///
    /// Returns exactly the error [`Spec::render`] would.
    pub fn validate(&self) -> Result<()> {
        self.render().map(drop)
    }
}

/// Output buffer plus the names of the messages currently being rendered,
/// outermost first, used to say where an error happened.
#[derive(Default)]
struct Renderer<'a> {
    out: String,
    path: Vec<&'a str>,
}

impl<'a> Renderer<'a> {
    fn spec(&mut self, spec: &'a Spec) -> Result<()> {
        self.line(0, format_args!("syntax = \"proto3\";"), None);
        if !spec.package.is_empty() {
            self.line(0, format_args!("package {};", spec.package), None);
        }
        for import in &spec.imports {
            self.line(0, format_args!("import \"{import}\";"), None);
        }
        for message in &spec.messages {
            self.blank();
            self.message(message, 0)?;
        }
        Ok(())
    }

    fn message(&mut self, message: &'a Message, depth: usize) -> Result<()> {
        if message.name.is_empty() {
            let parent = (!self.path.is_empty()).then(|| self.path.join("."));
            return Err(ValidationError::EmptyMessageName { parent }.into());
        }
        trace!(message = %message.name, depth, "rendering message");

        self.line(depth, format_args!("message {} {{", message.name), None);
        self.path.push(&message.name);

        for nested in &message.messages {
            self.message(nested, depth + 1)?;
            self.blank();
        }

        if !message.enums.is_empty() {
            self.separate();
        }
        for e in &message.enums {
            self.enumeration(e, depth + 1);
        }

        if !message.reserved.is_empty() {
            self.separate();
        }
        for reserved in &message.reserved {
            self.line(depth + 1, format_args!("reserved {reserved};"), None);
        }

        if !message.fields.is_empty() {
            self.separate();
        }
        for field in &message.fields {
            self.field(field, depth + 1)?;
        }

        self.path.pop();
        self.line(depth, format_args!("}}"), None);
        Ok(())
    }

    /// Enums are emitted as given: neither empty names nor duplicate tags are
    /// rejected.
    fn enumeration(&mut self, e: &Enum, depth: usize) {
        self.line(depth, format_args!("enum {} {{", e.name), None);
        if e.allow_alias {
            self.line(depth + 1, format_args!("option allow_alias = true;"), None);
        }
        for value in &e.values {
            self.line(
                depth + 1,
                format_args!("{} = {};", value.name, value.tag),
                value.comment.as_deref(),
            );
        }
        self.line(depth, format_args!("}}"), None);
    }

    fn field(&mut self, field: &Field, depth: usize) -> Result<()> {
        if field.name().is_empty() {
            return Err(ValidationError::EmptyFieldName {
                message: self.path.join("."),
                tag: field.tag(),
            }
            .into());
        }

        match field {
            Field::Scalar(f) => self.line(
                depth,
                format_args!("{}{} {} = {};", label(f.repeated), f.ty, f.name, f.tag),
                f.comment.as_deref(),
            ),
            Field::Custom(f) => self.line(
                depth,
                format_args!("{}{} {} = {};", label(f.repeated), f.ty, f.name, f.tag),
                f.comment.as_deref(),
            ),
            Field::Map(f) => {
                check_map_key(&f.name, f.key)?;
                let value = f.value.ok_or_else(|| ValidationError::MissingMapValue {
                    field: f.name.clone(),
                })?;
                self.line(
                    depth,
                    format_args!("map<{}, {value}> {} = {};", f.key, f.name, f.tag),
                    f.comment.as_deref(),
                );
            }
            Field::CustomMap(f) => {
                check_map_key(&f.name, f.key)?;
                self.line(
                    depth,
                    format_args!("map<{}, {}> {} = {};", f.key, f.value, f.name, f.tag),
                    f.comment.as_deref(),
                );
            }
        }
        Ok(())
    }

    /// Write one indented line, with a trailing `// comment` when the comment
    /// is present and non-empty.
    fn line(&mut self, depth: usize, text: fmt::Arguments<'_>, comment: Option<&str>) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
        self.out
            .write_fmt(text)
            .expect("write to String is infallible");
        if let Some(comment) = comment.filter(|c| !c.is_empty()) {
            self.out.push_str("   // ");
            self.out.push_str(comment);
        }
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Start a new group with a blank line, unless the previous nested
    /// message already left one.
    fn separate(&mut self) {
        if !self.out.ends_with("\n\n") {
            self.blank();
        }
    }
}

fn label(repeated: bool) -> &'static str {
    if repeated { "repeated " } else { "" }
}

fn check_map_key(field: &str, key: ScalarType) -> Result<(), ValidationError> {
    if key.is_valid_map_key() {
        Ok(())
    } else {
        Err(ValidationError::InvalidMapKey {
            field: field.to_string(),
            key,
        })
    }
}

impl fmt::Display for Reserved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reserved::Name(name) => write!(f, "\"{name}\""),
            Reserved::Tag(tag) => write!(f, "{tag}"),
            Reserved::Range { lower, upper } => write!(f, "{lower} to {upper}"),
        }
    }
}
