// ==============================================================================
// Schema Tree
// ==============================================================================
//
// Plain owned values describing a proto3 file. Nothing here validates: an empty
// message name or a `double` map key is representable, and only surfaces as an
// error once `render` reaches that node. Callers may build partial trees and
// inspect them before rendering.

use serde::Deserialize;

use super::scalar::ScalarType;

/// The root of a schema tree: one `.proto` file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Spec {
    /// Package name; the `package` line is omitted when empty.
    pub package: String,
    /// Import paths, emitted in this order.
    pub imports: Vec<String>,
    pub messages: Vec<Message>,
}

/// A message type, possibly containing nested messages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Message {
    pub name: String,
    pub messages: Vec<Message>,
    pub reserved: Vec<Reserved>,
    pub fields: Vec<Field>,
    pub enums: Vec<Enum>,
}

/// One field declaration inside a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Field {
    /// A field of one of the built-in scalar types.
    Scalar(ScalarField),
    /// A field whose type is named verbatim, typically another message or enum.
    Custom(CustomField),
    /// `map<K, V>` with scalar key and value.
    Map(MapField),
    /// `map<K, V>` with a scalar key and a named value type.
    CustomMap(CustomMapField),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalarField {
    #[serde(default)]
    pub name: String,
    pub tag: u32,
    #[serde(default)]
    pub repeated: bool,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(rename = "type")]
    pub ty: ScalarType,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomField {
    #[serde(default)]
    pub name: String,
    pub tag: u32,
    #[serde(default)]
    pub repeated: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Type name, emitted exactly as given.
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapField {
    #[serde(default)]
    pub name: String,
    pub tag: u32,
    #[serde(default)]
    pub comment: Option<String>,
    pub key: ScalarType,
    /// `None` means no value type was given, which fails at render time.
    #[serde(default)]
    pub value: Option<ScalarType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomMapField {
    #[serde(default)]
    pub name: String,
    pub tag: u32,
    #[serde(default)]
    pub comment: Option<String>,
    pub key: ScalarType,
    /// Value type name, emitted exactly as given.
    pub value: String,
}

/// A tag number, tag range or field name withheld from reuse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reserved {
    Name(String),
    Tag(u32),
    /// Inclusive on both ends.
    Range { lower: u32, upper: u32 },
}

/// An enum type declared inside a message.
///
/// Duplicate value tags are never checked, whether or not `allow_alias` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Enum {
    pub name: String,
    pub allow_alias: bool,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumValue {
    #[serde(default)]
    pub name: String,
    pub tag: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

// ==============================================================================
// Convenience constructors
// ==============================================================================
//
// None of these check their input; they only save typing in callers and tests.

impl Spec {
    pub fn new(package: impl Into<String>) -> Self {
        Spec {
            package: package.into(),
            ..Spec::default()
        }
    }

    #[must_use]
    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Message {
            name: name.into(),
            ..Message::default()
        }
    }

    #[must_use]
    pub fn message(mut self, nested: Message) -> Self {
        self.messages.push(nested);
        self
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    #[must_use]
    pub fn reserve(mut self, reserved: Reserved) -> Self {
        self.reserved.push(reserved);
        self
    }

    #[must_use]
    pub fn enumeration(mut self, e: Enum) -> Self {
        self.enums.push(e);
        self
    }
}

impl Field {
    /// The declared field name, whatever the variant.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Field::Scalar(f) => &f.name,
            Field::Custom(f) => &f.name,
            Field::Map(f) => &f.name,
            Field::CustomMap(f) => &f.name,
        }
    }

    #[must_use]
    pub fn tag(&self) -> u32 {
        match self {
            Field::Scalar(f) => f.tag,
            Field::Custom(f) => f.tag,
            Field::Map(f) => f.tag,
            Field::CustomMap(f) => f.tag,
        }
    }
}

impl ScalarField {
    pub fn new(name: impl Into<String>, tag: u32, ty: ScalarType) -> Self {
        ScalarField {
            name: name.into(),
            tag,
            repeated: false,
            comment: None,
            ty,
        }
    }

    #[must_use]
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl CustomField {
    pub fn new(name: impl Into<String>, tag: u32, ty: impl Into<String>) -> Self {
        CustomField {
            name: name.into(),
            tag,
            repeated: false,
            comment: None,
            ty: ty.into(),
        }
    }

    #[must_use]
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl MapField {
    pub fn new(name: impl Into<String>, tag: u32, key: ScalarType, value: ScalarType) -> Self {
        MapField {
            name: name.into(),
            tag,
            comment: None,
            key,
            value: Some(value),
        }
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl CustomMapField {
    pub fn new(
        name: impl Into<String>,
        tag: u32,
        key: ScalarType,
        value: impl Into<String>,
    ) -> Self {
        CustomMapField {
            name: name.into(),
            tag,
            comment: None,
            key,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Enum {
            name: name.into(),
            ..Enum::default()
        }
    }

    #[must_use]
    pub fn allow_alias(mut self) -> Self {
        self.allow_alias = true;
        self
    }

    #[must_use]
    pub fn value(mut self, value: EnumValue) -> Self {
        self.values.push(value);
        self
    }
}

impl EnumValue {
    pub fn new(name: impl Into<String>, tag: i32) -> Self {
        EnumValue {
            name: name.into(),
            tag,
            comment: None,
        }
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl From<ScalarField> for Field {
    fn from(f: ScalarField) -> Self {
        Field::Scalar(f)
    }
}

impl From<CustomField> for Field {
    fn from(f: CustomField) -> Self {
        Field::Custom(f)
    }
}

impl From<MapField> for Field {
    fn from(f: MapField) -> Self {
        Field::Map(f)
    }
}

impl From<CustomMapField> for Field {
    fn from(f: CustomMapField) -> Self {
        Field::CustomMap(f)
    }
}
