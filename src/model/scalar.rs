use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::suggest::suggest_name;

/// The built-in proto3 scalar types.
///
/// The discriminants are the type codes accepted by [`ScalarType::from_code`]
/// and by the JSON loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "TypeRef")]
#[repr(u8)]
pub enum ScalarType {
    Double = 1,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

impl ScalarType {
    /// Every scalar type, in type-code order.
    pub const ALL: [ScalarType; 15] = [
        ScalarType::Double,
        ScalarType::Float,
        ScalarType::Int32,
        ScalarType::Int64,
        ScalarType::Uint32,
        ScalarType::Uint64,
        ScalarType::Sint32,
        ScalarType::Sint64,
        ScalarType::Fixed32,
        ScalarType::Fixed64,
        ScalarType::Sfixed32,
        ScalarType::Sfixed64,
        ScalarType::Bool,
        ScalarType::String,
        ScalarType::Bytes,
    ];

    /// Return the proto3 keyword for this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarType::Double => "double",
            ScalarType::Float => "float",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::Uint32 => "uint32",
            ScalarType::Uint64 => "uint64",
            ScalarType::Sint32 => "sint32",
            ScalarType::Sint64 => "sint64",
            ScalarType::Fixed32 => "fixed32",
            ScalarType::Fixed64 => "fixed64",
            ScalarType::Sfixed32 => "sfixed32",
            ScalarType::Sfixed64 => "sfixed64",
            ScalarType::Bool => "bool",
            ScalarType::String => "string",
            ScalarType::Bytes => "bytes",
        }
    }

    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a scalar type by its numeric code (1 through 15).
    pub fn from_code(code: u8) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.code() == code)
            .ok_or_else(|| Error::UnrecognizedType {
                found: code.to_string(),
                suggestion: None,
            })
    }

    /// Whether proto3 accepts this type as a map key.
    ///
    /// Only integral and string types qualify; floating point and `bytes` keys
    /// are rejected.
    #[must_use]
    pub fn is_valid_map_key(self) -> bool {
        !matches!(
            self,
            ScalarType::Double | ScalarType::Float | ScalarType::Bytes
        )
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(t) = Self::ALL.iter().copied().find(|t| t.as_str() == s) {
            return Ok(t);
        }
        let keywords = Self::ALL.map(ScalarType::as_str);
        Err(Error::UnrecognizedType {
            found: s.to_string(),
            suggestion: suggest_name(s, &keywords),
        })
    }
}

impl TryFrom<u8> for ScalarType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

/// How a scalar type may be spelled in JSON: either the proto3 keyword or the
/// numeric type code. Codes wider than `u8` are still captured so they can be
/// reported as unrecognized rather than as a shape error.
#[derive(Deserialize)]
#[serde(untagged)]
enum TypeRef {
    Code(u64),
    Name(std::string::String),
}

impl TryFrom<TypeRef> for ScalarType {
    type Error = Error;

    fn try_from(r: TypeRef) -> Result<Self, Self::Error> {
        match r {
            TypeRef::Name(name) => name.parse(),
            TypeRef::Code(code) => u8::try_from(code)
                .map_err(|_| Error::UnrecognizedType {
                    found: code.to_string(),
                    suggestion: None,
                })
                .and_then(ScalarType::from_code),
        }
    }
}
