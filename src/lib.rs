//! In-memory proto3 schema model and `.proto` text generator.
//!
//! Build a [`Spec`] tree of messages, fields, enums and reservations as plain
//! data, then [`render`] it to proto3 source. Nothing is checked while the tree
//! is being built; rendering walks it depth-first and stops at the first node
//! that breaks a rule, returning that error and no text.
//!
//! # Rendering a schema
//!
//! ```
//! use protogen::{Message, ScalarField, ScalarType, Spec};
//!
//! let spec = Spec::new("foo")
//!     .message(Message::new("M").field(ScalarField::new("x", 1, ScalarType::String)));
//!
//! assert_eq!(
//!     spec.render()?,
//!     "syntax = \"proto3\";\npackage foo;\n\nmessage M {\n\n  string x = 1;\n}\n",
//! );
//! # Ok::<(), protogen::Error>(())
//! ```
//!
//! # Loading a schema from JSON
//!
//! ```
//! let spec = protogen::spec_from_json(r#"{"package": "foo"}"#, "<inline>")?;
//! assert_eq!(spec.render()?, "syntax = \"proto3\";\npackage foo;\n");
//! # Ok::<(), miette::Report>(())
//! ```
//!
//! # Error handling
//!
//! Rendering returns [`Error`], which implements [`miette::Diagnostic`].
//! Loading returns [`miette::Result`] so JSON errors print with source spans.

pub mod error;
pub mod load;
pub mod model;
pub mod render;

pub(crate) mod suggest;

pub use error::{Error, Result, ValidationError};
pub use load::spec_from_json;
pub use model::{
    CustomField, CustomMapField, Enum, EnumValue, Field, MapField, Message, Reserved,
    ScalarField, ScalarType, Spec,
};
pub use render::render;
