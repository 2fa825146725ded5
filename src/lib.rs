//! Build protocol buffer (`proto3`) schemas in memory and print them as IDL
//! text.
//!
//! The model is a tree of declarations: a [`Protocol`] holds imports,
//! services, and top-level definitions; a [`Message`] holds fields and nested
//! definitions; an [`Enumeration`] holds numbered labels. Every mutation is
//! checked as it happens:
//!
//! - labels must be valid [`Identifier`]s,
//! - each field list accepts only the member kinds valid in its position,
//! - a map may not be used as another map's value type.
//!
//! A rejected mutation returns an [`Error`] and leaves the receiver unchanged.
//!
//! # Building and printing a message
//!
//! ```
//! use protoschema::{KeyType, Message, Protocol, RepeatableField, ReservedNumbers};
//!
//! let mut message = Message::new("Person")?;
//! message.fields.append(RepeatableField::new(KeyType::String, 1, "name")?)?;
//! message
//!     .fields
//!     .append(RepeatableField::new(KeyType::String, 2, "emails")?.with_repeated(true))?;
//! message.fields.append(ReservedNumbers::from_numbers([3u32])?)?;
//!
//! let mut protocol = Protocol::new();
//! protocol.set_package("people")?;
//! protocol.container.definitions.append(message)?;
//!
//! assert_eq!(
//!     protocol.to_string(),
//!     "syntax = \"proto3\";\n\
//!      \n\
//!      package people;\n\
//!      \n\
//!      message Person {\n  \
//!        string name = 1;\n  \
//!        repeated string emails = 2;\n  \
//!        reserved 3;\n\
//!      }"
//! );
//! # Ok::<(), protoschema::Error>(())
//! ```
//!
//! # Error handling
//!
//! [`Error`] implements [`miette::Diagnostic`], so it can be wrapped in a
//! [`miette::Report`] for rendering with a code and a help message.

pub mod error;
pub mod identifier;
pub mod model;

// Re-export the public API at the crate root.
pub use error::{Error, Result};
pub use identifier::Identifier;
pub use model::Declaration;
pub use model::collection::{Kind, Validate, Validated};
pub use model::definition::{Container, Definition, Enumeration, Message};
pub use model::field::{Field, Map, Member, OneOf, RepeatableField, TypedField};
pub use model::protocol::{Import, Protocol};
pub use model::reserved::{Range, Reservation, ReservedLabels, ReservedNumber, ReservedNumbers};
pub use model::service::{Rpc, Service};
pub use model::text::{Print, Printer, indent};
pub use model::types::{DefinitionKind, DefinitionRef, IntoValueType, KeyType, Type, ValueType};
