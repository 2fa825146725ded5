use std::fmt;

use crate::error::{Error, Result};
use crate::identifier::Identifier;

use super::definition::{Enumeration, Message};
use super::field::Map;

/// Scalar types that are also legal map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
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
}

impl KeyType {
    /// Return the IDL spelling of this type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Int32 => "int32",
            KeyType::Int64 => "int64",
            KeyType::Uint32 => "uint32",
            KeyType::Uint64 => "uint64",
            KeyType::Sint32 => "sint32",
            KeyType::Sint64 => "sint64",
            KeyType::Fixed32 => "fixed32",
            KeyType::Fixed64 => "fixed64",
            KeyType::Sfixed32 => "sfixed32",
            KeyType::Sfixed64 => "sfixed64",
            KeyType::Bool => "bool",
            KeyType::String => "string",
        }
    }
}

/// Scalar types with no key-type equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Double,
    Float,
    Bytes,
}

impl ValueType {
    /// Return the IDL spelling of this type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Double => "double",
            ValueType::Float => "float",
            ValueType::Bytes => "bytes",
        }
    }
}

/// Which kind of definition a [`DefinitionRef`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Message,
    Enumeration,
}

/// A reference to a message or enumeration that existed when the reference
/// was taken.
///
/// References carry the label only; no path resolution across containers is
/// performed, so nested definitions print unqualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefinitionRef {
    kind: DefinitionKind,
    label: Identifier,
}

impl DefinitionRef {
    #[must_use]
    pub fn kind(&self) -> DefinitionKind {
        self.kind
    }

    #[must_use]
    pub fn label(&self) -> &Identifier {
        &self.label
    }
}

impl From<&Message> for DefinitionRef {
    fn from(message: &Message) -> Self {
        DefinitionRef {
            kind: DefinitionKind::Message,
            label: message.label.clone(),
        }
    }
}

impl From<&Enumeration> for DefinitionRef {
    fn from(enumeration: &Enumeration) -> Self {
        DefinitionRef {
            kind: DefinitionKind::Enumeration,
            label: enumeration.label.clone(),
        }
    }
}

/// The type of a field: a scalar or a reference to a definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Key(KeyType),
    Value(ValueType),
    Definition(DefinitionRef),
}

impl Type {
    /// The name this type is printed as.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Type::Key(k) => k.as_str(),
            Type::Value(v) => v.as_str(),
            Type::Definition(r) => r.label.as_str(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<KeyType> for Type {
    fn from(k: KeyType) -> Self {
        Type::Key(k)
    }
}

impl From<ValueType> for Type {
    fn from(v: ValueType) -> Self {
        Type::Value(v)
    }
}

impl From<DefinitionRef> for Type {
    fn from(r: DefinitionRef) -> Self {
        Type::Definition(r)
    }
}

impl From<&Message> for Type {
    fn from(message: &Message) -> Self {
        Type::Definition(message.into())
    }
}

impl From<&Enumeration> for Type {
    fn from(enumeration: &Enumeration) -> Self {
        Type::Definition(enumeration.into())
    }
}

// ==============================================================================
// Map value types
// ==============================================================================
//
// A map may hold anything a typed field may hold, except another map. The
// conversion below is fallible so that offering a `Map` is a run-time error
// rather than something the caller has to know to avoid.

/// Conversion into the value type of a [`Map`].
pub trait IntoValueType {
    fn into_value_type(self) -> Result<Type>;
}

macro_rules! infallible_value_type {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoValueType for $ty {
                fn into_value_type(self) -> Result<Type> {
                    Ok(self.into())
                }
            }
        )*
    };
}

infallible_value_type!(Type, KeyType, ValueType, DefinitionRef, &Message, &Enumeration);

impl IntoValueType for &Map {
    fn into_value_type(self) -> Result<Type> {
        Err(Error::InvalidMapValueType {
            label: self.label.to_string(),
        })
    }
}

impl IntoValueType for Map {
    fn into_value_type(self) -> Result<Type> {
        (&self).into_value_type()
    }
}
