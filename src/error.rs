// ==============================================================================
// Model Errors
// ==============================================================================
//
// Every invariant of the declaration tree is checked at the mutation that
// could break it, and each failed check surfaces as one of the variants below.
// Nothing is recovered internally: the receiver is left exactly as it was and
// the error goes back to the caller.

use std::fmt;

use miette::Diagnostic;

use crate::identifier::IDENTIFIER_PATTERN;
use crate::model::collection::Kind;

/// Shorthand for results produced by the model.
pub type Result<T> = std::result::Result<T, Error>;

/// A violated model invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A label does not match the identifier grammar.
    InvalidIdentifier { candidate: String },
    /// A collection was offered an element of a kind it does not accept.
    InvalidFieldType {
        context: &'static str,
        allowed: &'static [Kind],
        actual: Kind,
    },
    /// A map was offered another map as its value type.
    InvalidMapValueType { label: String },
    /// A reservation with no entries was attached to a declaration.
    EmptyReservation { kind: &'static str },
    /// A reserved range whose start lies after its end.
    InvalidRange { start: u32, end: u32 },
    /// A collection index past the end of the collection.
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidIdentifier { candidate } => {
                write!(f, "invalid identifier `{candidate}`")
            }
            Error::InvalidFieldType {
                context,
                allowed,
                actual,
            } => {
                write!(f, "{context} accept only ")?;
                for (i, kind) in allowed.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{kind}")?;
                }
                write!(f, ", got {actual}")
            }
            Error::InvalidMapValueType { label } => {
                write!(f, "map `{label}` cannot be used as a map value type")
            }
            Error::EmptyReservation { kind } => {
                write!(f, "reserved {kind} must contain at least one entry")
            }
            Error::InvalidRange { start, end } => {
                write!(f, "reserved range {start} to {end} ends before it starts")
            }
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for collection of length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            Error::InvalidIdentifier { .. } => "protoschema::invalid_identifier",
            Error::InvalidFieldType { .. } => "protoschema::invalid_field_type",
            Error::InvalidMapValueType { .. } => "protoschema::invalid_map_value_type",
            Error::EmptyReservation { .. } => "protoschema::empty_reservation",
            Error::InvalidRange { .. } => "protoschema::invalid_range",
            Error::IndexOutOfBounds { .. } => "protoschema::index_out_of_bounds",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Error::InvalidIdentifier { .. } => Some(Box::new(format!(
                "identifiers must match `{IDENTIFIER_PATTERN}`"
            ))),
            Error::InvalidMapValueType { .. } => Some(Box::new(
                "map values may be scalars, messages, or enumerations",
            )),
            Error::EmptyReservation { .. } => {
                Some(Box::new("add an entry before attaching the reservation"))
            }
            Error::InvalidRange { start, end } => {
                Some(Box::new(format!("did you mean `{end} to {start}`?")))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_error_names_allowed_and_actual_kinds() {
        let err = Error::InvalidFieldType {
            context: "enumeration fields",
            allowed: &[Kind::Field, Kind::Reservation],
            actual: Kind::Map,
        };
        insta::assert_snapshot!(
            err,
            @"enumeration fields accept only Field | Reservation, got Map"
        );
    }

    #[test]
    fn diagnostics_carry_codes() {
        let err = Error::EmptyReservation { kind: "labels" };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("protoschema::empty_reservation"));
        assert!(err.help().is_some());
    }

    #[test]
    fn identifier_help_mentions_the_grammar() {
        let err = Error::InvalidIdentifier {
            candidate: "1Invalid".to_string(),
        };
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains(IDENTIFIER_PATTERN));
    }
}
