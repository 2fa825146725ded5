use crate::error::Result;
use crate::identifier::Identifier;

use super::Declaration;
use super::collection::{Kind, Kinded, OneOfFields, Validate, Validated};
use super::reserved::{Reservation, ReservedLabels, ReservedNumbers};
use super::types::{IntoValueType, KeyType, Type};

/// A numbered label. Used directly as an enumeration member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: Identifier,
    pub number: u32,
    pub deprecated: bool,
}

impl Field {
    pub fn new(number: u32, label: &str) -> Result<Self> {
        Ok(Field {
            label: Identifier::new(label)?,
            number,
            deprecated: false,
        })
    }

    #[must_use]
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }
}

/// A field with a scalar or definition type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedField {
    pub ty: Type,
    pub label: Identifier,
    pub number: u32,
    pub deprecated: bool,
}

impl TypedField {
    pub fn new(ty: impl Into<Type>, number: u32, label: &str) -> Result<Self> {
        Ok(TypedField {
            ty: ty.into(),
            label: Identifier::new(label)?,
            number,
            deprecated: false,
        })
    }

    #[must_use]
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }
}

/// An ordinary message field, optionally `repeated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatableField {
    pub ty: Type,
    pub label: Identifier,
    pub number: u32,
    pub deprecated: bool,
    pub repeated: bool,
}

impl RepeatableField {
    pub fn new(ty: impl Into<Type>, number: u32, label: &str) -> Result<Self> {
        Ok(RepeatableField {
            ty: ty.into(),
            label: Identifier::new(label)?,
            number,
            deprecated: false,
            repeated: false,
        })
    }

    #[must_use]
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    #[must_use]
    pub fn with_repeated(mut self, repeated: bool) -> Self {
        self.repeated = repeated;
        self
    }
}

impl From<TypedField> for RepeatableField {
    fn from(field: TypedField) -> Self {
        RepeatableField {
            ty: field.ty,
            label: field.label,
            number: field.number,
            deprecated: field.deprecated,
            repeated: false,
        }
    }
}

/// A `map<key, value>` field.
///
/// The value type is kept private so that every assignment goes through
/// [`Map::set_value_type`], which rejects maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub key_type: KeyType,
    value_type: Type,
    pub label: Identifier,
    pub number: u32,
    pub deprecated: bool,
}

impl Map {
    pub fn new(
        key_type: KeyType,
        value_type: impl IntoValueType,
        number: u32,
        label: &str,
    ) -> Result<Self> {
        let label = Identifier::new(label)?;
        let value_type = value_type.into_value_type()?;
        Ok(Map {
            key_type,
            value_type,
            label,
            number,
            deprecated: false,
        })
    }

    #[must_use]
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    #[must_use]
    pub fn value_type(&self) -> &Type {
        &self.value_type
    }

    pub fn set_value_type(&mut self, value_type: impl IntoValueType) -> Result<()> {
        self.value_type = value_type.into_value_type()?;
        Ok(())
    }
}

/// A group of mutually exclusive typed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    pub label: Identifier,
    pub fields: Validated<OneOfFields>,
}

impl OneOf {
    pub fn new(label: &str) -> Result<Self> {
        Ok(OneOf {
            label: Identifier::new(label)?,
            fields: Validated::new(),
        })
    }
}

// ==============================================================================
// Member: the closed set of things a field list can hold
// ==============================================================================

/// Any element of an enumeration, message, or oneof field list.
///
/// Which variants a given list accepts is decided by its collection rule at
/// run time; see [`Validated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(Field),
    Typed(TypedField),
    Repeatable(RepeatableField),
    Map(Map),
    OneOf(OneOf),
    Reserved(Reservation),
}

impl Member {
    /// The member's label, if it has one. Reservations do not.
    #[must_use]
    pub fn label(&self) -> Option<&Identifier> {
        match self {
            Member::Field(f) => Some(&f.label),
            Member::Typed(f) => Some(&f.label),
            Member::Repeatable(f) => Some(&f.label),
            Member::Map(f) => Some(&f.label),
            Member::OneOf(f) => Some(&f.label),
            Member::Reserved(_) => None,
        }
    }

    /// The member's field number, if it has exactly one.
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        match self {
            Member::Field(f) => Some(f.number),
            Member::Typed(f) => Some(f.number),
            Member::Repeatable(f) => Some(f.number),
            Member::Map(f) => Some(f.number),
            Member::OneOf(_) | Member::Reserved(_) => None,
        }
    }
}

impl Kinded for Member {
    fn kind(&self) -> Kind {
        match self {
            Member::Field(_) => Kind::Field,
            Member::Typed(_) => Kind::TypedField,
            Member::Repeatable(_) => Kind::RepeatableField,
            Member::Map(_) => Kind::Map,
            Member::OneOf(_) => Kind::OneOf,
            Member::Reserved(_) => Kind::Reservation,
        }
    }
}

impl Validate for Member {
    fn validate(&self) -> Result<()> {
        match self {
            // Labels and types are checked on construction and assignment.
            Member::Field(_) | Member::Typed(_) | Member::Repeatable(_) | Member::Map(_) => Ok(()),
            Member::OneOf(o) => o.fields.validate(),
            Member::Reserved(r) => r.validate(),
        }
    }
}

impl From<Field> for Member {
    fn from(f: Field) -> Self {
        Member::Field(f)
    }
}

impl From<TypedField> for Member {
    fn from(f: TypedField) -> Self {
        Member::Typed(f)
    }
}

impl From<RepeatableField> for Member {
    fn from(f: RepeatableField) -> Self {
        Member::Repeatable(f)
    }
}

impl From<Map> for Member {
    fn from(m: Map) -> Self {
        Member::Map(m)
    }
}

impl From<OneOf> for Member {
    fn from(o: OneOf) -> Self {
        Member::OneOf(o)
    }
}

impl From<Reservation> for Member {
    fn from(r: Reservation) -> Self {
        Member::Reserved(r)
    }
}

impl From<ReservedNumbers> for Member {
    fn from(r: ReservedNumbers) -> Self {
        Member::Reserved(Reservation::Numbers(r))
    }
}

impl From<ReservedLabels> for Member {
    fn from(r: ReservedLabels) -> Self {
        Member::Reserved(Reservation::Labels(r))
    }
}

macro_rules! declaration {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Declaration for $ty {
                fn label(&self) -> &Identifier {
                    &self.label
                }

                fn set_label(&mut self, label: &str) -> Result<()> {
                    self.label = Identifier::new(label)?;
                    Ok(())
                }
            }
        )*
    };
}

declaration!(Field, TypedField, RepeatableField, Map, OneOf);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::definition::Message;
    use crate::model::types::ValueType;

    #[test]
    fn constructors_reject_invalid_labels() {
        assert!(Field::new(1, "Invalid!").is_err());
        assert!(TypedField::new(KeyType::Bool, 1, "InvalidIdent!").is_err());
        assert!(RepeatableField::new(KeyType::Bool, 1, "1st").is_err());
        assert!(Map::new(KeyType::Int32, KeyType::Int32, 1, "").is_err());
        assert!(OneOf::new("one of").is_err());
    }

    #[test]
    fn map_of_map_is_rejected() {
        let inner = Map::new(KeyType::String, ValueType::Double, 1, "inner").unwrap();
        let err = Map::new(KeyType::Int32, &inner, 2, "outer").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidMapValueType {
                label: "inner".to_string()
            }
        );
    }

    #[test]
    fn set_value_type_keeps_old_value_on_failure() {
        let message = Message::new("Target").unwrap();
        let mut map = Map::new(KeyType::Int32, &message, 4, "some_map").unwrap();
        let other = Map::new(KeyType::Int32, KeyType::Int32, 5, "other").unwrap();
        assert!(map.set_value_type(other).is_err());
        assert_eq!(map.value_type().name(), "Target");
        map.set_value_type(ValueType::Float).unwrap();
        assert_eq!(map.value_type().name(), "float");
    }

    #[test]
    fn set_label_keeps_old_value_on_failure() {
        let mut field = RepeatableField::new(KeyType::Int32, 1, "broogle").unwrap();
        let err = field.set_label("1InvalidIdent").unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier { .. }));
        assert_eq!(field.label(), &"broogle");
        field.set_label("doingle").unwrap();
        assert_eq!(field.label(), &"doingle");
    }

    #[test]
    fn typed_field_becomes_non_repeated_field() {
        let typed = TypedField::new(ValueType::Bytes, 3, "bar")
            .unwrap()
            .with_deprecated(true);
        let field = RepeatableField::from(typed);
        assert!(!field.repeated);
        assert!(field.deprecated);
        assert_eq!(field.number, 3);
    }

    #[test]
    fn reservations_have_no_label_or_number() {
        let member = Member::from(ReservedNumbers::from_numbers([1u32]).unwrap());
        assert_eq!(member.label(), None);
        assert_eq!(member.number(), None);
        assert_eq!(member.kind(), Kind::Reservation);
    }
}
