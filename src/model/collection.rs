// ==============================================================================
// Validating Ordered Collections
// ==============================================================================
//
// All child sequences of the model (enumeration members, message fields, oneof
// members, reserved labels and numbers, nested definitions) are `Validated`
// lists. A list is parameterized by a `Rule` that names the element kinds the
// containing context accepts. Every mutation first checks the offered
// element's kind against the rule, then runs the element's own validation,
// and only then touches storage. A failed mutation leaves the list unchanged.
//
// Elements are never handed out mutably. In-place edits go through `update`,
// which works on a copy and re-admits it, so no element can drift into a state
// its parent would have rejected on insertion.

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::identifier::Identifier;

use super::definition::Definition;
use super::field::Member;
use super::reserved::ReservedNumber;

/// Runtime kind of a model element, as seen by a collection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Field,
    TypedField,
    RepeatableField,
    Map,
    OneOf,
    Reservation,
    Message,
    Enumeration,
    Label,
    Number,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Field => "Field",
            Kind::TypedField => "TypedField",
            Kind::RepeatableField => "RepeatableField",
            Kind::Map => "Map",
            Kind::OneOf => "OneOf",
            Kind::Reservation => "Reservation",
            Kind::Message => "Message",
            Kind::Enumeration => "Enumeration",
            Kind::Label => "Label",
            Kind::Number => "Number",
        })
    }
}

/// Structural self-check of a model element.
///
/// Validation is idempotent: calling it on a valid element any number of
/// times succeeds and changes nothing.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reports the runtime kind of an element.
pub trait Kinded {
    fn kind(&self) -> Kind;
}

/// Admission rule of one collection context.
pub trait Rule {
    type Item: Kinded + Validate + Clone;

    /// Human-readable name of the context, used in error messages.
    const CONTEXT: &'static str;
    /// Element kinds the context accepts.
    const ALLOWED: &'static [Kind];
}

/// An ordered sequence whose every element satisfies the rule `R`.
pub struct Validated<R: Rule> {
    items: Vec<R::Item>,
    _rule: PhantomData<R>,
}

impl<R: Rule> Validated<R> {
    #[must_use]
    pub fn new() -> Self {
        Validated {
            items: Vec::new(),
            _rule: PhantomData,
        }
    }

    /// Build a list from `items`, failing on the first inadmissible element.
    pub fn from_items<I, T>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<R::Item>,
    {
        let mut list = Self::new();
        list.assign(items)?;
        Ok(list)
    }

    fn admit(item: &R::Item) -> Result<()> {
        let actual = item.kind();
        if !R::ALLOWED.contains(&actual) {
            tracing::debug!(context = R::CONTEXT, %actual, "rejected element kind");
            return Err(Error::InvalidFieldType {
                context: R::CONTEXT,
                allowed: R::ALLOWED,
                actual,
            });
        }
        item.validate()?;
        tracing::trace!(context = R::CONTEXT, %actual, "admitted element");
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Add `value` at the end.
    pub fn append(&mut self, value: impl Into<R::Item>) -> Result<()> {
        let value = value.into();
        Self::admit(&value)?;
        self.items.push(value);
        Ok(())
    }

    /// Insert `value` before position `index`. `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: impl Into<R::Item>) -> Result<()> {
        if index > self.items.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        let value = value.into();
        Self::admit(&value)?;
        self.items.insert(index, value);
        Ok(())
    }

    /// Replace the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: impl Into<R::Item>) -> Result<R::Item> {
        self.check_index(index)?;
        let value = value.into();
        Self::admit(&value)?;
        Ok(std::mem::replace(&mut self.items[index], value))
    }

    /// Edit the element at `index` in place.
    ///
    /// `f` runs on a copy; the copy is stored only if it is still admissible.
    pub fn update<F>(&mut self, index: usize, f: F) -> Result<()>
    where
        F: FnOnce(&mut R::Item),
    {
        self.check_index(index)?;
        let mut edited = self.items[index].clone();
        f(&mut edited);
        Self::admit(&edited)?;
        self.items[index] = edited;
        Ok(())
    }

    /// Replace the whole sequence. Either every element is admitted or the
    /// list keeps its previous contents.
    pub fn assign<I, T>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<R::Item>,
    {
        let items = items
            .into_iter()
            .map(|item| {
                let item = item.into();
                Self::admit(&item).map(|()| item)
            })
            .collect::<Result<Vec<_>>>()?;
        self.items = items;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<R::Item> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&R::Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R::Item> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[R::Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<R: Rule> Validate for Validated<R> {
    fn validate(&self) -> Result<()> {
        self.items.iter().try_for_each(Self::admit)
    }
}

impl<R: Rule> Default for Validated<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rule> Clone for Validated<R> {
    fn clone(&self) -> Self {
        Validated {
            items: self.items.clone(),
            _rule: PhantomData,
        }
    }
}

impl<R: Rule> fmt::Debug for Validated<R>
where
    R::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<R: Rule> PartialEq for Validated<R>
where
    R::Item: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<R: Rule> Eq for Validated<R> where R::Item: Eq {}

impl<'a, R: Rule> IntoIterator for &'a Validated<R> {
    type Item = &'a R::Item;
    type IntoIter = std::slice::Iter<'a, R::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ==============================================================================
// Rules per context
// ==============================================================================

/// Members of an enumeration: plain fields and reservations.
#[derive(Debug, Clone, Copy)]
pub enum EnumFields {}

impl Rule for EnumFields {
    type Item = Member;
    const CONTEXT: &'static str = "enumeration fields";
    const ALLOWED: &'static [Kind] = &[Kind::Field, Kind::Reservation];
}

/// Fields of a message.
#[derive(Debug, Clone, Copy)]
pub enum MessageFields {}

impl Rule for MessageFields {
    type Item = Member;
    const CONTEXT: &'static str = "message fields";
    const ALLOWED: &'static [Kind] = &[
        Kind::RepeatableField,
        Kind::Map,
        Kind::OneOf,
        Kind::Reservation,
    ];
}

/// Members of a oneof: typed fields only.
#[derive(Debug, Clone, Copy)]
pub enum OneOfFields {}

impl Rule for OneOfFields {
    type Item = Member;
    const CONTEXT: &'static str = "oneof fields";
    const ALLOWED: &'static [Kind] = &[Kind::TypedField];
}

/// Labels of a `reserved "a", "b";` statement.
#[derive(Debug, Clone, Copy)]
pub enum LabelList {}

impl Rule for LabelList {
    type Item = Identifier;
    const CONTEXT: &'static str = "reserved labels";
    const ALLOWED: &'static [Kind] = &[Kind::Label];
}

/// Numbers and ranges of a `reserved 1, 2 to 5;` statement.
#[derive(Debug, Clone, Copy)]
pub enum NumberList {}

impl Rule for NumberList {
    type Item = ReservedNumber;
    const CONTEXT: &'static str = "reserved numbers";
    const ALLOWED: &'static [Kind] = &[Kind::Number];
}

/// Nested message and enumeration definitions.
#[derive(Debug, Clone, Copy)]
pub enum Definitions {}

impl Rule for Definitions {
    type Item = Definition;
    const CONTEXT: &'static str = "definitions";
    const ALLOWED: &'static [Kind] = &[Kind::Message, Kind::Enumeration];
}

impl Kinded for Identifier {
    fn kind(&self) -> Kind {
        Kind::Label
    }
}

impl Validate for Identifier {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
